// src/crawl/queue.rs
// =============================================================================
// The domain queue shared by all workers.
//
// How it works:
// 1. The pipeline pushes every DomainRecord through a QueueWriter
// 2. QueueWriter::close() consumes the writer, so nothing can be added
//    afterwards (the compiler enforces "closed for writes")
// 3. Workers call DomainQueue::pop() until it returns None, which happens
//    once the queue is closed AND empty. Nobody waits forever.
//
// Under the hood this is a tokio unbounded mpsc channel. mpsc has a single
// receiver, so the receiver sits behind an async Mutex and every worker
// holds a clone of the Arc around it.
//
// Rust concepts:
// - Arc<Mutex<T>>: shared ownership of something only one task may touch at
//   a time
// - Consuming methods (fn close(self)): once called, the value is gone
// =============================================================================

use crate::records::DomainRecord;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Creates an empty queue and the single writer that fills it.
pub fn domain_queue() -> (QueueWriter, DomainQueue) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let writer = QueueWriter { sender, pushed: 0 };
    let queue = DomainQueue {
        receiver: Arc::new(Mutex::new(receiver)),
    };
    (writer, queue)
}

/// Write end of the queue. Dropping or closing it closes the queue.
#[derive(Debug)]
pub struct QueueWriter {
    sender: mpsc::UnboundedSender<DomainRecord>,
    pushed: usize,
}

impl QueueWriter {
    /// Adds a record. Returns false only if every reader is already gone.
    pub fn push(&mut self, record: DomainRecord) -> bool {
        let accepted = self.sender.send(record).is_ok();
        if accepted {
            self.pushed += 1;
        }
        accepted
    }

    /// Closes the queue for writes and returns how many records went in.
    pub fn close(self) -> usize {
        self.pushed
    }
}

/// Read end of the queue. Cheap to clone, one clone per worker.
#[derive(Debug, Clone)]
pub struct DomainQueue {
    receiver: Arc<Mutex<mpsc::UnboundedReceiver<DomainRecord>>>,
}

impl DomainQueue {
    /// Next record, or None once the queue is closed and drained.
    ///
    /// Waits while the queue is empty but still open.
    pub async fn pop(&self) -> Option<DomainRecord> {
        let mut receiver = self.receiver.lock().await;
        receiver.recv().await
    }
}

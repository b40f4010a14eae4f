// src/crawl/worker.rs
// =============================================================================
// The fixed-size worker pool.
//
// Every worker loops: pop a domain, resolve it (with retries), push the
// result, repeat. When the queue reports closed-and-empty the worker
// returns its counters and stops. There is no other shutdown signal.
//
// Each worker gets its own fetcher from the factory passed to drain(), so
// no HTTP client is shared between workers.
// =============================================================================

use super::collector::ResultCollector;
use super::queue::DomainQueue;
use super::retry::resolve_with_retries;
use crate::error::CrawlError;
use crate::resolver::{Fetch, Resolver};
use futures::future::join_all;
use tracing::debug;

/// What one worker did during the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub id: usize,
    pub processed: usize,
    pub failed: usize,
}

struct Worker<F> {
    id: usize,
    resolver: Resolver<F>,
}

impl<F: Fetch> Worker<F> {
    async fn run(self, queue: DomainQueue, collector: ResultCollector) -> WorkerStats {
        debug!("Starting worker {}", self.id);
        let mut stats = WorkerStats {
            id: self.id,
            ..WorkerStats::default()
        };

        while let Some(record) = queue.pop().await {
            let result = resolve_with_retries(&self.resolver, record).await;

            stats.processed += 1;
            if result.favicon.is_failed() {
                stats.failed += 1;
            }
            collector.push(result).await;
        }

        debug!(
            "Worker {} stopped after {} domains ({} failed)",
            self.id, stats.processed, stats.failed
        );
        stats
    }
}

#[derive(Debug, Clone)]
pub struct WorkerPool {
    size: usize,
    dom_only: bool,
}

impl WorkerPool {
    /// A pool of `size` workers (at least one).
    pub fn new(size: usize, dom_only: bool) -> Self {
        Self {
            size: size.max(1),
            dom_only,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Runs the workers until `queue` is drained and returns their stats.
    ///
    /// All fetchers are built before any worker starts, so a factory error
    /// leaves the queue untouched.
    pub async fn drain<F, M>(
        &self,
        queue: &DomainQueue,
        collector: &ResultCollector,
        mut make_fetcher: M,
    ) -> Result<Vec<WorkerStats>, CrawlError>
    where
        F: Fetch + 'static,
        M: FnMut(usize) -> Result<F, CrawlError>,
    {
        let workers = (0..self.size)
            .map(|id| -> Result<Worker<F>, CrawlError> {
                Ok(Worker {
                    id,
                    resolver: Resolver::new(make_fetcher(id)?, self.dom_only),
                })
            })
            .collect::<Result<Vec<_>, CrawlError>>()?;

        let handles = workers.into_iter().map(|worker| {
            let queue = queue.clone();
            let collector = collector.clone();
            tokio::spawn(worker.run(queue, collector))
        });

        // join_all keeps the spawn order, so index == worker id
        join_all(handles)
            .await
            .into_iter()
            .enumerate()
            .map(|(id, joined)| joined.map_err(|source| CrawlError::Worker { id, source }))
            .collect()
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why tokio::spawn and not just join_all over the futures?
//    - join_all alone polls every future on the current task, one at a time
//    - spawn hands each worker to the multi-threaded runtime, so workers
//      really run in parallel on different OS threads
//
// 2. What is a JoinError?
//    - What awaiting a JoinHandle gives back if the task panicked
//    - We turn it into CrawlError::Worker; a worker never fails otherwise,
//      because every domain ends in exactly one FaviconResult
//
// 3. Why a factory closure (FnMut(usize) -> Result<F, _>)?
//    - Each worker owns its own HTTP client
//    - Tests pass a closure that hands out mocks instead
// -----------------------------------------------------------------------------

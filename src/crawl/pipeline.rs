// src/crawl/pipeline.rs
// =============================================================================
// Drives one complete run.
//
// Phases (strictly one after the other, never backwards):
//   Idle -> Loading -> Draining -> Finalizing -> Done
//
// - Loading:    every input row becomes a DomainRecord in the queue, then
//               the queue is closed
// - Draining:   the worker pool empties the queue
// - Finalizing: results are sorted by rank and counted
//
// A Pipeline is consumed by run(), so a run cannot be restarted.
// =============================================================================

use super::collector::ResultCollector;
use super::queue::domain_queue;
use super::worker::WorkerPool;
use crate::config::CrawlerConfig;
use crate::error::CrawlError;
use crate::records::{DomainRecord, FaviconResult, InputRow};
use crate::resolver::Fetch;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Draining,
    Finalizing,
    Done,
}

/// Counts reported at the end of a run (also printed by --json).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
    pub workers: usize,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    /// One row per input record, sorted by rank
    pub results: Vec<FaviconResult>,
    pub summary: RunSummary,
}

pub struct Pipeline {
    config: Arc<CrawlerConfig>,
    phase: Phase,
}

impl Pipeline {
    pub fn new(config: Arc<CrawlerConfig>) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!("Pipeline {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Crawls every row and returns the sorted results.
    ///
    /// `make_fetcher` is called once per worker, with the worker id.
    pub async fn run<F, M>(mut self, rows: Vec<InputRow>, make_fetcher: M) -> Result<RunReport, CrawlError>
    where
        F: Fetch + 'static,
        M: FnMut(usize) -> Result<F, CrawlError>,
    {
        let started = Instant::now();

        self.enter(Phase::Loading);
        let (mut writer, queue) = domain_queue();
        for row in rows {
            writer.push(DomainRecord::new(row, self.config.retries));
        }
        let loaded = writer.close();
        info!("{} domains found in input CSV.", loaded);

        self.enter(Phase::Draining);
        let pool = WorkerPool::new(self.config.workers, self.config.dom_only);
        info!("Will now crawl domains with {} worker threads.", pool.size());
        let collector = ResultCollector::new();
        let stats = pool.drain(&queue, &collector, make_fetcher).await?;
        for worker in &stats {
            debug!(
                "Worker {} processed {} domains, {} failed",
                worker.id, worker.processed, worker.failed
            );
        }
        debug!("{} results collected", collector.len().await);

        self.enter(Phase::Finalizing);
        let results = collector.into_sorted().await;
        if results.len() != loaded {
            warn!("{} domains loaded but {} results collected", loaded, results.len());
        }
        let summary = RunSummary {
            processed: results.len(),
            failed: results.iter().filter(|r| r.favicon.is_failed()).count(),
            workers: pool.size(),
            elapsed_secs: round_secs(started.elapsed()),
        };

        self.enter(Phase::Done);
        info!("Finished!");
        info!("Time elapsed: {:.3}s", summary.elapsed_secs);
        info!(
            "Processed {} domains with {} failures.",
            summary.processed, summary.failed
        );

        Ok(RunReport { results, summary })
    }
}

fn round_secs(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).round() / 1000.0
}

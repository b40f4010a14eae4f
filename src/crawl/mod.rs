// src/crawl/mod.rs
// =============================================================================
// This module runs the crawl: a queue of domains, a pool of workers draining
// it concurrently, and a collector that puts the results back in rank order.
//
// Submodules:
// - queue: closable multi-consumer FIFO of DomainRecords
// - collector: concurrent result sink, sorted at the end
// - retry: immediate-retry loop around the resolver
// - worker: the fixed-size worker pool
// - pipeline: the Idle -> Loading -> Draining -> Finalizing -> Done driver
// =============================================================================

mod collector;
mod pipeline;
mod queue;
mod retry;
mod worker;

pub use pipeline::Pipeline;
pub use retry::resolve_with_retries;

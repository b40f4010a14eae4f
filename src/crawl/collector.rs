// src/crawl/collector.rs
// =============================================================================
// Where workers drop their results.
//
// Results arrive in whatever order the workers finish. The collector does
// not care: it only promises that every push is kept (no lost or duplicated
// rows) and that into_sorted() hands them back ordered by rank.
// =============================================================================

use crate::records::FaviconResult;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    results: Arc<Mutex<Vec<FaviconResult>>>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, result: FaviconResult) {
        self.results.lock().await.push(result);
    }

    pub async fn len(&self) -> usize {
        self.results.lock().await.len()
    }

    /// Takes everything collected so far, sorted by rank ascending.
    ///
    /// The sort is stable, so duplicate ranks keep their arrival order.
    pub async fn into_sorted(self) -> Vec<FaviconResult> {
        let mut results = std::mem::take(&mut *self.results.lock().await);
        results.sort_by_key(|r| r.rank);
        results
    }
}

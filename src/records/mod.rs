// src/records/mod.rs
// =============================================================================
// The rows that flow through the crawler.
//
// - DomainRecord: one input row plus the retry budget left for it. Owned by
//   exactly one worker at a time.
// - FaviconResult: the single output row produced for every DomainRecord.
//
// Submodules:
// - file: reading the input CSV and writing the output CSV
// =============================================================================

mod file;

pub use file::{read_domains, write_results};

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Sentinel written in place of a URL when a domain could not be resolved.
pub const FAILED: &str = "FAILED";

/// One `rank,url` line of the input file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputRow {
    pub rank: i64,
    pub url: String,
}

/// A domain waiting in (or popped from) the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    pub rank: i64,
    /// The domain exactly as given, without scheme
    pub url: String,
    /// Attempts left after the current one; only ever goes down
    pub retries_remaining: u32,
}

impl DomainRecord {
    pub fn new(row: InputRow, retries: u32) -> Self {
        Self {
            rank: row.rank,
            url: row.url,
            retries_remaining: retries,
        }
    }
}

/// Outcome of resolving one domain.
///
/// An enum instead of `Option<String>` so "failed" can never be confused
/// with an empty URL, and always serializes to something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Favicon {
    Found(String),
    Failed,
}

impl Favicon {
    pub fn as_str(&self) -> &str {
        match self {
            Favicon::Found(url) => url,
            Favicon::Failed => FAILED,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Favicon::Failed)
    }
}

impl From<Option<String>> for Favicon {
    fn from(url: Option<String>) -> Self {
        url.map_or(Favicon::Failed, Favicon::Found)
    }
}

impl fmt::Display for Favicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Favicon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One output row. Never mutated once pushed into the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaviconResult {
    pub rank: i64,
    pub domain: String,
    #[serde(rename = "favicon_url")]
    pub favicon: Favicon,
}

impl FaviconResult {
    pub fn new(record: DomainRecord, favicon: Favicon) -> Self {
        Self {
            rank: record.rank,
            domain: record.url,
            favicon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_record_starts_with_full_budget() {
        let row = InputRow {
            rank: 7,
            url: "example.com".to_string(),
        };
        let record = DomainRecord::new(row, 3);
        assert_eq!(record.rank, 7);
        assert_eq!(record.url, "example.com");
        assert_eq!(record.retries_remaining, 3);
    }

    #[test]
    fn test_favicon_from_option() {
        assert_eq!(Favicon::from(None), Favicon::Failed);
        assert_eq!(
            Favicon::from(Some("https://a.com/favicon.ico".to_string())),
            Favicon::Found("https://a.com/favicon.ico".to_string())
        );
    }

    #[test]
    fn test_failed_sentinel_text() {
        assert_eq!(Favicon::Failed.to_string(), "FAILED");
        assert!(Favicon::Failed.is_failed());
        assert!(!Favicon::Found("x".to_string()).is_failed());
    }

    #[test]
    fn test_result_copies_rank_and_domain() {
        let record = DomainRecord {
            rank: 2,
            url: "rust-lang.org".to_string(),
            retries_remaining: 0,
        };
        let result = FaviconResult::new(record, Favicon::Failed);
        assert_eq!(result.rank, 2);
        assert_eq!(result.domain, "rust-lang.org");
    }
}

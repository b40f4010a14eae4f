// src/crawl/retry.rs
// =============================================================================
// Retry loop around the resolver.
//
// Policy: try once; while the attempt comes back empty and the record still
// has retries left, spend one and try again right away (no backoff). A
// record configured with `retries = N` therefore gets at most N + 1 attempts.
// =============================================================================

use crate::records::{DomainRecord, Favicon, FaviconResult};
use crate::resolver::{Fetch, Resolver};
use tracing::{debug, error};

/// Resolves one record, retrying as its budget allows.
///
/// Always produces exactly one result; an exhausted budget yields
/// `Favicon::Failed` and one error-level log line.
pub async fn resolve_with_retries<F: Fetch>(
    resolver: &Resolver<F>,
    mut record: DomainRecord,
) -> FaviconResult {
    let favicon = loop {
        if let Some(url) = resolver.resolve(&record.url).await {
            break Favicon::Found(url);
        }
        if record.retries_remaining == 0 {
            break Favicon::Failed;
        }
        record.retries_remaining -= 1;
        debug!(
            domain = %record.url,
            retries_left = record.retries_remaining,
            "no favicon yet, retrying"
        );
    };

    if favicon.is_failed() {
        error!("Failed to get favicon for {}", record.url);
    }

    FaviconResult::new(record, favicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::resolver::MockFetch;
    use crate::testing::Fixture;

    // A dead domain costs one probe and one page load per prefix, per attempt
    const PREFIXES: usize = 4;

    fn record(retries: u32) -> DomainRecord {
        DomainRecord {
            rank: 42,
            url: "a.com".to_string(),
            retries_remaining: retries,
        }
    }

    // The first attempt times out on every request. After that only the
    // https://www. favicon probe answers, with a 200.
    fn flaky(probes: usize, page_loads: usize) -> MockFetch {
        let mut mock = MockFetch::new();
        let answers = Fixture::new().with_status("https://www.a.com/favicon.ico", 200);
        let mut timeouts = PREFIXES;
        mock.expect_status().times(probes).returning(move |url| {
            if timeouts > 0 {
                timeouts -= 1;
                return Err(FetchError::Timeout);
            }
            answers.status_for(url)
        });
        mock.expect_page()
            .times(page_loads)
            .returning(|_| Err(FetchError::Timeout));
        mock
    }

    #[tokio::test]
    async fn test_exhaustion_makes_retries_plus_one_attempts() {
        let mock = Fixture::new().mock_times(3 * PREFIXES, 3 * PREFIXES);
        let resolver = Resolver::new(mock, false);

        let result = resolve_with_retries(&resolver, record(2)).await;

        assert_eq!(result.favicon, Favicon::Failed);
        assert_eq!(result.rank, 42);
        assert_eq!(result.domain, "a.com");
    }

    #[tokio::test]
    async fn test_zero_retries_means_one_attempt() {
        let mock = Fixture::new().mock_times(PREFIXES, PREFIXES);
        let resolver = Resolver::new(mock, false);

        let result = resolve_with_retries(&resolver, record(0)).await;

        assert!(result.favicon.is_failed());
    }

    #[tokio::test]
    async fn test_success_stops_retrying() {
        let mock = Fixture::new()
            .with_status("https://www.a.com/favicon.ico", 200)
            .mock_times(1, 0);
        let resolver = Resolver::new(mock, false);

        let result = resolve_with_retries(&resolver, record(5)).await;

        assert_eq!(
            result.favicon,
            Favicon::Found("https://www.a.com/favicon.ico".to_string())
        );
    }

    #[tokio::test]
    async fn test_flaky_network_recovers_on_retry() {
        // Second attempt: the very first probe succeeds
        let resolver = Resolver::new(flaky(PREFIXES + 1, PREFIXES), false);

        let result = resolve_with_retries(&resolver, record(1)).await;

        assert_eq!(
            result.favicon,
            Favicon::Found("https://www.a.com/favicon.ico".to_string())
        );
    }

    #[tokio::test]
    async fn test_flaky_network_without_retries_fails() {
        let resolver = Resolver::new(flaky(PREFIXES, PREFIXES), false);

        let result = resolve_with_retries(&resolver, record(0)).await;
        assert!(result.favicon.is_failed());
    }
}

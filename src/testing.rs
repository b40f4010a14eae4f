// src/testing.rs
// =============================================================================
// Canned network responses for the unit tests.
//
// A Fixture maps URLs to answers: `with_status` URLs answer the favicon probe
// with that status code, `with_page` URLs answer page loads with that body.
// Every other URL fails the way an unreachable host would.
//
// mock() turns the fixture into a mockall MockFetch. mock_times() does the
// same and also pins how many probes and page loads the test expects; the
// mock panics on drop if the counts are off.
// =============================================================================

use crate::error::FetchError;
use crate::resolver::MockFetch;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Fixture {
    statuses: HashMap<String, StatusCode>,
    pages: HashMap<String, String>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.statuses.insert(url.to_string(), status);
        self
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn status_for(&self, url: &str) -> Result<StatusCode, FetchError> {
        self.statuses
            .get(url)
            .copied()
            .ok_or_else(|| FetchError::Connect(format!("no route to {url}")))
    }

    pub fn page_for(&self, url: &str) -> Result<String, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Dns(format!("unknown host in {url}")))
    }

    /// Any number of calls allowed.
    pub fn mock(self) -> MockFetch {
        self.build(None, None)
    }

    /// Exactly `statuses` probes and `pages` page loads.
    pub fn mock_times(self, statuses: usize, pages: usize) -> MockFetch {
        self.build(Some(statuses), Some(pages))
    }

    fn build(self, status_times: Option<usize>, page_times: Option<usize>) -> MockFetch {
        let fixture = Arc::new(self);
        let mut mock = MockFetch::new();

        let answers = fixture.clone();
        let status = mock
            .expect_status()
            .returning(move |url| answers.status_for(url));
        if let Some(n) = status_times {
            status.times(n);
        }

        let answers = fixture;
        let page = mock
            .expect_page()
            .returning(move |url| answers.page_for(url));
        if let Some(n) = page_times {
            page.times(n);
        }

        mock
    }
}

// src/resolver/fetch.rs
// =============================================================================
// The HTTP side of favicon resolution.
//
// The resolver only needs two things from the network:
// - the status code of a GET (for the /favicon.ico probe)
// - the body of a GET as text (for the homepage markup)
//
// Those two operations form the `Fetch` trait. The real implementation,
// HttpFetcher, wraps a reqwest Client. Under test, mockall generates
// MockFetch from the trait, so resolver tests never touch the network.
//
// Rust concepts:
// - async_trait: lets a trait have async methods and still be used from
//   tokio::spawn'ed tasks (the futures it produces are Send)
// - Blanket impls: Arc<T> is a Fetch whenever T is one
// =============================================================================

use crate::config::CrawlerConfig;
use crate::error::{CrawlError, FetchError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, StatusCode};
use std::sync::Arc;

/// Network access as seen by the resolver.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET `url` and report only the status code.
    async fn status(&self, url: &str) -> Result<StatusCode, FetchError>;

    /// GET `url` and return the body as text, whatever the status code.
    async fn page(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: Fetch + ?Sized> Fetch for Arc<T> {
    async fn status(&self, url: &str) -> Result<StatusCode, FetchError> {
        (**self).status(url).await
    }

    async fn page(&self, url: &str) -> Result<String, FetchError> {
        (**self).page(url).await
    }
}

/// reqwest-backed fetcher. Every worker builds its own.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client with the configured timeout and browser-like headers.
    pub fn new(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value(&config.accept)?);
        headers.insert(ACCEPT_LANGUAGE, header_value(&config.accept_language)?);

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(CrawlError::Client)?;

        Ok(Self { client })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, CrawlError> {
    HeaderValue::from_str(value).map_err(|source| CrawlError::Header {
        value: value.to_string(),
        source,
    })
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn status(&self, url: &str) -> Result<StatusCode, FetchError> {
        let response = self.client.get(url).send().await?;
        Ok(response.status())
    }

    async fn page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let body = response.text().await?;
        Ok(body)
    }
}

// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// Two families:
// - FetchError: one HTTP request went wrong. The resolver always swallows
//   these and moves on to the next URL prefix, so they never leave a worker.
// - CrawlError: something that stops the whole run (bad configuration,
//   unreadable input, unwritable output, a worker that panicked).
//
// A domain whose favicon could not be found is NOT an error at all; it is
// recorded as a FAILED row in the output.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single HTTP request.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Could not resolve the hostname
    #[error("could not resolve hostname: {0}")]
    Dns(String),

    /// Connection refused, reset, TLS handshake failure, ...
    #[error("connection failed: {0}")]
    Connect(String),

    /// The response body could not be read as text
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Anything else reqwest reports (invalid URL, too many redirects, ...)
    #[error("request failed: {0}")]
    Request(String),
}

// Sorts reqwest errors into our variants, the same way the link checker used
// to label broken links.
impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();

        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_connect() {
            // reqwest only exposes DNS failures through the message text
            let lowered = format!("{:?}", error).to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                FetchError::Dns(message)
            } else {
                FetchError::Connect(message)
            }
        } else if error.is_body() || error.is_decode() {
            FetchError::Body(message)
        } else {
            FetchError::Request(message)
        }
    }
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("please specify an input file with --input <PATH>")]
    MissingInput,

    #[error("failed to read input file {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write output file {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid request header value {value:?}: {source}")]
    Header {
        value: String,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("worker {id} stopped unexpectedly: {source}")]
    Worker {
        id: usize,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl CrawlError {
    /// Process exit code for this error.
    ///
    /// Configuration problems get their own code so scripts can tell
    /// "you called me wrong" apart from "the run broke".
    pub fn exit_code(&self) -> i32 {
        match self {
            CrawlError::MissingInput => 2,
            _ => 1,
        }
    }
}

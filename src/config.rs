// src/config.rs
// =============================================================================
// The immutable run configuration.
//
// The CLI is parsed once in main.rs and turned into a CrawlerConfig here.
// After that nothing reads flags or environment variables again: the config
// is wrapped in an Arc and handed to the pipeline, which hands it to every
// worker and every HTTP client.
// =============================================================================

use crate::cli::Cli;
use crate::error::CrawlError;
use std::path::PathBuf;
use std::time::Duration;

/// URL prefixes tried for every domain, in this exact order.
pub const URL_PREFIXES: [&str; 4] = ["https://www.", "https://", "http://", "http://www."];

// Browser-like headers. Plenty of sites reject requests that look like bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
pub const DEFAULT_ACCEPT: &str = "image/avif,image/webp,image/apng,image/svg+xml,image/*,*/*;q=0.8";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-CA,en-GB;q=0.9,en-US;q=0.8,en;q=0.7";

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Crawl every domain of `input` and write the table to `output`
    Batch { input: PathBuf, output: PathBuf },
    /// Resolve one domain and print it
    Single(String),
}

/// Everything a run needs, fixed at startup.
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    pub mode: RunMode,
    /// Extra attempts after the first failed one
    pub retries: u32,
    pub timeout: Duration,
    pub workers: usize,
    /// Skip the /favicon.ico probe
    pub dom_only: bool,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Batch {
                input: PathBuf::new(),
                output: PathBuf::from("output.csv"),
            },
            retries: 0,
            timeout: Duration::from_secs(3),
            workers: 10,
            dom_only: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

impl CrawlerConfig {
    /// Builds the config from parsed arguments.
    ///
    /// Fails with `CrawlError::MissingInput` when neither `--input` nor
    /// `--single` was given.
    pub fn from_cli(cli: &Cli) -> Result<Self, CrawlError> {
        let mode = match (&cli.single, &cli.input) {
            (Some(domain), _) => RunMode::Single(domain.trim().to_string()),
            (None, Some(input)) if !input.as_os_str().is_empty() => RunMode::Batch {
                input: input.clone(),
                output: cli.output.clone(),
            },
            (None, _) => return Err(CrawlError::MissingInput),
        };

        Ok(Self {
            mode,
            retries: cli.retries,
            timeout: Duration::from_secs(cli.timeout),
            workers: usize::from(cli.threads).max(1),
            dom_only: cli.dom_only,
            ..Self::default()
        })
    }
}

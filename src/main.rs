// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing)
// 3. Turn the arguments into an immutable CrawlerConfig
// 4. Either resolve a single domain (--single) or run the full pipeline:
//    read CSV -> crawl -> write CSV
// 5. Exit with a proper code (0 = done, 1 = run failed, 2 = bad usage)
//
// Domains whose favicon could not be found do NOT change the exit code; they
// show up as FAILED rows and in the final summary.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod error;
mod records;
mod resolver;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::{CrawlerConfig, RunMode};
use crawl::Pipeline;
use error::CrawlError;
use records::DomainRecord;
use resolver::{HttpFetcher, Resolver};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// The #[tokio::main] attribute builds the multi-threaded runtime our workers
// run on
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            error!("Error: {}", e);
            e.downcast_ref::<CrawlError>()
                .map_or(1, CrawlError::exit_code)
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins when set; otherwise info, or debug for our own crate with -v
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "info,favicon_crawler=debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Arc::new(CrawlerConfig::from_cli(&cli)?);

    match &config.mode {
        RunMode::Single(domain) => resolve_single(&config, domain).await,
        RunMode::Batch { input, output } => {
            run_batch(config.clone(), input, output, cli.json).await
        }
    }
}

// Full run: CSV in, crawl, CSV out
async fn run_batch(
    config: Arc<CrawlerConfig>,
    input: &Path,
    output: &Path,
    json: bool,
) -> Result<()> {
    info!("Reading input CSV {}...", input.display());
    let rows = records::read_domains(input)?;

    let report = Pipeline::new(config.clone())
        .run(rows, |_| HttpFetcher::new(&config))
        .await?;

    records::write_results(output, &report.results)?;
    info!("Results written to {}", output.display());

    if json {
        let summary = serde_json::to_string_pretty(&report.summary)
            .context("failed to serialize run summary")?;
        println!("{}", summary);
    }

    Ok(())
}

// Debug helper: resolve one domain with the same retry policy and print it
async fn resolve_single(config: &CrawlerConfig, domain: &str) -> Result<()> {
    let resolver = Resolver::new(HttpFetcher::new(config)?, config.dom_only);
    let record = DomainRecord {
        rank: 0,
        url: domain.to_string(),
        retries_remaining: config.retries,
    };

    let result = crawl::resolve_with_retries(&resolver, record).await;
    println!("{}", result.favicon);
    Ok(())
}

// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every option has a default except --input. We deliberately do NOT mark
// --input as required for clap: a missing input is reported by our own
// configuration check (see config.rs) so it gets its own exit code, and so
// that --single can run without any input file.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "favicon-crawler",
    version = "0.1.0",
    about = "Finds the favicon URL of every domain in a CSV list",
    long_about = "favicon-crawler reads a headerless CSV of `rank,domain` rows, looks up the \
                  favicon of every domain with a pool of concurrent workers and writes a \
                  `rank,domain,favicon_url` CSV in rank order."
)]
pub struct Cli {
    /// Input CSV file with `rank,domain` rows and no header
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Where to write the results
    #[arg(long, default_value = "output.csv")]
    pub output: PathBuf,

    /// How many extra attempts a domain gets after its first one fails
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 3)]
    pub timeout: u64,

    /// Number of concurrent workers
    ///
    /// value_parser with a range rejects 0 before we ever see it
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,

    /// Skip the optimistic /favicon.ico probe and only inspect the page markup
    #[arg(long)]
    pub dom_only: bool,

    /// Resolve a single domain, print the result and exit (no files involved)
    #[arg(long, value_name = "DOMAIN")]
    pub single: Option<String>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Debug logging, including every request that failed along the way
    #[arg(short, long)]
    pub verbose: bool,
}

//! Command-line argument parsing for Frontpage Fetcher
//!
//! This module defines the CLI structure using clap derive macros. The tool
//! has a single flat command surface: date selection, output location, and
//! logging verbosity.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::app::models::DownloadOptions;
use crate::constants::fetch;

/// Frontpage Fetcher - download New York Times front pages
#[derive(Parser, Debug)]
#[command(
    name = "frontpage_fetcher",
    version,
    about = "Download New York Times front-page scans by date",
    long_about = "A sequential downloader for the New York Times front-page archive.
Fetches the national PDF, international PDF, and JPEG scans for a single date
or an inclusive date range into a date-partitioned output tree."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Fetch options
    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Global arguments controlling output verbosity
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Very verbose logging (trace level)
    #[arg(long)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments selecting what to fetch and where to put it
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Fetch a single date, in YYYYMMDD format
    #[arg(long, value_name = "YYYYMMDD")]
    pub date: Option<String>,

    /// Start of an inclusive date range, in YYYYMMDD format
    #[arg(long, value_name = "YYYYMMDD")]
    pub start_date: Option<String>,

    /// End of the range, inclusive (defaults to today)
    #[arg(long, value_name = "YYYYMMDD")]
    pub end_date: Option<String>,

    /// Skip downloads of files already present in the output tree
    #[arg(long)]
    pub skip_existing: bool,

    /// Output directory root
    #[arg(long, value_name = "DIR", default_value = fetch::DEFAULT_OUTPUT_DIR)]
    pub out: PathBuf,

    /// Dry run - list the URLs that would be fetched without downloading
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    ///
    /// The default is INFO so the per-file notices are visible on a plain
    /// invocation.
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::TRACE
        } else if self.global.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

impl FetchArgs {
    /// Check whether the invocation selects any dates at all
    ///
    /// `--date` and `--start-date` are independent selections and may both
    /// appear; with neither, the run has nothing to do.
    pub fn has_work(&self) -> bool {
        self.date.is_some() || self.start_date.is_some()
    }

    /// True when `--end-date` was given without `--start-date`
    ///
    /// The end token is ignored in that case; callers warn about it.
    pub fn dangling_end_date(&self) -> bool {
        self.end_date.is_some() && self.start_date.is_none()
    }

    /// Build the run options from the output arguments
    pub fn options(&self) -> DownloadOptions {
        DownloadOptions {
            output_dir: self.out.clone(),
            skip_existing: self.skip_existing,
        }
    }
}

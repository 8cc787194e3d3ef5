//! Frontpage Fetcher CLI application
//!
//! Command-line interface for downloading New York Times front-page scans
//! by date or inclusive date range, with skip-existing support.

use std::process;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use frontpage_fetcher::cli::{Cli, handle_fetch};
use frontpage_fetcher::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    // Handle any errors that occurred
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(&cli);

    info!("Frontpage Fetcher v{} starting", env!("CARGO_PKG_VERSION"));

    handle_fetch(cli.fetch).await
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    // Create environment filter
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("frontpage_fetcher={}", log_level).parse().unwrap());

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}

//! Command handlers for Frontpage Fetcher CLI
//!
//! This module bridges the parsed arguments and the core fetch loop:
//! date-token parsing, single-date and range dispatch, dry-run listing,
//! and the end-of-run summary.

use tracing::{info, warn};

use crate::app::{
    fetch_date, fetch_range, resolve_urls_from, FetchStats, FrontPageClient, IssueDate,
};
use crate::cli::FetchArgs;
use crate::errors::Result;

/// Handle a fetch invocation
///
/// `--date` and `--start-date` are independent selections; when both are
/// present the single date is fetched first, then the range. With neither,
/// the run performs no work and exits cleanly. Individual download
/// failures never fail the run; date-token, filesystem, and transport
/// errors do.
pub async fn handle_fetch(args: FetchArgs) -> Result<()> {
    if !args.has_work() {
        info!("No --date or --start-date given; nothing to do");
        return Ok(());
    }

    if args.dangling_end_date() {
        warn!("--end-date has no effect without --start-date");
    }

    let options = args.options();
    let client = FrontPageClient::new()?;
    let mut stats = FetchStats::default();

    if let Some(token) = args.date.as_deref() {
        let date = IssueDate::parse(token)?;
        if args.dry_run {
            list_urls(&client, date);
        } else {
            info!("Downloading date {}", date);
            stats.merge(fetch_date(&client, date, &options).await?);
        }
    }

    if let Some(token) = args.start_date.as_deref() {
        let start = IssueDate::parse(token)?;
        let end = match args.end_date.as_deref() {
            Some(token) => IssueDate::parse(token)?,
            None => IssueDate::today(),
        };

        if args.dry_run {
            let mut date = start;
            while date <= end {
                list_urls(&client, date);
                date = match date.succ() {
                    Some(next) => next,
                    None => break,
                };
            }
        } else {
            info!("Downloading from {} to {}", start, end);
            stats.merge(fetch_range(&client, start, end, &options).await?);
        }
    }

    if !args.dry_run {
        print_fetch_summary(&stats);
    }

    Ok(())
}

/// Print the URLs a real run would fetch for `date`
fn list_urls(client: &FrontPageClient, date: IssueDate) {
    println!("{}:", date);
    for url in resolve_urls_from(client.base_url().as_str(), date) {
        println!("  {}", url);
    }
}

/// Print the end-of-run summary
fn print_fetch_summary(stats: &FetchStats) {
    println!("\n📊 Fetch Summary:");
    println!("  Downloaded: {}", stats.downloaded);
    println!("  Skipped (already present): {}", stats.skipped);
    println!("  Unavailable: {}", stats.unavailable);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_args() -> FetchArgs {
        FetchArgs {
            date: None,
            start_date: None,
            end_date: None,
            skip_existing: false,
            out: PathBuf::from("out"),
            dry_run: false,
        }
    }

    #[tokio::test]
    async fn test_handle_fetch_without_selection_is_noop() {
        // No --date and no --start-date: exits cleanly before any network
        // or filesystem activity
        let result = handle_fetch(base_args()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_handle_fetch_dry_run_touches_nothing() {
        let out = tempdir().unwrap();
        let out_root = out.path().join("dry");

        let args = FetchArgs {
            date: Some("20130101".to_string()),
            start_date: Some("20130101".to_string()),
            end_date: Some("20130102".to_string()),
            out: out_root.clone(),
            dry_run: true,
            ..base_args()
        };

        let result = handle_fetch(args).await;
        assert!(result.is_ok());
        assert!(!out_root.exists());
    }

    #[tokio::test]
    async fn test_handle_fetch_rejects_bad_token() {
        let args = FetchArgs {
            date: Some("2013-01-01".to_string()),
            dry_run: true,
            ..base_args()
        };

        let result = handle_fetch(args).await;
        assert!(result.is_err());
    }
}

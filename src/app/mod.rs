//! Core application logic for Frontpage Fetcher
//!
//! This module contains the main application components: the issue-date
//! type, the fixed asset table with URL resolution, the HTTP client, and
//! the sequential fetch loop.
//!
//! # Examples
//!
//! ```rust,no_run
//! use frontpage_fetcher::app::{fetch_date, DownloadOptions, FrontPageClient, IssueDate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FrontPageClient::new()?;
//! let date = IssueDate::parse("20130101")?;
//!
//! let stats = fetch_date(&client, date, &DownloadOptions::default()).await?;
//! println!("downloaded {} front-page assets", stats.downloaded);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod date;
pub mod fetch;
pub mod models;

// Re-export main public API
pub use client::{ClientConfig, FrontPageClient};
pub use date::IssueDate;
pub use fetch::{fetch_and_store, fetch_date, fetch_range};
pub use models::{resolve_urls, resolve_urls_from, AssetKind, DownloadOptions, FetchStats};

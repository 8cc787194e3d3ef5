//! Data models for Frontpage Fetcher
//!
//! This module defines the fixed front-page asset table, URL resolution for
//! a given issue date, and the configuration and counters carried through a
//! fetch run.

use std::fmt;
use std::path::PathBuf;

use crate::app::date::IssueDate;
use crate::constants::{fetch, nyt};

/// One of the downloadable representations of a day's front page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// National edition front page as a PDF scan
    NationalPdf,
    /// International edition front page as a PDF scan
    InternationalPdf,
    /// Front page as a JPEG scan
    Jpeg,
}

impl AssetKind {
    /// All asset kinds, in resolution order
    pub const ALL: [AssetKind; 3] = [Self::NationalPdf, Self::InternationalPdf, Self::Jpeg];

    /// File name of this asset inside the dated archive folder
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::NationalPdf => "scannat.pdf",
            Self::InternationalPdf => "scan.pdf",
            Self::Jpeg => "scan.jpg",
        }
    }

    /// Earliest issue date for which the archive serves this asset
    ///
    /// The PDF scans begin with the 2012-07-06 issue; JPEG scans go back to
    /// the first issue of the paper.
    pub fn available_from(&self) -> IssueDate {
        match self {
            Self::NationalPdf | Self::InternationalPdf => IssueDate::from_ymd(2012, 7, 6),
            Self::Jpeg => IssueDate::from_ymd(1851, 9, 18),
        }
        .expect("asset epoch should be a valid date")
    }

    /// Archive URL of this asset for the given date
    ///
    /// # Arguments
    ///
    /// * `base_url` - archive base URL (e.g. "http://www.nytimes.com")
    /// * `date` - the issue date
    pub fn url(&self, base_url: &str, date: IssueDate) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            base_url.trim_end_matches('/'),
            nyt::IMAGES_SEGMENT,
            date.slash_path(),
            nyt::FRONTPAGE_SEGMENT,
            self.file_name()
        )
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NationalPdf => "national-pdf",
            Self::InternationalPdf => "international-pdf",
            Self::Jpeg => "jpg",
        };
        write!(f, "{}", label)
    }
}

/// Resolve the archive URLs applicable to `date`, in fixed table order
///
/// A kind contributes its URL if and only if the date falls on or after the
/// kind's availability epoch. The result is a pure function of the date and
/// the asset table; no network or filesystem state is consulted.
pub fn resolve_urls(date: IssueDate) -> Vec<String> {
    resolve_urls_from(nyt::BASE_URL, date)
}

/// Resolve asset URLs for `date` against an arbitrary base URL
///
/// Used by tests to point the fetch loop at a local server; production code
/// goes through [`resolve_urls`].
pub fn resolve_urls_from(base_url: &str, date: IssueDate) -> Vec<String> {
    AssetKind::ALL
        .iter()
        .filter(|kind| date >= kind.available_from())
        .map(|kind| kind.url(base_url, date))
        .collect()
}

/// Configuration for a fetch run
///
/// Immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Root of the date-partitioned output tree
    pub output_dir: PathBuf,
    /// Do not re-fetch or overwrite files already present on disk
    pub skip_existing: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(fetch::DEFAULT_OUTPUT_DIR),
            skip_existing: false,
        }
    }
}

/// Counters accumulated over a fetch run
///
/// Purely informational: the counters feed the end-of-run summary and never
/// influence control flow or the exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Files downloaded and written to disk
    pub downloaded: usize,
    /// Files skipped because they were already present
    pub skipped: usize,
    /// Assets the server declined to serve (non-2xx response)
    pub unavailable: usize,
}

impl FetchStats {
    /// Fold another day's counters into this one
    pub fn merge(&mut self, other: FetchStats) {
        self.downloaded += other.downloaded;
        self.skipped += other.skipped;
        self.unavailable += other.unavailable;
    }

    /// Total number of targets considered
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.unavailable
    }
}

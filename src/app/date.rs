//! Calendar date handling for front-page issues
//!
//! This module provides the validated issue-date type used throughout the
//! application: parsing of the eight-digit `YYYYMMDD` token accepted at the
//! CLI boundary, the `YYYY/MM/DD` path fragment used by the archive and the
//! output tree, and calendar-correct day stepping for range iteration.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::errors::{DateError, DateResult};

/// Calendar date identifying a single front-page issue
///
/// Wraps a `chrono::NaiveDate`, so only valid Gregorian dates are
/// representable and ordering is chronological. Values are immutable;
/// range iteration produces new instances via [`IssueDate::succ`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IssueDate(NaiveDate);

impl IssueDate {
    /// Parse an eight-digit `YYYYMMDD` token
    ///
    /// The first four digits are the year, the next two the month, and the
    /// last two the day. The parsed triple must name a real calendar date.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidFormat` if the token is not exactly eight
    /// ASCII digits, and `DateError::InvalidCalendar` if the digits do not
    /// form a valid Gregorian date.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use frontpage_fetcher::app::IssueDate;
    ///
    /// let date = IssueDate::parse("20130101")?;
    /// assert_eq!(date.slash_path(), "2013/01/01");
    /// # Ok::<(), frontpage_fetcher::errors::DateError>(())
    /// ```
    pub fn parse(token: &str) -> DateResult<Self> {
        if token.len() != 8 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat {
                token: token.to_string(),
            });
        }

        let year = token[..4].parse().unwrap(); // Safe: validated above
        let month = token[4..6].parse().unwrap(); // Safe: validated above
        let day = token[6..8].parse().unwrap(); // Safe: validated above

        Self::from_ymd(year, month, day)
    }

    /// Create an issue date from calendar components
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidCalendar` if the components do not name a
    /// real Gregorian date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> DateResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(IssueDate)
            .ok_or(DateError::InvalidCalendar { year, month, day })
    }

    /// Current local calendar date
    pub fn today() -> Self {
        IssueDate(Local::now().date_naive())
    }

    /// Render as the `YYYY/MM/DD` path fragment used by the archive
    ///
    /// Month and day are zero-padded to two digits and the year to four,
    /// so the fragment is fixed-width for all dates the archive covers.
    pub fn slash_path(&self) -> String {
        format!(
            "{:04}/{:02}/{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }

    /// Render as the eight-digit `YYYYMMDD` token (inverse of [`IssueDate::parse`])
    pub fn token(&self) -> String {
        format!(
            "{:04}{:02}{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }

    /// The next calendar day
    ///
    /// Handles month and year rollover and leap years. Returns `None` only
    /// at the upper bound of the representable calendar.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(IssueDate)
    }
}

impl fmt::Display for IssueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IssueDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

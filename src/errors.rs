//! Error types for Frontpage Fetcher
//!
//! This module defines the error types for all components of the application.
//! Errors are designed to be actionable and provide clear context for debugging
//! and user feedback.

use std::path::PathBuf;
use thiserror::Error;

/// Date token parsing errors
#[derive(Error, Debug)]
pub enum DateError {
    /// Token is not exactly eight ASCII digits
    #[error("Invalid date token: '{token}'. Expected eight digits in YYYYMMDD format")]
    InvalidFormat { token: String },

    /// Token parsed as digits but does not name a real calendar date
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendar { year: i32, month: u32, day: u32 },
}

/// Download and HTTP client errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP request error
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// I/O error during file operations
    #[error("File I/O error")]
    Io(#[from] std::io::Error),

    /// Invalid URL provided
    #[error("Invalid URL: {url} - {error}")]
    InvalidUrl { url: String, error: String },

    /// Atomic file operation failed
    #[error("Atomic file operation failed: could not rename {temp_path} to {final_path}")]
    AtomicOperationFailed {
        temp_path: PathBuf,
        final_path: PathBuf,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Date token error
    #[error(transparent)]
    Date(#[from] DateError),

    /// Download error
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Date parsing result type alias
pub type DateResult<T> = std::result::Result<T, DateError>;

/// Download result type alias
pub type DownloadResult<T> = std::result::Result<T, DownloadError>;

//! Frontpage Fetcher Library
//!
//! A Rust library for downloading New York Times front-page scans. Resolves
//! the fixed set of asset URLs per issue date and writes the bodies into a
//! date-partitioned output tree, sequentially and without retries.

pub mod app;
pub mod cli;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};

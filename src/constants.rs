//! Application constants for Frontpage Fetcher
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "frontpage-fetcher/0.1.0 (Front Page Archive Tool)";

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
}

/// New York Times archive URLs and path segments
pub mod nyt {
    /// Archive base URL
    pub const BASE_URL: &str = "http://www.nytimes.com";

    /// Path segment between the base URL and the issue date
    pub const IMAGES_SEGMENT: &str = "images";

    /// Path segment between the issue date and the scan file name
    pub const FRONTPAGE_SEGMENT: &str = "nytfrontpage";
}

/// File operation constants
pub mod files {
    /// Temporary file suffix for atomic operations
    pub const TEMP_FILE_SUFFIX: &str = ".tmp";
}

/// Fetch behavior defaults
pub mod fetch {
    /// Default output directory root
    pub const DEFAULT_OUTPUT_DIR: &str = "out";
}

// Re-export commonly used constants for convenience
pub use fetch::DEFAULT_OUTPUT_DIR;
pub use files::TEMP_FILE_SUFFIX;
pub use http::{DEFAULT_TIMEOUT as HTTP_TIMEOUT, USER_AGENT};
pub use nyt::BASE_URL as NYT_BASE_URL;

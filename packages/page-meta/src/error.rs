//! Typed errors for page retrieval.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while retrieving a page.
///
/// Both variants are retrieval failures; parsing never fails (missing
/// markup fields degrade to absent metadata instead).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: connection, DNS, timeout, malformed URL.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

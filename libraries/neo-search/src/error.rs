//! Error types for the search backend

use thiserror::Error;

/// Result type alias using `SearchError`
pub type Result<T> = std::result::Result<T, SearchError>;

/// Per-attempt search failures.
///
/// These never escape [`crate::SearchClient`]'s public API; they drive
/// credential rotation and end up in the log.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-2xx response, usually quota exhaustion
    #[error("Search API returned status {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("Malformed search payload: {0}")]
    Malformed(String),
}

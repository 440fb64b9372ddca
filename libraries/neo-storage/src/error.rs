//! Error types for library persistence

use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// Playlist has no tracks to load
    #[error("Playlist \"{0}\" is empty")]
    EmptyPlaylist(String),

    /// Snapshot backend failure
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

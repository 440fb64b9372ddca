//! Snapshot backends
//!
//! A snapshot store holds exactly one blob: the serialized library. The
//! trait deliberately knows nothing about the library's shape so backends
//! stay trivial to implement on any host storage primitive.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Whole-library blob storage.
pub trait SnapshotStore {
    /// Read the stored snapshot, or `None` on first run.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored snapshot.
    fn save(&mut self, blob: &str) -> Result<()>;
}

/// Snapshot stored as a single file on disk.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store backed by the given file path.
    ///
    /// The file does not need to exist yet; parent directories are created
    /// on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// Snapshot held in memory.
///
/// Used by tests, and by hosts whose durable storage is not a filesystem
/// (they read the blob out after mutations and hand it back on startup).
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    blob: Option<String>,
}

impl MemorySnapshotStore {
    /// Create an empty store (first-run behavior)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a blob
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    /// The currently held blob, if any
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}

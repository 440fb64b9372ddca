//! Neo Music - Library Persistence
//!
//! Durable storage for the user's saved playlists.
//!
//! The whole library is persisted as a single serialized snapshot: it is read
//! once when the store opens and rewritten wholesale after every mutation
//! (write-through, no batching). A missing snapshot means first run; a
//! malformed one is sanitized record-by-record rather than rejected, so a
//! corrupted or old-schema blob can never prevent startup.
//!
//! Where the snapshot lives is a host decision: [`FileSnapshotStore`] covers
//! desktop-style hosts, [`MemorySnapshotStore`] covers tests and hosts whose
//! storage primitive is not a filesystem.

#![forbid(unsafe_code)]

mod error;
mod library;
mod sanitize;
mod snapshot;

pub use error::{Result, StorageError};
pub use library::LibraryStore;
pub use sanitize::sanitize_library;
pub use snapshot::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore};

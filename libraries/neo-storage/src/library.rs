//! Library store - saved playlist management
//!
//! In-memory library with write-through persistence: every mutation updates
//! the in-memory collection first, then rewrites the whole snapshot. A
//! failed write is logged and otherwise ignored; the in-memory state stays
//! authoritative for the rest of the session.

use crate::error::{Result, StorageError};
use crate::sanitize::sanitize_library;
use crate::snapshot::SnapshotStore;
use neo_core::types::{Library, Playlist, Track};

/// Saved-playlist store backed by a snapshot blob.
pub struct LibraryStore {
    store: Box<dyn SnapshotStore>,
    library: Library,
}

impl LibraryStore {
    /// Open the store, reading and sanitizing the persisted snapshot.
    ///
    /// Never fails on snapshot content: a missing blob is first run, an
    /// unreadable or malformed one degrades to whatever records survive
    /// sanitization.
    pub fn open(store: Box<dyn SnapshotStore>) -> Self {
        let library = match store.load() {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(value) => sanitize_library(&value),
                Err(err) => {
                    tracing::warn!("library snapshot is not valid JSON, starting empty: {err}");
                    Library::default()
                }
            },
            Ok(None) => Library::default(),
            Err(err) => {
                tracing::warn!("could not read library snapshot, starting empty: {err}");
                Library::default()
            }
        };

        Self { store, library }
    }

    /// All saved playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.library.playlists
    }

    /// Look up a playlist by id
    pub fn get(&self, id: &str) -> Option<&Playlist> {
        self.library.find(id)
    }

    /// Create a new empty playlist and return its id.
    pub fn create(&mut self, name: impl Into<String>) -> String {
        let playlist = Playlist::new(name);
        let id = playlist.id.clone();
        self.library.playlists.push(playlist);
        self.persist();
        id
    }

    /// Rename a playlist.
    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> Result<()> {
        let playlist = self
            .library
            .find_mut(id)
            .ok_or_else(|| StorageError::PlaylistNotFound(id.to_string()))?;
        playlist.name = name.into();
        self.persist();
        Ok(())
    }

    /// Delete a playlist.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if !self.library.remove(id) {
            return Err(StorageError::PlaylistNotFound(id.to_string()));
        }
        self.persist();
        Ok(())
    }

    /// Add a track to a playlist.
    ///
    /// Idempotent by track id: returns `Ok(false)` when the id was already
    /// present and nothing changed.
    pub fn add_track(&mut self, playlist_id: &str, track: Track) -> Result<bool> {
        let playlist = self
            .library
            .find_mut(playlist_id)
            .ok_or_else(|| StorageError::PlaylistNotFound(playlist_id.to_string()))?;
        let added = playlist.push_unique(track);
        if added {
            self.persist();
        }
        Ok(added)
    }

    /// Remove a track from a playlist by id.
    pub fn remove_track(&mut self, playlist_id: &str, track_id: &str) -> Result<bool> {
        let playlist = self
            .library
            .find_mut(playlist_id)
            .ok_or_else(|| StorageError::PlaylistNotFound(playlist_id.to_string()))?;
        let removed = playlist.remove_track(track_id);
        if removed {
            self.persist();
        }
        Ok(removed)
    }

    /// The tracks of a playlist, for loading into the playback queue.
    ///
    /// An empty playlist is a user-visible condition rather than a silent
    /// no-op, so it surfaces as [`StorageError::EmptyPlaylist`].
    pub fn tracks_for_queue(&self, playlist_id: &str) -> Result<Vec<Track>> {
        let playlist = self
            .get(playlist_id)
            .ok_or_else(|| StorageError::PlaylistNotFound(playlist_id.to_string()))?;
        if playlist.tracks.is_empty() {
            return Err(StorageError::EmptyPlaylist(playlist.name.clone()));
        }
        Ok(playlist.tracks.clone())
    }

    /// Rewrite the whole snapshot.
    ///
    /// A storage write failure downgrades to a warning; playback must not
    /// stop because the disk is full.
    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.library) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!("could not serialize library snapshot: {err}");
                return;
            }
        };
        if let Err(err) = self.store.save(&blob) {
            tracing::warn!("could not write library snapshot: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::MemorySnapshotStore;

    fn track(id: &str) -> Track {
        Track::new(id, format!("Track {id}"), "Test Channel")
    }

    fn empty_store() -> LibraryStore {
        LibraryStore::open(Box::new(MemorySnapshotStore::new()))
    }

    #[test]
    fn create_and_get() {
        let mut store = empty_store();
        let id = store.create("Roadtrip");

        let playlist = store.get(&id).unwrap();
        assert_eq!(playlist.name, "Roadtrip");
        assert!(playlist.tracks.is_empty());
    }

    #[test]
    fn rename_unknown_playlist_fails() {
        let mut store = empty_store();
        assert!(matches!(
            store.rename("nope", "x"),
            Err(StorageError::PlaylistNotFound(_))
        ));
    }

    #[test]
    fn add_track_is_idempotent_by_id() {
        let mut store = empty_store();
        let id = store.create("Mix");

        assert!(store.add_track(&id, track("a")).unwrap());
        assert!(store.add_track(&id, track("b")).unwrap());
        assert!(!store.add_track(&id, track("a")).unwrap());
        assert_eq!(store.get(&id).unwrap().tracks.len(), 2);
    }

    #[test]
    fn empty_playlist_refuses_to_load() {
        let mut store = empty_store();
        let id = store.create("Empty");

        assert!(matches!(
            store.tracks_for_queue(&id),
            Err(StorageError::EmptyPlaylist(_))
        ));
    }

    #[test]
    fn tracks_for_queue_preserves_order() {
        let mut store = empty_store();
        let id = store.create("Mix");
        store.add_track(&id, track("a")).unwrap();
        store.add_track(&id, track("b")).unwrap();
        store.add_track(&id, track("c")).unwrap();

        let tracks = store.tracks_for_queue(&id).unwrap();
        let ids: Vec<_> = tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn delete_leaves_other_playlists_alone() {
        let mut store = empty_store();
        let keep = store.create("Keep");
        let drop = store.create("Drop");

        store.delete(&drop).unwrap();
        assert!(store.get(&keep).is_some());
        assert!(store.get(&drop).is_none());
    }
}

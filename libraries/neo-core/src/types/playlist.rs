/// Playlist and library domain types
use crate::types::Track;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, saved collection of tracks.
///
/// Playlists live independently of the active queue: deleting the queue does
/// not touch saved playlists and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Locally generated playlist identifier
    pub id: String,

    /// Playlist name
    pub name: String,

    /// Tracks in playback order
    pub tracks: Vec<Track>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new empty playlist with a freshly minted id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            tracks: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Check whether a track id is already present
    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|t| t.id == track_id)
    }

    /// Append a track unless its id is already present.
    ///
    /// Returns true when the track was added.
    pub fn push_unique(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Remove a track by id. Returns true when something was removed.
    pub fn remove_track(&mut self, track_id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != track_id);
        self.tracks.len() != before
    }
}

/// The user's whole saved collection, persisted as one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Saved playlists in creation order
    pub playlists: Vec<Playlist>,
}

impl Library {
    /// Look up a playlist by id
    pub fn find(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Look up a playlist by id, mutably
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| p.id == id)
    }

    /// Remove a playlist by id. Returns true when something was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.playlists.len();
        self.playlists.retain(|p| p.id != id);
        self.playlists.len() != before
    }
}

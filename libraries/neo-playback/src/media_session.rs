//! Hardware media-session binding
//!
//! Lock-screen and hardware-key integration. The host registers a single
//! dispatch path that turns platform action callbacks into [`MediaCommand`]s
//! and feeds them to the controller, which reads the live queue state at
//! call time - handler closures must never capture a queue snapshot, or
//! lock-screen next/prev ends up operating on stale data.

use crate::types::TimeProgress;
use neo_core::types::Track;
use serde::{Deserialize, Serialize};

/// Commands arriving from the hardware media surface (lock screen,
/// headset buttons, media keys).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MediaCommand {
    /// Resume playback
    Play,
    /// Pause playback
    Pause,
    /// Toggle between the two
    Toggle,
    /// Stop; treated as pause, there is no separate stopped state
    Stop,
    /// Skip to the previous track
    Previous,
    /// Skip to the next track
    Next,
    /// Jump to an absolute position in seconds
    SeekTo(f64),
}

/// Metadata pushed to the lock-screen surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMetadata {
    /// Track title
    pub title: String,
    /// Artist line (the uploading channel)
    pub artist: String,
    /// Artwork URL
    pub artwork_url: String,
}

impl From<&Track> for MediaMetadata {
    fn from(track: &Track) -> Self {
        Self {
            title: track.title.clone(),
            artist: track.channel_title.clone(),
            artwork_url: track.thumbnail_url.clone(),
        }
    }
}

/// Platform media-session surface.
///
/// An optional capability: hosts without one simply never install it and
/// every publish below becomes a no-op.
pub trait MediaSessionSurface {
    /// Update lock-screen metadata
    fn set_metadata(&mut self, metadata: &MediaMetadata);

    /// Mirror the playback intent so the lock-screen button shows the right
    /// glyph
    fn set_playback_status(&mut self, playing: bool);

    /// Push position state so the lock-screen scrubber stays accurate
    fn set_position(&mut self, progress: TimeProgress);

    /// Drop all published state (queue emptied)
    fn clear(&mut self);
}

/// Controller-side wrapper over an optional surface.
pub(crate) struct MediaSessionBinding {
    surface: Option<Box<dyn MediaSessionSurface>>,
}

impl MediaSessionBinding {
    pub(crate) fn new() -> Self {
        Self { surface: None }
    }

    pub(crate) fn set_surface(&mut self, surface: Box<dyn MediaSessionSurface>) {
        self.surface = Some(surface);
    }

    /// Publish metadata for the given track, or clear when there is none.
    pub(crate) fn publish_track(&mut self, track: Option<&Track>) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        match track {
            Some(track) => surface.set_metadata(&MediaMetadata::from(track)),
            None => surface.clear(),
        }
    }

    pub(crate) fn publish_status(&mut self, playing: bool) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_playback_status(playing);
        }
    }

    pub(crate) fn publish_position(&mut self, progress: TimeProgress) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_position(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_mirrors_track_fields() {
        let track = Track::with_thumbnail("abc", "Song", "Channel", "https://img/a.jpg");
        let metadata = MediaMetadata::from(&track);
        assert_eq!(metadata.title, "Song");
        assert_eq!(metadata.artist, "Channel");
        assert_eq!(metadata.artwork_url, "https://img/a.jpg");
    }

    #[test]
    fn absent_surface_is_a_no_op() {
        let mut binding = MediaSessionBinding::new();
        let track = Track::new("abc", "Song", "Channel");
        binding.publish_track(Some(&track));
        binding.publish_track(None);
        binding.publish_status(true);
        binding.publish_position(TimeProgress::new(1.0, 2.0));
    }
}

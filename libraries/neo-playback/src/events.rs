//! Playback events
//!
//! Event-based communication for UI synchronization. The controller queues
//! events as side effects of its transitions; the host drains them whenever
//! convenient (each frame, or after each call into the controller).

use crate::types::PlaybackIntent;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback intent flipped
    IntentChanged {
        /// The new intent
        intent: PlaybackIntent,
    },

    /// The cursor moved to a different track
    TrackChanged {
        /// ID of the new current track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Queue contents changed (replace/append/remove)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Periodic position update while playing
    PositionUpdate {
        /// Current position in seconds
        position_secs: f64,
        /// Track duration in seconds
        duration_secs: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New level (0-100)
        level: u8,
    },
}

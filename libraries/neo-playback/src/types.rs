//! Core types for the playback controller

use neo_core::types::LoopMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The authoritative desired playback state.
///
/// Distinct from whatever the hosted widget reports about itself: the widget
/// fires spurious pauses while buffering, seeking, and fighting autoplay
/// restrictions, so its state is advisory only. Intent changes exclusively
/// through user actions, hardware media commands, and track advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackIntent {
    /// Audio should be audible
    Playing,
    /// Audio should be silent
    Paused,
}

impl PlaybackIntent {
    /// Convenience predicate
    pub fn is_playing(self) -> bool {
        self == PlaybackIntent::Playing
    }
}

/// Current position within the playing track.
///
/// Refreshed by the controller's polling tick; reset to zero whenever the
/// queue cursor moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeProgress {
    /// Seconds from the start of the track
    pub position_secs: f64,

    /// Total track length in seconds (0 until the widget knows it)
    pub duration_secs: f64,
}

impl TimeProgress {
    /// Construct from raw widget readings
    pub fn new(position_secs: f64, duration_secs: f64) -> Self {
        Self {
            position_secs,
            duration_secs,
        }
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Start playing as soon as a queue replacement lands (default: true)
    pub autoplay_on_replace: bool,

    /// Initial volume (0-100, default: 80)
    pub initial_volume: u8,

    /// Initial loop mode (default: Advance)
    pub initial_loop: LoopMode,

    /// How often position/duration are polled while playing (default: 1s)
    pub poll_interval: Duration,

    /// How often the keep-alive tone fires while playing (default: 15s)
    pub keepalive_pulse_interval: Duration,

    /// Backoff schedule for re-issuing `play` after a track load, on top of
    /// the immediate attempt. The defaults encode observed background-tab
    /// throttling behavior and are safe to tune.
    pub load_retry_delays: Vec<Duration>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay_on_replace: true,
            initial_volume: 80,
            initial_loop: LoopMode::Advance,
            poll_interval: Duration::from_secs(1),
            keepalive_pulse_interval: Duration::from_secs(15),
            load_retry_delays: vec![
                Duration::from_millis(500),
                Duration::from_millis(1500),
                Duration::from_millis(3500),
            ],
        }
    }
}

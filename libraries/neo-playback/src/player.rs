//! Hosted player widget seam
//!
//! The actual playback widget is an opaque embedded object owned by the
//! host platform. The controller drives it through [`PlayerHandle`] and the
//! host forwards its state-change callbacks back in as [`PlayerEvent`]s.

use neo_core::types::{Track, VideoQuality};
use serde::{Deserialize, Serialize};

/// Commands understood by the embedded playback widget.
///
/// Every method is fire-and-forget: the widget acknowledges nothing, and in
/// particular `load` followed by `play` is NOT guaranteed to start audio -
/// backgrounded tabs may silently swallow the play request. The adapter's
/// retry schedule exists for exactly that case.
pub trait PlayerHandle {
    /// Switch the widget to a new track
    fn load(&mut self, track: &Track);

    /// Request playback
    fn play(&mut self);

    /// Request pause
    fn pause(&mut self);

    /// Seek to an absolute position in seconds
    fn seek(&mut self, seconds: f64);

    /// Set volume (0-100)
    fn set_volume(&mut self, volume: u8);

    /// Request a playback quality; best-effort, the widget may ignore or
    /// later silently reset it
    fn set_quality(&mut self, quality: VideoQuality);

    /// Current position in seconds (0 when unknown)
    fn current_time(&self) -> f64;

    /// Track duration in seconds (0 when unknown)
    fn duration(&self) -> f64;
}

/// State changes reported by the embedded widget.
///
/// These are advisory. `Paused` in particular fires spuriously during
/// buffering, seeking, and the autoplay tug-of-war right after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Widget finished initializing and accepts commands
    Ready,
    /// Widget says it is playing
    Playing,
    /// Widget says it is paused
    Paused,
    /// Widget is buffering
    Buffering,
    /// Track played to its end
    Ended,
    /// Widget loaded a track but never started it
    Unstarted,
    /// Widget cued a track and is waiting
    Cued,
}

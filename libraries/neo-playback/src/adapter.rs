//! External player adapter
//!
//! Normalizes the widget's raw command/event surface for the controller:
//! quality re-application, the post-load play retry schedule, and the
//! filtering of spurious widget states.
//!
//! The retry schedule is plain data - a list of deadlines checked on every
//! tick - so superseding it (a newer load, a user pause) is a field reset
//! rather than timer bookkeeping, and nothing can leak across track
//! switches.

use crate::player::{PlayerEvent, PlayerHandle};
use crate::types::{PlaybackIntent, TimeProgress};
use neo_core::types::{Track, VideoQuality};
use std::time::{Duration, Instant};

/// What the controller should make of a widget event, after the adapter has
/// dealt with the parts it handles itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdapterSignal {
    /// Nothing for the controller to do
    None,
    /// Widget confirmed playback; the load window is closed
    Confirmed,
    /// Widget-reported pause inside the load window; countered with `play`
    SpuriousPause,
    /// Widget-reported pause outside any load window; advisory only
    ReportedPause,
    /// The current track genuinely played to its end
    Ended,
}

/// Pending `play` re-issues for the most recent load.
///
/// Arming replaces the whole schedule, which is what cancels a superseded
/// one: there is only ever one load in flight.
#[derive(Debug, Default)]
struct LoadRetry {
    /// Deadlines still to fire, ascending
    pending: Vec<Instant>,
}

impl LoadRetry {
    fn arm(&mut self, now: Instant, delays: &[Duration]) {
        self.pending = delays.iter().map(|d| now + *d).collect();
        self.pending.sort();
    }

    fn cancel(&mut self) {
        self.pending.clear();
    }

    /// The load window stays open until the last deadline fires or the
    /// widget confirms playback.
    fn window_open(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Remove and count deadlines that have come due.
    fn fire_due(&mut self, now: Instant) -> usize {
        let due = self.pending.iter().take_while(|d| **d <= now).count();
        self.pending.drain(..due);
        due
    }
}

/// Thin stateful wrapper around the widget handle.
pub(crate) struct PlayerAdapter {
    handle: Box<dyn PlayerHandle>,
    retry: LoadRetry,
    retry_delays: Vec<Duration>,
    quality: VideoQuality,
    volume: u8,
}

impl PlayerAdapter {
    pub(crate) fn new(
        handle: Box<dyn PlayerHandle>,
        quality: VideoQuality,
        volume: u8,
        retry_delays: Vec<Duration>,
    ) -> Self {
        Self {
            handle,
            retry: LoadRetry::default(),
            retry_delays,
            quality,
            volume,
        }
    }

    /// Switch to a new track.
    ///
    /// With `resume` set, issues an immediate play and arms the retry
    /// schedule; otherwise any previous schedule is dropped.
    pub(crate) fn load(&mut self, track: &Track, now: Instant, resume: bool) {
        self.handle.load(track);
        // The widget forgets both of these across loads.
        self.handle.set_quality(self.quality);
        self.handle.set_volume(self.volume);

        if resume {
            self.handle.play();
            self.retry.arm(now, &self.retry_delays);
        } else {
            self.retry.cancel();
        }
    }

    pub(crate) fn play(&mut self) {
        self.handle.play();
    }

    /// Pause, dropping any pending play retries: a pause request always
    /// outranks the load schedule.
    pub(crate) fn pause(&mut self) {
        self.retry.cancel();
        self.handle.pause();
    }

    pub(crate) fn seek(&mut self, seconds: f64) {
        self.handle.seek(seconds);
    }

    pub(crate) fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
        self.handle.set_volume(volume);
    }

    /// Record and forward a new target quality.
    pub(crate) fn set_quality(&mut self, quality: VideoQuality) {
        self.quality = quality;
        self.handle.set_quality(quality);
    }

    /// Whether a load is still inside its retry window
    pub(crate) fn loading(&self) -> bool {
        self.retry.window_open()
    }

    /// Fresh position/duration readings from the widget
    pub(crate) fn progress(&self) -> TimeProgress {
        TimeProgress::new(self.handle.current_time(), self.handle.duration())
    }

    /// Fire any retry deadlines that have come due.
    pub(crate) fn tick(&mut self, now: Instant, intent: PlaybackIntent) {
        if !intent.is_playing() {
            self.retry.cancel();
            return;
        }
        for _ in 0..self.retry.fire_due(now) {
            tracing::debug!("re-issuing play against a possibly throttled widget");
            self.handle.play();
        }
    }

    /// Digest a widget state change, countering stalls on the spot.
    pub(crate) fn handle_event(
        &mut self,
        event: PlayerEvent,
        intent: PlaybackIntent,
    ) -> AdapterSignal {
        match event {
            PlayerEvent::Ready => {
                self.handle.set_quality(self.quality);
                self.handle.set_volume(self.volume);
                if intent.is_playing() {
                    self.handle.play();
                }
                AdapterSignal::None
            }
            PlayerEvent::Playing => {
                self.retry.cancel();
                // The widget tends to drop back to auto quality on its own,
                // most visibly right after a track switch.
                self.handle.set_quality(self.quality);
                AdapterSignal::Confirmed
            }
            PlayerEvent::Buffering => {
                self.handle.set_quality(self.quality);
                AdapterSignal::None
            }
            PlayerEvent::Paused => {
                if self.retry.window_open() {
                    // Autoplay fight: the platform paused the fresh load.
                    self.handle.play();
                    AdapterSignal::SpuriousPause
                } else {
                    AdapterSignal::ReportedPause
                }
            }
            PlayerEvent::Unstarted | PlayerEvent::Cued => {
                // Always a stall, never a legitimate resting state.
                if intent.is_playing() {
                    self.handle.play();
                }
                AdapterSignal::None
            }
            PlayerEvent::Ended => {
                if self.retry.window_open() {
                    // An end report for the track we just switched away from.
                    tracing::debug!("ignoring stale ended event during track load");
                    AdapterSignal::None
                } else {
                    AdapterSignal::Ended
                }
            }
        }
    }
}

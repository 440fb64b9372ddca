//! Neo Music - Playback Continuity Core
//!
//! Platform-agnostic playback management for a hosted-video music player.
//!
//! This crate provides:
//! - The active queue (wrap-around next/prev, reorder-free select)
//! - The playback-intent state machine (play/pause/auto-advance, loop modes)
//! - The external player adapter with its post-load retry schedule
//! - The keep-alive subsystem (silent loop, tone pulses, wake lock)
//! - The hardware media-session binding
//! - The settings/quality policy
//!
//! # Architecture
//!
//! `neo-playback` is completely platform-agnostic: no HTTP, no storage, no
//! timers of its own, no UI framework. The host owns the actual embedded
//! player widget and the browser/OS keep-alive resources and exposes them
//! through the [`PlayerHandle`], [`KeepAliveSurface`], and
//! [`MediaSessionSurface`] traits. Everything time-based runs off the
//! `Instant` the host passes in, so the whole state machine is
//! deterministic under test.
//!
//! The central design decision is that the widget's self-reported state is
//! advisory: [`PlaybackIntent`] is the single source of truth for whether
//! audio should be audible, and the widget's spurious pauses during loads,
//! buffering, and autoplay fights never flip it.
//!
//! # Example
//!
//! ```rust
//! use neo_core::types::{Track, VideoQuality};
//! use neo_playback::{PlaybackConfig, PlaybackController, PlayerEvent, PlayerHandle};
//! use std::time::Instant;
//!
//! // The host wraps its embedded player widget in a PlayerHandle.
//! struct NullPlayer;
//!
//! impl PlayerHandle for NullPlayer {
//!     fn load(&mut self, _track: &Track) {}
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _seconds: f64) {}
//!     fn set_volume(&mut self, _volume: u8) {}
//!     fn set_quality(&mut self, _quality: VideoQuality) {}
//!     fn current_time(&self) -> f64 { 0.0 }
//!     fn duration(&self) -> f64 { 0.0 }
//! }
//!
//! let mut controller = PlaybackController::new(Box::new(NullPlayer), PlaybackConfig::default());
//! let now = Instant::now();
//!
//! controller.replace_queue(now, vec![
//!     Track::new("jfJfPunJ52s", "Lofi Hip Hop Radio", "Lofi Girl"),
//!     Track::new("tAGnKpE4NCI", "Nothing Else Matters", "Metallica"),
//! ]);
//! assert!(controller.intent().is_playing());
//!
//! // Widget callbacks and a coarse timer keep the machine moving.
//! controller.handle_player_event(now, PlayerEvent::Playing);
//! controller.tick(now);
//!
//! controller.next(now);
//! assert_eq!(controller.current_track().unwrap().id, "tAGnKpE4NCI");
//! ```

#![forbid(unsafe_code)]

mod adapter;
mod continuity;
mod controller;
mod events;
mod media_session;
mod player;
mod queue;
mod settings;
pub mod types;

// Public exports
pub use continuity::KeepAliveSurface;
pub use controller::{PlaybackController, QueueRequestToken};
pub use events::PlaybackEvent;
pub use media_session::{MediaCommand, MediaMetadata, MediaSessionSurface};
pub use player::{PlayerEvent, PlayerHandle};
pub use queue::Queue;
pub use settings::Settings;
pub use types::{PlaybackConfig, PlaybackIntent, TimeProgress};

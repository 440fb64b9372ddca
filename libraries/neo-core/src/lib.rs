//! Neo Music Core
//!
//! Platform-agnostic domain types for Neo Music.
//!
//! This crate defines the shapes shared by every other crate in the
//! workspace:
//! - **Domain Types**: [`Track`], [`Playlist`], [`Library`]
//! - **Playback vocabulary**: [`VideoQuality`], [`AudioQuality`], [`LoopMode`]
//!
//! Tracks are references into an external hosted-video catalog: the `id` is
//! an opaque identifier minted by that catalog, and the core never inspects
//! it beyond equality checks.
//!
//! # Example
//!
//! ```rust
//! use neo_core::types::{Playlist, Track};
//!
//! let track = Track::new("jfJfPunJ52s", "Lofi Hip Hop Radio", "Lofi Girl");
//!
//! let mut playlist = Playlist::new("Study");
//! playlist.push_unique(track);
//! assert_eq!(playlist.tracks.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{
    AudioQuality, Library, LoopMode, Playlist, Track, VideoQuality, PLACEHOLDER_THUMBNAIL,
};

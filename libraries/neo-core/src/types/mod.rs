//! Domain types for Neo Music

mod playlist;
mod quality;
mod track;

pub use playlist::{Library, Playlist};
pub use quality::{AudioQuality, LoopMode, VideoQuality};
pub use track::{Track, PLACEHOLDER_THUMBNAIL};

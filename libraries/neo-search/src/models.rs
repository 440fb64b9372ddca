//! Wire models for the search API

use neo_core::types::{Track, PLACEHOLDER_THUMBNAIL};
use serde::Deserialize;

/// Top-level search response
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: ItemId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thumbnails {
    pub high: Option<Thumbnail>,
    #[serde(rename = "default")]
    pub fallback: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: String,
}

impl SearchItem {
    /// Convert into a domain track.
    ///
    /// Items without a video id (channels, playlists) are skipped.
    pub(crate) fn into_track(self) -> Option<Track> {
        let id = self.id.video_id?;
        let thumbnail = self
            .snippet
            .thumbnails
            .high
            .or(self.snippet.thumbnails.fallback)
            .map(|t| t.url)
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());

        Some(Track::with_thumbnail(
            id,
            self.snippet.title,
            self.snippet.channel_title,
            thumbnail,
        ))
    }
}

/// Track domain type
use serde::{Deserialize, Serialize};

/// Artwork shown when a track has no usable thumbnail of its own.
///
/// Persisted snapshots from older builds sometimes lack the thumbnail field;
/// rendering code assumes every track has one, so sanitization substitutes
/// this URL instead of dropping the record.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://placehold.co/480x360?text=NO+TAPE";

/// One playable item in a queue or playlist.
///
/// The `id` is the hosted catalog's opaque video identifier. Tracks are
/// immutable once fetched; identity is `id`, but the same `id` may appear
/// more than once in a queue and is then disambiguated by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Opaque external video identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Uploading channel, displayed as the artist line
    pub channel_title: String,

    /// Thumbnail artwork URL
    pub thumbnail_url: String,
}

impl Track {
    /// Create a track with placeholder artwork
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        channel_title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            channel_title: channel_title.into(),
            thumbnail_url: PLACEHOLDER_THUMBNAIL.to_string(),
        }
    }

    /// Create a track with explicit artwork
    pub fn with_thumbnail(
        id: impl Into<String>,
        title: impl Into<String>,
        channel_title: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            channel_title: channel_title.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }
}

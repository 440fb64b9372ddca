//! Defensive snapshot recovery
//!
//! Snapshots come back from storage in whatever shape an earlier build (or a
//! corrupted write) left them. Rather than rejecting the whole blob on the
//! first schema mismatch, recovery walks it value-by-value: well-formed
//! records survive, individually broken fields fall back to defaults, and
//! records missing their identity are dropped.

use chrono::{DateTime, Utc};
use neo_core::types::{Library, Playlist, Track, PLACEHOLDER_THUMBNAIL};
use serde_json::Value;
use uuid::Uuid;

/// Rebuild a [`Library`] from an untrusted snapshot value.
///
/// Accepts both the current shape `{"playlists": [...]}` and the older
/// bare-array form. Anything unrecognizable yields an empty library.
pub fn sanitize_library(value: &Value) -> Library {
    let playlists = match value {
        Value::Object(map) => map.get("playlists").and_then(Value::as_array),
        Value::Array(_) => value.as_array(),
        _ => None,
    };

    let Some(playlists) = playlists else {
        tracing::warn!("library snapshot has no playlist collection, starting empty");
        return Library::default();
    };

    Library {
        playlists: playlists.iter().filter_map(sanitize_playlist).collect(),
    }
}

fn sanitize_playlist(value: &Value) -> Option<Playlist> {
    let map = value.as_object()?;

    // A playlist without an id cannot be addressed by any operation; mint a
    // fresh one rather than dropping the user's tracks.
    let id = map
        .get("id")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let name = map
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("Untitled")
        .to_string();

    let created_at = map
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    let tracks = map
        .get("tracks")
        .and_then(Value::as_array)
        .map(|tracks| tracks.iter().filter_map(sanitize_track).collect())
        .unwrap_or_default();

    Some(Playlist {
        id,
        name,
        tracks,
        created_at,
    })
}

fn sanitize_track(value: &Value) -> Option<Track> {
    let map = value.as_object()?;

    // The id is the only field nothing can stand in for.
    let id = map
        .get("id")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())?;

    let title = map
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("Unknown title");

    let channel_title = map
        .get("channel_title")
        .and_then(Value::as_str)
        .unwrap_or("");

    let thumbnail_url = map
        .get("thumbnail_url")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(PLACEHOLDER_THUMBNAIL);

    Some(Track::with_thumbnail(id, title, channel_title, thumbnail_url))
}

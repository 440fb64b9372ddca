//! HTTP client for search and suggestions

use crate::error::{Result, SearchError};
use crate::keys::ApiKeyRing;
use crate::models::SearchResponse;
use neo_core::types::Track;
use std::time::Duration;

/// Default search endpoint
pub const DEFAULT_SEARCH_BASE: &str = "https://www.googleapis.com/youtube/v3/search";

/// Default suggestion endpoint
pub const DEFAULT_SUGGEST_BASE: &str = "https://suggestqueries.google.com/complete/search";

/// Request timeout for both endpoints
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Search/suggest client with credential rotation.
///
/// See the crate docs for the failure contract: both calls degrade to an
/// empty list, never an error.
#[derive(Debug)]
pub struct SearchClient {
    http: reqwest::Client,
    keys: ApiKeyRing,
    search_base: String,
    suggest_base: String,
}

impl SearchClient {
    /// Create a client over the given credential ring.
    pub fn new(keys: Vec<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            http,
            keys: ApiKeyRing::new(keys),
            search_base: DEFAULT_SEARCH_BASE.to_string(),
            suggest_base: DEFAULT_SUGGEST_BASE.to_string(),
        }
    }

    /// Override the endpoints, for tests and self-hosted mirrors.
    pub fn with_bases(
        mut self,
        search_base: impl Into<String>,
        suggest_base: impl Into<String>,
    ) -> Self {
        self.search_base = search_base.into();
        self.suggest_base = suggest_base.into();
        self
    }

    /// Search the catalog.
    ///
    /// Tries each credential at most once, rotating on failure. Returns an
    /// empty list for a blank query, when every credential fails, and when
    /// the backend legitimately has no results.
    pub async fn search(&self, query: &str, limit: u32) -> Vec<Track> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        for _ in 0..self.keys.len() {
            let Some(key) = self.keys.current() else {
                break;
            };

            match self.search_attempt(query, limit, key).await {
                Ok(tracks) => return tracks,
                Err(err) => {
                    tracing::warn!("search attempt failed, rotating credential: {err}");
                    self.keys.rotate();
                }
            }
        }

        tracing::warn!("all search credentials exhausted for query {query:?}");
        Vec::new()
    }

    async fn search_attempt(&self, query: &str, limit: u32, key: &str) -> Result<Vec<Track>> {
        let response = self
            .http
            .get(&self.search_base)
            .query(&[
                ("part", "snippet"),
                ("maxResults", &limit.to_string()),
                ("q", query),
                ("type", "video"),
                ("key", key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|err| SearchError::Malformed(err.to_string()))?;

        Ok(payload
            .items
            .into_iter()
            .filter_map(|item| item.into_track())
            .collect())
    }

    /// Typeahead suggestions for a partial query.
    ///
    /// No credential involved; any failure yields an empty list. The caller
    /// is expected to debounce.
    pub async fn suggest(&self, prefix: &str) -> Vec<String> {
        if prefix.trim().is_empty() {
            return Vec::new();
        }

        let response = self
            .http
            .get(&self.suggest_base)
            .query(&[("client", "youtube"), ("ds", "yt"), ("q", prefix)])
            .send()
            .await;

        let body = match response {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!("suggest body unreadable: {err}");
                    return Vec::new();
                }
            },
            Ok(resp) => {
                tracing::debug!("suggest returned status {}", resp.status());
                return Vec::new();
            }
            Err(err) => {
                tracing::debug!("suggest request failed: {err}");
                return Vec::new();
            }
        };

        parse_suggestions(&body)
    }
}

/// Extract suggestion strings from the suggest payload.
///
/// The endpoint answers either with bare JSON `["query", ["s1", ...], ...]`
/// or with the same array wrapped in a JSONP callback. Entries may be plain
/// strings or `[string, ...]` pairs depending on the client parameter.
pub(crate) fn parse_suggestions(body: &str) -> Vec<String> {
    let json = strip_jsonp(body);

    let Ok(value) = serde_json::from_str::<serde_json::Value>(json) else {
        tracing::debug!("suggest payload is not JSON");
        return Vec::new();
    };

    let Some(entries) = value.get(1).and_then(serde_json::Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(pair) => {
                pair.first().and_then(serde_json::Value::as_str).map(String::from)
            }
            _ => None,
        })
        .collect()
}

/// Strip a JSONP wrapper (`cb(...)`) down to the inner JSON, if present.
fn strip_jsonp(body: &str) -> &str {
    let trimmed = body.trim();
    match (trimmed.find('('), trimmed.rfind(')')) {
        (Some(open), Some(close)) if open < close && !trimmed.starts_with('[') => {
            &trimmed[open + 1..close]
        }
        _ => trimmed,
    }
}

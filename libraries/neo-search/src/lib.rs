//! Neo Music - Search Backend
//!
//! HTTP collaborator for the hosted-video catalog: full-text video search
//! plus typeahead suggestions.
//!
//! The search API meters usage per credential, so the client carries a ring
//! of API keys and rotates to the next one whenever a request comes back
//! non-2xx (quota exhaustion is a 403) or with a payload it cannot read.
//! Each query makes at most one attempt per credential; when the whole ring
//! fails, the result is an empty list, never an error - callers treat "no
//! results" and "backend down" identically.
//!
//! The rotation cursor lives on the client instance, not in a global, and
//! persists across calls so a known-good credential stays preferred.

#![forbid(unsafe_code)]

mod client;
mod error;
mod keys;
mod models;

pub use client::SearchClient;
pub use error::{Result, SearchError};
pub use keys::ApiKeyRing;

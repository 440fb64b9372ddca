//! Rotating credential ring

use std::sync::atomic::{AtomicUsize, Ordering};

/// Round-robin cursor over a fixed set of API keys.
///
/// Owned by the client instance that uses it; the cursor survives across
/// calls so the ring keeps serving from the last credential that worked.
#[derive(Debug)]
pub struct ApiKeyRing {
    keys: Vec<String>,
    cursor: AtomicUsize,
}

impl ApiKeyRing {
    /// Create a ring over the given keys.
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            keys,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of credentials in the ring
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the ring holds no credentials at all
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The credential the ring currently points at
    pub fn current(&self) -> Option<&str> {
        if self.keys.is_empty() {
            return None;
        }
        let idx = self.cursor.load(Ordering::Relaxed) % self.keys.len();
        Some(&self.keys[idx])
    }

    /// Advance to the next credential after a failure.
    pub fn rotate(&self) {
        if self.keys.is_empty() {
            return;
        }
        self.cursor.fetch_add(1, Ordering::Relaxed);
    }
}

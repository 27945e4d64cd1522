//! In-memory response cache keyed by endpoint
//!
//! Entries live as long as the owning client. Nothing is evicted, expired, or
//! invalidated; a key is only ever written after a successful fetch.

use serde_json::Value;
use std::collections::HashMap;

/// Stores decoded response bodies under the exact endpoint string they were fetched with
///
/// Keys are compared verbatim: `/users` and `/users/` are different entries.
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    entries: HashMap<String, Value>,
}

impl ResponseCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached body for `endpoint`, if one was stored
    pub fn get(&self, endpoint: &str) -> Option<&Value> {
        self.entries.get(endpoint)
    }

    /// Stores `body` under `endpoint`, replacing any previous entry
    pub fn insert(&mut self, endpoint: impl Into<String>, body: Value) {
        self.entries.insert(endpoint.into(), body);
    }

    /// Whether `endpoint` has a cached body
    pub fn contains(&self, endpoint: &str) -> bool {
        self.entries.contains_key(endpoint)
    }

    /// Number of cached endpoints
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

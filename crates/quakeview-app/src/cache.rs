//! TTL cache for simulation responses.
//!
//! Explicitly constructed with its TTL and passed to the network layer as
//! a dependency — no ambient global instance. A cache hit is
//! indistinguishable from a fresh fetch to everything downstream.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use quakeview_core::protocol::{SimulationRequest, SimulationResponse};

/// Deterministic cache key for `(endpoint, request body)`.
///
/// Serde struct serialization has a fixed field order, so equal requests
/// always fingerprint identically.
pub fn fingerprint(endpoint: &str, request: &SimulationRequest) -> String {
    // Serialization of these DTOs cannot fail.
    let body = serde_json::to_string(request).unwrap_or_default();
    format!("{endpoint}-{body}")
}

/// In-memory TTL cache keyed by request fingerprint. Entries expire lazily
/// on lookup.
pub struct ResponseCache {
    entries: HashMap<String, (Instant, SimulationResponse)>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Fetch a cached response, evicting it first if it has expired.
    pub fn get(&mut self, key: &str) -> Option<SimulationResponse> {
        match self.entries.get(key) {
            Some((stored_at, _)) if stored_at.elapsed() > self.ttl => {
                self.entries.remove(key);
                None
            }
            Some((_, response)) => Some(response.clone()),
            None => None,
        }
    }

    pub fn insert(&mut self, key: String, response: SimulationResponse) {
        self.entries.insert(key, (Instant::now(), response));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

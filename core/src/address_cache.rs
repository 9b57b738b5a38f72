//! In-memory address cache with lazy TTL expiry.
//!
//! RULE: Only unseeded resolutions read or write the cache.
//! Entries are never deleted; an entry older than the TTL is treated as
//! absent on read and is overwritten by the next successful resolution.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::address::AddressRecord;

/// Default entry lifetime: 24 hours.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Placeholder used in the key when the state or city is not supplied.
const RANDOM_KEY_PART: &str = "random";

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: AddressRecord,
    pub created_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) < ttl
    }
}

pub struct AddressCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl AddressCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// `"{state-or-random}-{city-or-random}"`, case-sensitive.
    pub fn key(state: Option<&str>, city: Option<&str>) -> String {
        format!(
            "{}-{}",
            state.unwrap_or(RANDOM_KEY_PART),
            city.unwrap_or(RANDOM_KEY_PART)
        )
    }

    /// A fresh entry for `key`, or `None` if absent or expired.
    pub fn get(&self, key: &str) -> Option<AddressRecord> {
        let now = Instant::now();
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&self, key: String, value: AddressRecord) {
        let entry = CacheEntry {
            value,
            created_at: Instant::now(),
        };
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, entry);
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AddressCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

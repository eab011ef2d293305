//! Time-bounded in-memory cache.
//!
//! Keys are source identifiers (the CSV export URL); values carry the
//! fetched-and-processed result. Expiry is computed at lookup time, and a
//! manual refresh removes the specific key before the next lookup.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

/// Map from key to value plus timestamp, valid for a fixed duration.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: HashMap<String, Entry<V>>,
    ttl: Duration,
}

impl<V> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn with_ttl_secs(secs: u64) -> Self {
        Self::new(Duration::seconds(secs as i64))
    }

    /// Look up a key, treating entries older than the TTL as absent.
    ///
    /// Expired entries stay in the map until overwritten; the window check
    /// here is what makes them invisible.
    pub fn get(&self, key: &str) -> Option<&V> {
        let entry = self.entries.get(key)?;
        let age = Utc::now().signed_duration_since(entry.stored_at);
        if age < self.ttl {
            Some(&entry.value)
        } else {
            None
        }
    }

    pub fn insert(&mut self, key: &str, value: V) {
        self.entries.insert(
            key.to_string(),
            Entry {
                value,
                stored_at: Utc::now(),
            },
        );
    }

    /// Drop a single key, forcing the next lookup to miss.
    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_within_ttl() {
        let mut cache: TtlCache<u32> = TtlCache::with_ttl_secs(3600);
        cache.insert("sheet-a", 7);
        assert_eq!(cache.get("sheet-a"), Some(&7));
        assert_eq!(cache.get("sheet-b"), None);
    }

    #[test]
    fn test_miss_after_expiry() {
        // Zero TTL expires every entry at the very next lookup.
        let mut cache: TtlCache<u32> = TtlCache::new(Duration::zero());
        cache.insert("sheet-a", 7);
        assert_eq!(cache.get("sheet-a"), None);
    }

    #[test]
    fn test_invalidate_clears_key() {
        let mut cache: TtlCache<u32> = TtlCache::with_ttl_secs(3600);
        cache.insert("sheet-a", 7);
        cache.insert("sheet-b", 9);
        cache.invalidate("sheet-a");
        assert_eq!(cache.get("sheet-a"), None);
        assert_eq!(cache.get("sheet-b"), Some(&9));
    }

    #[test]
    fn test_reinsert_overwrites() {
        let mut cache: TtlCache<u32> = TtlCache::with_ttl_secs(3600);
        cache.insert("sheet-a", 7);
        cache.insert("sheet-a", 8);
        assert_eq!(cache.get("sheet-a"), Some(&8));
    }
}

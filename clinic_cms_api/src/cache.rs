//! In-memory TTL cache of response bodies, backed by `DashMap` for concurrent access.

use dashmap::DashMap;
use std::time::{Duration, Instant};

struct CacheEntry {
    body: String,
    expires_at: Instant,
}

/// Response bodies keyed by full request URL.
///
/// Expired entries are evicted lazily on the next `get` for that key. Each
/// entry carries its own lifetime, chosen per request by the client.
#[derive(Default)]
pub(crate) struct MemoryCache {
    store: DashMap<String, CacheEntry>,
}

impl MemoryCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the cached body for `key`, or `None` if missing or stale.
    pub(crate) fn get(&self, key: &str) -> Option<String> {
        let entry = self.store.get(key)?;
        if Instant::now() >= entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        Some(entry.body.clone())
    }

    /// Inserts or overwrites an entry that stays fresh for `ttl`.
    pub(crate) fn set_with_ttl(&self, key: String, body: String, ttl: Duration) {
        self.store.insert(
            key,
            CacheEntry {
                body,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn set_and_get() {
        let cache = MemoryCache::new();
        cache.set_with_ttl("/api/articles".to_string(), "{}".to_string(), MINUTE);
        assert_eq!(cache.get("/api/articles"), Some("{}".to_string()));
    }

    #[test]
    fn miss() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("/api/homepage"), None);
    }

    #[test]
    fn expiration_evicts() {
        let cache = MemoryCache::new();
        cache.set_with_ttl("k".to_string(), "v".to_string(), Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(cache.get("k"), None);
        assert!(cache.store.is_empty());
    }

    #[test]
    fn overwrite() {
        let cache = MemoryCache::new();
        cache.set_with_ttl("k".to_string(), "old".to_string(), MINUTE);
        cache.set_with_ttl("k".to_string(), "new".to_string(), MINUTE);
        assert_eq!(cache.get("k"), Some("new".to_string()));
    }
}

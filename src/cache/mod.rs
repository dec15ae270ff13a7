//! Dictionary cache
//!
//! Process-wide cache of loaded dictionaries keyed by `lang_{code}`.
//! Entries use a sliding expiration: every successful lookup pushes the
//! deadline out by the entry's TTL. Expired entries are swept whenever a
//! new entry is inserted, so keys that are never looked up again do not
//! accumulate.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::storage::Dictionary;

/// A dictionary shared between the cache and in-flight lookups
pub type SharedDictionary = Arc<RwLock<Dictionary>>;

/// Wrap a dictionary for caching
pub fn shared(dictionary: Dictionary) -> SharedDictionary {
    Arc::new(RwLock::new(dictionary))
}

/// Cache seam used by the translation store
pub trait DictionaryCache: Send + Sync {
    /// Look up a live entry, refreshing its sliding deadline
    fn get(&self, key: &str) -> Option<SharedDictionary>;

    /// Insert `value` unless a live entry already exists; returns whichever
    /// dictionary ends up cached
    fn get_or_insert(&self, key: &str, value: SharedDictionary, ttl: Duration) -> SharedDictionary;

    /// Drop an entry; returns whether one was present
    fn remove(&self, key: &str) -> bool;
}

struct CacheEntry {
    value: SharedDictionary,
    ttl: Duration,
    last_access: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.last_access) >= self.ttl
    }
}

/// In-memory cache with sliding expiration
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, expired ones included until purged
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Remove every expired entry, returning how many were dropped
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        Self::purge_locked(&mut self.entries.lock(), now)
    }

    fn purge_locked(entries: &mut HashMap<String, CacheEntry>, now: Instant) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let purged = before - entries.len();

        if purged > 0 {
            debug!(purged = purged, "Expired cache entries purged");
        }
        purged
    }
}

impl DictionaryCache for MemoryCache {
    fn get(&self, key: &str) -> Option<SharedDictionary> {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        let expired = match entries.get_mut(key) {
            Some(entry) if !entry.is_expired(now) => {
                entry.last_access = now;
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.remove(key);
            debug!(cache_key = key, "Cache entry expired");
        }
        None
    }

    fn get_or_insert(&self, key: &str, value: SharedDictionary, ttl: Duration) -> SharedDictionary {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        if let Some(entry) = entries.get_mut(key) {
            if !entry.is_expired(now) {
                entry.last_access = now;
                return entry.value.clone();
            }
        }

        Self::purge_locked(&mut entries, now);
        entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.clone(),
                ttl,
                last_access: now,
            },
        );
        value
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.lock().remove(key).is_some()
    }
}

//! Cache Store Module
//!
//! Generic key/value cache combining HashMap storage with TTL expiry and a
//! bounded size enforced by oldest-write eviction.
//!
//! Every public operation acquires the one internal lock for its whole
//! duration, so each call is atomic with respect to every other call. There
//! is deliberately no finer-grained locking and no cross-call atomicity;
//! callers that need a get-then-put sequence to be atomic must serialize it
//! themselves (the repository does, for its write path).

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};

use crate::cache::entry::CacheEntry;
use crate::cache::CacheStats;
use crate::config::CacheStrategy;

// == Cache Store ==
/// Thread-safe cache with TTL expiry and bounded size.
///
/// Eviction picks the entry with the oldest write timestamp, not the oldest
/// access: repeated reads of a hot entry do not protect it. This is a known
/// simplification carried over from the original design.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage plus hit/miss/eviction counters, behind one lock
    inner: Mutex<Inner<K, V>>,
    /// Immutable caching strategy supplied at construction
    strategy: CacheStrategy,
}

#[derive(Debug)]
struct Inner<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    stats: CacheStats,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty store governed by the given strategy.
    pub fn new(strategy: CacheStrategy) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            }),
            strategy,
        }
    }

    /// Returns the strategy this store was built with.
    pub fn strategy(&self) -> &CacheStrategy {
        &self.strategy
    }

    fn lock(&self) -> MutexGuard<'_, Inner<K, V>> {
        // A poisoned lock only means a panicking thread left mid-operation;
        // the map itself is still structurally sound, so keep serving.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and not expired under the configured
    /// TTL. A present-but-expired entry is removed and counted as a miss.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut inner = self.lock();

        match inner.entries.get(key) {
            Some(entry) if entry.is_valid(self.strategy.ttl) => {
                let value = entry.value.clone();
                inner.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                // Stale entry: evict it on the way out
                inner.entries.remove(key);
                let remaining = inner.entries.len();
                inner.stats.record_expiration();
                inner.stats.record_miss();
                inner.stats.set_entries(remaining);
                None
            }
            None => {
                inner.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Inserts or overwrites a key-value pair.
    ///
    /// Overwriting resets the entry's write timestamp. Inserting a brand new
    /// key while the store is at capacity first evicts the entry with the
    /// oldest write timestamp.
    pub fn put(&self, key: K, value: V) {
        let mut inner = self.lock();

        let is_overwrite = inner.entries.contains_key(&key);
        if !is_overwrite && inner.entries.len() >= self.strategy.max_entries {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.written_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest_key) = oldest {
                inner.entries.remove(&oldest_key);
                inner.stats.record_eviction();
            }
        }

        inner.entries.insert(key, CacheEntry::new(value));
        let count = inner.entries.len();
        inner.stats.set_entries(count);
    }

    // == Invalidate ==
    /// Removes one entry unconditionally. No error if the key is absent.
    pub fn invalidate(&self, key: &K) {
        let mut inner = self.lock();
        inner.entries.remove(key);
        let count = inner.entries.len();
        inner.stats.set_entries(count);
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.stats.set_entries(0);
    }

    // == Is Valid ==
    /// Returns true iff the key is present and not expired.
    ///
    /// Side-effect-free: unlike `get`, a negative result does not evict the
    /// stale entry and no counters move.
    pub fn is_valid(&self, key: &K) -> bool {
        let inner = self.lock();
        inner
            .entries
            .get(key)
            .map(|entry| entry.is_valid(self.strategy.ttl))
            .unwrap_or(false)
    }

    // == Purge Expired ==
    /// Removes every expired entry, returning how many were removed.
    ///
    /// Used by the periodic background purge task.
    pub fn purge_expired(&self) -> usize {
        let mut inner = self.lock();
        let ttl = self.strategy.ttl;

        let expired_keys: Vec<K> = inner
            .entries
            .iter()
            .filter(|(_, entry)| !entry.is_valid(ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            inner.entries.remove(&key);
            inner.stats.record_expiration();
        }
        let remaining = inner.entries.len();
        inner.stats.set_entries(remaining);
        count
    }

    // == Stats ==
    /// Returns a snapshot of the store's counters.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let mut stats = inner.stats.clone();
        stats.set_entries(inner.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }
}

//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.
//! Entries are owned exclusively by the cache store and never leave it.

use std::time::Duration;

// == Cache Entry ==
/// A single cached value together with its write timestamp.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Write timestamp (Unix milliseconds); reset on every overwrite
    pub written_at: i64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry timestamped at the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            written_at: current_timestamp_ms(),
        }
    }

    // == Is Valid ==
    /// Checks whether the entry is still valid under the given TTL.
    ///
    /// An entry is valid iff the TTL is non-zero and strictly less time than
    /// the TTL has elapsed since the write. A zero TTL invalidates every
    /// entry unconditionally (no-cache policy).
    pub fn is_valid(&self, ttl: Duration) -> bool {
        if ttl.is_zero() {
            return false;
        }
        let age_ms = current_timestamp_ms() - self.written_at;
        (age_ms as u128) < ttl.as_millis()
    }

    // == Age ==
    /// Returns the entry age in milliseconds. Useful for diagnostics.
    #[allow(dead_code)]
    pub fn age_ms(&self) -> i64 {
        current_timestamp_ms() - self.written_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_fresh_is_valid() {
        let entry = CacheEntry::new("value".to_string());
        assert!(entry.is_valid(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_zero_ttl_never_valid() {
        let entry = CacheEntry::new(42);
        assert!(!entry.is_valid(Duration::ZERO));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let entry = CacheEntry::new(1);
        assert!(entry.is_valid(Duration::from_millis(50)));

        sleep(Duration::from_millis(80));

        assert!(!entry.is_valid(Duration::from_millis(50)));
    }

    #[test]
    fn test_validity_boundary() {
        // An entry written exactly `ttl` ago is no longer valid: the rule
        // is elapsed < ttl, strictly.
        let entry = CacheEntry {
            value: "v",
            written_at: current_timestamp_ms() - 1000,
        };
        assert!(!entry.is_valid(Duration::from_millis(1000)));
        assert!(entry.is_valid(Duration::from_millis(1500)));
    }

    #[test]
    fn test_age_grows() {
        let entry = CacheEntry::new(());
        let first = entry.age_ms();
        sleep(Duration::from_millis(10));
        assert!(entry.age_ms() >= first);
    }
}

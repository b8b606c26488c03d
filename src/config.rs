//! Configuration Module
//!
//! Defines the caching strategy supplied to the cache store at construction,
//! with optional loading from environment variables.

use std::env;
use std::time::Duration;

/// Caching strategy parameters.
///
/// Immutable after construction; the cache store takes a copy and never
/// re-reads the environment.
#[derive(Debug, Clone, Copy)]
pub struct CacheStrategy {
    /// Time-to-live for cached entries. A zero TTL means "never valid":
    /// every read falls through to the remote source (no-cache policy).
    pub ttl: Duration,
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Whether stale cached data may be served when the remote source fails
    pub offline_access: bool,
}

impl CacheStrategy {
    /// Creates a strategy with explicit values.
    pub fn new(ttl: Duration, max_entries: usize, offline_access: bool) -> Self {
        Self {
            ttl,
            max_entries,
            offline_access,
        }
    }

    /// Creates a strategy that disables caching entirely (zero TTL).
    pub fn no_cache() -> Self {
        Self {
            ttl: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Creates a CacheStrategy by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Entry TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `CACHE_OFFLINE_ACCESS` - Allow stale fallback reads (default: true)
    pub fn from_env() -> Self {
        Self {
            ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(300)),
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            offline_access: env::var("CACHE_OFFLINE_ACCESS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for CacheStrategy {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_entries: 100,
            offline_access: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_default() {
        let strategy = CacheStrategy::default();
        assert_eq!(strategy.ttl, Duration::from_secs(300));
        assert_eq!(strategy.max_entries, 100);
        assert!(strategy.offline_access);
    }

    #[test]
    fn test_strategy_no_cache() {
        let strategy = CacheStrategy::no_cache();
        assert!(strategy.ttl.is_zero());
    }

    #[test]
    fn test_strategy_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("CACHE_OFFLINE_ACCESS");

        let strategy = CacheStrategy::from_env();
        assert_eq!(strategy.ttl, Duration::from_secs(300));
        assert_eq!(strategy.max_entries, 100);
        assert!(strategy.offline_access);
    }
}

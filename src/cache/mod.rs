//! Cache Module
//!
//! Provides the generic in-memory cache backing the local data source:
//! TTL expiry, bounded size with oldest-write eviction, one internal lock.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::current_timestamp_ms;
pub use stats::CacheStats;
pub use store::CacheStore;

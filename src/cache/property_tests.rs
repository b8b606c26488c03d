//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache's structural properties under
//! arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::cache::CacheStore;
use crate::config::CacheStrategy;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_TTL: Duration = Duration::from_secs(300);

fn test_store() -> CacheStore<String, String> {
    CacheStore::new(CacheStrategy::new(TEST_TTL, TEST_MAX_ENTRIES, true))
}

// == Strategies ==
/// Generates cache keys from a small alphabet so collisions actually happen
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e][0-9]{0,2}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}"
}

/// A single cache operation for sequence testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
    Invalidate { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Invalidate { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A freshly written value reads back unchanged before the TTL elapses.
    #[test]
    fn prop_roundtrip_before_expiry(key in key_strategy(), value in value_strategy()) {
        let store = test_store();

        store.put(key.clone(), value.clone());

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // After invalidate, a key is gone no matter what was stored.
    #[test]
    fn prop_invalidate_removes_entry(key in key_strategy(), value in value_strategy()) {
        let store = test_store();

        store.put(key.clone(), value);
        prop_assert!(store.is_valid(&key));

        store.invalidate(&key);

        prop_assert!(!store.is_valid(&key));
        prop_assert_eq!(store.get(&key), None);
    }

    // The store never exceeds its capacity bound, whatever the insert order.
    #[test]
    fn prop_capacity_bound_holds(ops in prop::collection::vec(cache_op_strategy(), 1..200)) {
        let small = CacheStore::new(CacheStrategy::new(TEST_TTL, 10, true));

        for op in ops {
            match op {
                CacheOp::Put { key, value } => small.put(key, value),
                CacheOp::Get { key } => { let _ = small.get(&key); }
                CacheOp::Invalidate { key } => small.invalidate(&key),
            }
            prop_assert!(small.len() <= 10, "capacity bound violated");
        }
    }

    // Hit/miss counters agree with the observed outcomes of every get.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let store = test_store();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => store.put(key, value),
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Invalidate { key } => store.invalidate(&key),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "misses mismatch");
        prop_assert_eq!(stats.entries, store.len(), "entry count mismatch");
    }

    // With a zero TTL nothing is ever readable, no matter how recent the put.
    #[test]
    fn prop_zero_ttl_never_serves(keys in prop::collection::vec(key_strategy(), 1..20)) {
        let no_cache: CacheStore<String, String> =
            CacheStore::new(CacheStrategy::no_cache());

        for key in &keys {
            no_cache.put(key.clone(), "value".to_string());
            prop_assert_eq!(no_cache.get(key), None);
            prop_assert!(!no_cache.is_valid(key));
        }
    }

    // Clear leaves the store empty and every previously stored key unreadable.
    #[test]
    fn prop_clear_empties_store(entries in prop::collection::vec((key_strategy(), value_strategy()), 1..30)) {
        let store = test_store();
        let mut keys = HashSet::new();

        for (key, value) in entries {
            store.put(key.clone(), value);
            keys.insert(key);
        }

        store.clear();

        prop_assert!(store.is_empty());
        for key in keys {
            prop_assert_eq!(store.get(&key), None);
        }
    }
}

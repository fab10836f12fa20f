//! Correctness Tests for the LFU Cache
//!
//! This module validates the eviction policy using simple, predictable
//! access patterns. Each test explicitly checks which key gets evicted when
//! a set causes an eviction.
//!
//! ## Test Strategy
//! - Small cache sizes (2-5 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - Explicit checks for which key was evicted after each set
//! - A structural audit (`check_invariants`) after every scenario

use bucket_lfu::config::LfuCacheConfig;
use bucket_lfu::metrics::CacheMetrics;
use bucket_lfu::LfuCache;

// ============================================================================
// HELPER FUNCTIONS FOR CACHE CREATION
// ============================================================================

/// Helper to create an LfuCache with the given capacity
fn make_lfu<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LfuCache<K, V> {
    let config = LfuCacheConfig { capacity: cap };
    LfuCache::init(config, None)
}

fn assert_sound<K: std::hash::Hash + Eq, V>(cache: &LfuCache<K, V>) {
    if let Err(err) = cache.check_invariants() {
        panic!("invariant broken: {}", err);
    }
}

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_scenario_capacity_two() {
    let mut cache = make_lfu(2);
    cache.set(1, 1);
    cache.set(2, 2);
    assert_eq!(cache.get(&1), Some(&1));

    // Key 2 is the only entry left at frequency 0.
    assert_eq!(cache.set(3, 3), Some((2, 2)));
    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&3), Some(&3));
    assert_sound(&cache);
}

#[test]
fn test_scenario_capacity_zero() {
    let mut cache = make_lfu(0);
    assert_eq!(cache.set(1, 1), None);
    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.len(), 0);
    assert_sound(&cache);
}

#[test]
fn test_scenario_recency_breaks_tie() {
    let mut cache = make_lfu(2);
    cache.set(1, 1);
    cache.set(2, 2);

    // Both at frequency 0; key 1 was touched first.
    assert_eq!(cache.set(3, 3), Some((1, 1)));
    assert!(cache.contains(&2));
    assert!(cache.contains(&3));
    assert_sound(&cache);
}

// ============================================================================
// EVICTION POLICY
// ============================================================================

#[test]
fn test_lfu_evicts_lowest_frequency() {
    let mut cache = make_lfu(3);
    cache.set("a", 1);
    cache.set("b", 2);
    cache.set("c", 3);

    // a: 3 accesses, b: 1 access, c: 2 accesses
    for _ in 0..3 {
        cache.get(&"a");
    }
    cache.get(&"b");
    cache.get(&"c");
    cache.get(&"c");

    assert_eq!(cache.set("d", 4), Some(("b", 2)));
    assert_eq!(cache.set("e", 5), Some(("d", 4)));

    assert!(cache.contains(&"a"));
    assert!(cache.contains(&"c"));
    assert!(cache.contains(&"e"));
    assert_sound(&cache);
}

#[test]
fn test_lfu_tie_break_follows_last_touch_not_insertion() {
    let mut cache = make_lfu(3);
    cache.set("a", 1);
    cache.set("b", 2);
    cache.set("c", 3);

    // All reach frequency 1; "a" is touched last.
    cache.get(&"b");
    cache.get(&"c");
    cache.get(&"a");

    assert_eq!(cache.set("d", 4), Some(("b", 2)));
    assert_eq!(cache.set("e", 5), Some(("d", 4)));

    // Remaining frequency-1 entries leave in touch order.
    cache.get(&"e");
    assert_eq!(cache.pop(), Some(("c", 3)));
    assert_eq!(cache.pop(), Some(("a", 1)));
    assert_eq!(cache.pop(), Some(("e", 5)));
    assert_sound(&cache);
}

#[test]
fn test_lfu_new_key_is_first_eviction_candidate() {
    let mut cache = make_lfu(3);
    cache.set("a", 1);
    cache.set("b", 2);
    cache.set("c", 3);
    cache.get(&"a");
    cache.get(&"b");
    cache.get(&"c");

    // A fresh key starts at frequency 0 and is the next to go.
    cache.set("d", 4);
    assert_eq!(cache.set("e", 5), Some(("d", 4)));
    assert_sound(&cache);
}

#[test]
fn test_lfu_update_promotes_like_get() {
    let mut cache = make_lfu(2);
    cache.set("a", 1);
    cache.set("b", 2);

    assert_eq!(cache.set("a", 10), None);
    assert_eq!(cache.frequency(&"a"), Some(1));

    assert_eq!(cache.set("c", 3), Some(("b", 2)));
    assert_eq!(cache.get(&"a"), Some(&10));
    assert_sound(&cache);
}

#[test]
fn test_lfu_hot_key_survives_churn() {
    let mut cache = make_lfu(4);
    cache.set(0, 0);
    for _ in 0..10 {
        cache.get(&0);
    }

    for i in 1..100 {
        cache.set(i, i);
        assert!(cache.contains(&0), "hot key evicted at step {}", i);
    }
    assert_eq!(cache.len(), 4);
    assert_sound(&cache);
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_capacity_bound_and_single_eviction() {
    let mut cache = make_lfu(5);
    for i in 0..50u32 {
        let before = cache.len();
        let evicted = cache.set(i, i);

        assert!(cache.len() <= cache.cap());
        if before == cache.cap() {
            assert!(evicted.is_some(), "full cache inserted {} without evicting", i);
            assert_eq!(cache.len(), cache.cap());
        } else {
            assert!(evicted.is_none());
            assert_eq!(cache.len(), before + 1);
        }

        if i % 4 == 0 {
            cache.get(&i);
        }
    }
    assert_sound(&cache);
}

#[test]
fn test_frequency_increases_by_one_per_access() {
    let mut cache = make_lfu(3);
    cache.set("k", 0);
    assert_eq!(cache.frequency(&"k"), Some(0));

    for expected in 1..=20u64 {
        if expected % 2 == 0 {
            cache.get(&"k");
        } else {
            cache.set("k", expected);
        }
        assert_eq!(cache.frequency(&"k"), Some(expected));
    }

    // Other keys do not change it.
    cache.set("x", 1);
    cache.get(&"x");
    assert_eq!(cache.frequency(&"k"), Some(20));
    assert_sound(&cache);
}

#[test]
fn test_round_trip() {
    let mut cache = make_lfu(8);
    for i in 0..8 {
        cache.set(i, i * 10);
        assert_eq!(cache.get(&i), Some(&(i * 10)));
    }
}

#[test]
fn test_miss_is_idempotent() {
    let mut probed = make_lfu(3);
    let mut control = make_lfu(3);

    for cache in [&mut probed, &mut control] {
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        cache.get(&"b");
    }

    for _ in 0..10 {
        assert_eq!(probed.get(&"missing"), None);
    }

    // Both caches must now behave identically.
    for key in ["d", "e", "f"] {
        assert_eq!(probed.set(key, 0), control.set(key, 0));
    }
    assert_eq!(probed.min_frequency(), control.min_frequency());
    assert_sound(&probed);
}

// ============================================================================
// EXTENSIONS
// ============================================================================

#[test]
fn test_remove_then_reinsert_starts_fresh() {
    let mut cache = make_lfu(2);
    cache.set("a", 1);
    for _ in 0..5 {
        cache.get(&"a");
    }

    assert_eq!(cache.remove(&"a"), Some(1));
    cache.set("a", 2);
    assert_eq!(cache.frequency(&"a"), Some(0));
    assert_sound(&cache);
}

#[test]
fn test_pop_drains_in_eviction_order() {
    let mut cache = make_lfu(4);
    cache.set("a", 1);
    cache.set("b", 2);
    cache.set("c", 3);
    cache.set("d", 4);

    cache.get(&"c");
    cache.get(&"c");
    cache.get(&"a");

    let order: Vec<&str> = std::iter::from_fn(|| cache.pop().map(|(k, _)| k)).collect();
    assert_eq!(order, ["b", "d", "a", "c"]);
    assert!(cache.is_empty());
    assert_sound(&cache);
}

#[test]
fn test_try_set_and_try_new() {
    assert!(LfuCache::<&str, i32>::try_new(0).is_err());

    let mut cache = LfuCache::try_new(1).unwrap();
    assert_eq!(cache.try_set("a", 1), Ok(None));
    assert_eq!(cache.try_set("b", 2), Ok(Some(("a", 1))));

    let mut zero: LfuCache<&str, i32> = make_lfu(0);
    let err = zero.try_set("a", 1).unwrap_err();
    assert!(err.to_string().contains("zero"));
}

#[test]
fn test_metrics_track_operations() {
    let mut cache = make_lfu(2);
    cache.set("a", 1);
    cache.set("b", 2);
    cache.get(&"a");
    cache.get(&"z");
    cache.set("c", 3);

    let metrics = cache.metrics();
    assert_eq!(metrics["cache_hits"], 1.0);
    assert_eq!(metrics["cache_misses"], 1.0);
    assert_eq!(metrics["insertions"], 3.0);
    assert_eq!(metrics["evictions"], 1.0);
    assert_eq!(metrics["hit_rate"], 0.5);
}

#[test]
fn test_string_keys_and_values() {
    let mut cache: LfuCache<String, String> = make_lfu(2);
    cache.set("apple".to_string(), "red".to_string());
    cache.set("banana".to_string(), "yellow".to_string());

    assert_eq!(cache.get("apple").map(String::as_str), Some("red"));
    let evicted = cache.set("cherry".to_string(), "dark".to_string());
    assert_eq!(evicted, Some(("banana".to_string(), "yellow".to_string())));
    assert_sound(&cache);
}

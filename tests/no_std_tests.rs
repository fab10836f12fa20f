#![no_std]
extern crate alloc;
extern crate bucket_lfu;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use bucket_lfu::config::LfuCacheConfig;
use bucket_lfu::metrics::CacheMetrics;
use bucket_lfu::LfuCache;

// Helper function to create caches with the init pattern
fn make_lfu<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> LfuCache<K, V> {
    let config = LfuCacheConfig { capacity: cap };
    LfuCache::init(config, None)
}

#[test]
fn test_lfu_in_no_std() {
    let mut cache = make_lfu(2);

    let key1 = String::from("key1");
    let key2 = String::from("key2");

    cache.set(key1.clone(), 1);
    cache.set(key2.clone(), 2);

    // Access key1 multiple times to increase its frequency
    cache.get(&key1);
    cache.get(&key1);

    // Add a new item, which should evict key2 (lower frequency)
    let key3 = String::from("key3");
    let evicted = cache.set(key3.clone(), 3);

    assert_eq!(evicted, Some((key2.clone(), 2)));
    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert!(cache.get(&key2).is_none());
    assert_eq!(*cache.get(&key3).unwrap(), 3);
}

#[test]
fn test_lfu_churn_in_no_std() {
    let mut cache = make_lfu(8);
    let keys: Vec<String> = (0..64).map(|i| format!("key{i}")).collect();

    for (i, key) in keys.iter().enumerate() {
        cache.set(key.clone(), i);
        if i % 5 == 0 {
            cache.get(key);
        }
    }

    assert_eq!(cache.len(), 8);
    assert!(cache.check_invariants().is_ok());
}

#[test]
fn test_complex_values_in_no_std() {
    let mut cache = make_lfu(2);

    cache.set("a", Vec::from([1u8, 2, 3]));
    if let Some(value) = cache.get_mut(&"a") {
        value.push(4);
    }

    assert_eq!(cache.peek(&"a").map(Vec::len), Some(4));
    assert_eq!(cache.remove(&"a"), Some(Vec::from([1u8, 2, 3, 4])));
    assert!(cache.is_empty());
}

#[test]
fn test_metrics_in_no_std() {
    let mut cache = make_lfu(1);
    cache.set(1u8, 1u8);
    cache.set(2u8, 2u8);

    let metrics = cache.metrics();
    assert_eq!(metrics["evictions"], 1.0);
    assert_eq!(cache.algorithm_name(), "LFU");
}

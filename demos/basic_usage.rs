//! Basic LFU Cache Usage
//!
//! Walks through frequency-based eviction, the recency tie-break, and the
//! metrics report.
//!
//! Run with: cargo run --example basic_usage

extern crate bucket_lfu;

use bucket_lfu::config::LfuCacheConfig;
use bucket_lfu::metrics::CacheMetrics;
use bucket_lfu::LfuCache;

fn main() {
    println!("LFU Cache Walkthrough");
    println!("=====================");
    println!("Capacity of 3 items. We add fruit, read some of it, then overflow.\n");

    let config = LfuCacheConfig { capacity: 3 };
    let mut cache: LfuCache<&str, i32> = LfuCache::init(config, None);

    for (name, price) in [("apple", 1), ("banana", 2), ("cherry", 3)] {
        cache.set(name, price);
        println!("set {:<10} -> frequency {:?}", name, cache.frequency(&name));
    }

    println!("\nReading apple three times and cherry once...");
    for _ in 0..3 {
        cache.get(&"apple");
    }
    cache.get(&"cherry");
    for name in ["apple", "banana", "cherry"] {
        println!("  {:<10} frequency {:?}", name, cache.frequency(&name));
    }

    match cache.set("date", 4) {
        Some((key, value)) => println!("\nset date evicted {} (value {})", key, value),
        None => println!("\nset date evicted nothing"),
    }

    println!("\nTie-break, in a second cache of capacity 2:");
    let mut small = LfuCache::new(2);
    small.set("fig", 6);
    small.set("grape", 7);
    if let Some((key, _)) = small.set("kiwi", 8) {
        println!("  fig and grape are both unread; set kiwi evicted {} (touched first)", key);
    }

    println!("\nMinimum frequency now: {:?}", cache.min_frequency());

    println!("\nMetrics ({}):", cache.algorithm_name());
    for (name, value) in cache.metrics() {
        println!("  {:<28} {:.2}", name, value);
    }

    match cache.check_invariants() {
        Ok(()) => println!("\nStructure audit passed."),
        Err(err) => println!("\nStructure audit failed: {}", err),
    }
}

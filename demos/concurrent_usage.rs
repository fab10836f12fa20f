//! Concurrent LFU Cache Usage
//!
//! Several threads share one cache. A handful of hot keys are read
//! constantly while writers stream cold keys through; the hot keys survive
//! because eviction follows the cache-wide frequency order.
//!
//! Run with: cargo run --example concurrent_usage --features concurrent

extern crate bucket_lfu;

use bucket_lfu::metrics::CacheMetrics;
use bucket_lfu::ConcurrentLfuCache;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

const CAPACITY: usize = 1_000;
const HOT_KEYS: u64 = 10;
const THREADS: u64 = 4;
const OPS_PER_THREAD: u64 = 50_000;

fn main() {
    let cache: Arc<ConcurrentLfuCache<u64, String>> = Arc::new(ConcurrentLfuCache::new(CAPACITY));

    for key in 0..HOT_KEYS {
        cache.set(key, format!("hot-{}", key));
    }

    let start = Instant::now();
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    if i % 2 == 0 {
                        let _ = cache.get_with(&(i % HOT_KEYS), |value| value.len());
                    } else {
                        let key = HOT_KEYS + t * OPS_PER_THREAD + i;
                        cache.set(key, format!("cold-{}", key));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    let elapsed = start.elapsed();

    println!("Concurrent LFU Cache");
    println!("====================");
    println!(
        "{} threads x {} ops in {:?}",
        THREADS, OPS_PER_THREAD, elapsed
    );
    println!("entries: {} / {}", cache.len(), cache.cap());

    let survivors = (0..HOT_KEYS).filter(|key| cache.contains(key)).count();
    println!("hot keys still cached: {} / {}", survivors, HOT_KEYS);
    if let Some(frequency) = cache.frequency(&0) {
        println!("frequency of hot key 0: {}", frequency);
    }

    let metrics = cache.metrics();
    println!("\nMetrics ({}):", cache.algorithm_name());
    for name in ["cache_hits", "cache_misses", "hit_rate", "evictions", "active_frequency_levels"] {
        println!("  {:<24} {:.2}", name, metrics[name]);
    }

    match cache.check_invariants() {
        Ok(()) => println!("\nStructure audit passed."),
        Err(err) => println!("\nStructure audit failed: {}", err),
    }
}

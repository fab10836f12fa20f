//! Cache Metrics System
//!
//! Provides counters for the LFU cache using BTreeMap-based reporting. Every
//! counter is updated in O(1) as part of the operation it describes; nothing
//! here scans the cache.
//!
//! # Why BTreeMap over HashMap?
//!
//! Metrics always come out in the same key order, which keeps test
//! assertions, benchmark comparisons and exported reports reproducible.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lfu;

pub use lfu::LfuCacheMetrics;

/// Counters common to any count-bounded cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get` / `get_mut`) made to the cache
    pub requests: u64,

    /// Number of lookups that found their key
    pub cache_hits: u64,

    /// New keys stored
    pub insertions: u64,

    /// Writes that overwrote the value of a key already present
    pub updates: u64,

    /// Entries removed to make room for a new key, or popped explicitly
    pub evictions: u64,

    /// Writes discarded because the cache has zero capacity
    pub rejected_writes: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key being stored.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an in-place value overwrite.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an entry leaving the cache through eviction.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records a write dropped by a zero-capacity cache.
    pub fn record_rejected_write(&mut self) {
        self.rejected_writes += 1;
    }

    /// Number of lookups that did not find their key.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Ratio of hits to lookups, between 0.0 and 1.0 (0.0 before any lookup).
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Ratio of misses to lookups, between 0.0 and 1.0 (0.0 before any lookup).
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("rejected_writes".to_string(), self.rejected_writes as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        if self.insertions > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.insertions as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics reporting interface.
///
/// Implemented by the cache types and by the metrics structs themselves so a
/// caller can collect reports without knowing the concrete cache type.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification
    fn algorithm_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_metrics_rates() {
        let mut m = CoreCacheMetrics::new();
        assert_eq!(m.hit_rate(), 0.0);
        assert_eq!(m.miss_rate(), 0.0);

        m.record_hit();
        m.record_hit();
        m.record_hit();
        m.record_miss();
        assert_eq!(m.requests, 4);
        assert_eq!(m.cache_misses(), 1);
        assert_eq!(m.hit_rate(), 0.75);
        assert_eq!(m.miss_rate(), 0.25);
    }

    #[test]
    fn test_core_metrics_btreemap() {
        let mut m = CoreCacheMetrics::new();
        m.record_insertion();
        m.record_insertion();
        m.record_eviction();
        m.record_update();
        m.record_rejected_write();

        let map = m.to_btreemap();
        assert_eq!(map["insertions"], 2.0);
        assert_eq!(map["evictions"], 1.0);
        assert_eq!(map["updates"], 1.0);
        assert_eq!(map["rejected_writes"], 1.0);
        assert_eq!(map["eviction_rate"], 0.5);

        // Keys come out sorted.
        let keys: alloc::vec::Vec<&String> = map.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}

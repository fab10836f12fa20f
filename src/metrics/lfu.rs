//! LFU Cache Metrics
//!
//! Metrics specific to the bucket-chain LFU cache: how frequencies are
//! distributed across the chain and how often entries are promoted.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LFU-specific metrics (extends CoreCacheMetrics)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LfuCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,

    /// Frequency of the minimum bucket (0 when the cache is empty)
    pub min_frequency: u64,

    /// Highest frequency any entry has reached so far
    pub peak_frequency: u64,

    /// Total number of promotions (every hit or update adds one)
    pub total_frequency_increments: u64,

    /// Number of frequency buckets currently in the chain
    pub active_frequency_levels: u64,
}

impl LfuCacheMetrics {
    /// Creates a zeroed set of LFU metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a promotion to `new_frequency`.
    pub fn record_frequency_increment(&mut self, new_frequency: u64) {
        self.total_frequency_increments += 1;
        if new_frequency > self.peak_frequency {
            self.peak_frequency = new_frequency;
        }
    }

    /// Records a lookup hit.
    pub fn record_hit(&mut self) {
        self.core.record_hit();
    }

    /// Records a lookup miss.
    pub fn record_miss(&mut self) {
        self.core.record_miss();
    }

    /// Refreshes the chain shape after a structural change.
    ///
    /// # Arguments
    /// * `levels` - Number of buckets in the chain
    /// * `min_frequency` - Frequency of the minimum bucket, if any
    pub fn update_frequency_levels(&mut self, levels: usize, min_frequency: Option<u64>) {
        self.active_frequency_levels = levels as u64;
        self.min_frequency = min_frequency.unwrap_or(0);
    }

    /// Average number of promotions per hit.
    ///
    /// Exceeds 1.0 when updates (which also promote) are frequent.
    pub fn average_frequency(&self) -> f64 {
        if self.core.cache_hits > 0 {
            self.total_frequency_increments as f64 / self.core.cache_hits as f64
        } else {
            0.0
        }
    }

    /// Converts LFU metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("min_frequency".to_string(), self.min_frequency as f64);
        metrics.insert("peak_frequency".to_string(), self.peak_frequency as f64);
        metrics.insert(
            "total_frequency_increments".to_string(),
            self.total_frequency_increments as f64,
        );
        metrics.insert(
            "active_frequency_levels".to_string(),
            self.active_frequency_levels as f64,
        );
        metrics.insert("average_frequency".to_string(), self.average_frequency());

        metrics
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_frequency_is_high_water_mark() {
        let mut m = LfuCacheMetrics::new();
        m.record_frequency_increment(3);
        m.record_frequency_increment(1);
        assert_eq!(m.peak_frequency, 3);
        assert_eq!(m.total_frequency_increments, 2);
    }

    #[test]
    fn test_frequency_levels() {
        let mut m = LfuCacheMetrics::new();
        m.update_frequency_levels(3, Some(2));
        assert_eq!(m.active_frequency_levels, 3);
        assert_eq!(m.min_frequency, 2);

        m.update_frequency_levels(0, None);
        assert_eq!(m.min_frequency, 0);
    }

    #[test]
    fn test_lfu_metrics_report() {
        let mut m = LfuCacheMetrics::new();
        m.record_hit();
        m.record_hit();
        m.record_miss();
        m.record_frequency_increment(1);
        m.record_frequency_increment(2);
        m.record_frequency_increment(1);

        let map = m.metrics();
        assert_eq!(m.algorithm_name(), "LFU");
        assert_eq!(map["cache_hits"], 2.0);
        assert_eq!(map["cache_misses"], 1.0);
        assert_eq!(map["average_frequency"], 1.5);
        assert_eq!(map["peak_frequency"], 2.0);
    }
}

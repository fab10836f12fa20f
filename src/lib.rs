#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## How It Works
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                              LfuCache                                │
//! │                                                                      │
//! │   HashMap<K, EntryId>          BucketChain (ascending frequency)     │
//! │   ┌──────────┐                                                       │
//! │   │ key ─▶ e │──────┐     min ─▶ ┌──────┐ ◀─▶ ┌──────┐ ◀─▶ ┌──────┐   │
//! │   │ key ─▶ e │────┐ │            │ f=0  │     │ f=2  │     │ f=7  │   │
//! │   │ key ─▶ e │──┐ │ │            └──┬───┘     └──┬───┘     └──┬───┘   │
//! │   └──────────┘  │ │ │               ▼            ▼            ▼       │
//! │                 └─┴─┴──────▶  LRU ◀─▶ ... ◀─▶ MRU   (one list each)  │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **get / set of a present key**: move the entry to the tail of the
//!   bucket for `frequency + 1`, creating that bucket if needed.
//! - **set of a new key into a full cache**: evict the head of the minimum
//!   bucket, then append the new key to the frequency-0 bucket.
//! - Empty buckets are destroyed immediately, so the chain never holds more
//!   buckets than there are entries.
//!
//! ## Performance Characteristics
//!
//! | Operation | Time | Allocates |
//! |-----------|------|-----------|
//! | `get` / `get_mut` | O(1) | No |
//! | `set` (key present) | O(1) | No |
//! | `set` (new key) | O(1) | Only while the arenas are still growing |
//! | `remove` / `pop` | O(1) | No |
//! | `check_invariants` | O(n) | No |
//!
//! ## Code Examples
//!
//! ```rust
//! use bucket_lfu::LfuCache;
//! use bucket_lfu::config::LfuCacheConfig;
//!
//! let config = LfuCacheConfig { capacity: 2 };
//! let mut cache: LfuCache<&str, i32> = LfuCache::init(config, None);
//! cache.set("rare", 1);
//! cache.set("popular", 2);
//!
//! // Access "popular" multiple times
//! for _ in 0..10 { cache.get(&"popular"); }
//!
//! cache.set("new", 3);  // "rare" evicted (lowest frequency)
//! assert!(cache.get(&"popular").is_some());
//! assert!(cache.get(&"rare").is_none());
//! ```
//!
//! ## Concurrent Cache
//!
//! Enable the `concurrent` feature for a thread-safe version:
//!
//! ```toml
//! [dependencies]
//! bucket-lfu = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ```rust,ignore
//! use bucket_lfu::ConcurrentLfuCache;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(ConcurrentLfuCache::new(10_000));
//!
//! // Safe to share across threads
//! let cache_clone = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     cache_clone.set("key".to_string(), 42);
//! });
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `hashbrown` | yes | Use `hashbrown` for the lookup table (required for `no_std`) |
//! | `std` | no | Implement `std::error::Error` for the error types |
//! | `concurrent` | no | `ConcurrentLfuCache` backed by `parking_lot` |
//! | `tracing` | no | Emit `tracing` events for construction, eviction and bucket churn |
//! | `nightly` | no | Enable `hashbrown` nightly optimizations |
//!
//! ## Modules
//!
//! - [`lfu`]: The bucket-chain LFU cache
//! - [`config`]: Configuration structure
//! - [`error`]: Configuration and invariant errors
//! - [`metrics`]: Metrics collection for cache performance monitoring
//! - [`concurrent`]: Thread-safe wrapper (requires `concurrent` feature)

#![no_std]

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

#[cfg(test)]
extern crate scoped_threadpool;

/// Emits a trace-level event under the crate's target. Compiles to nothing
/// unless the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "bucket_lfu", $($arg)+);
    };
}

/// Debug-level counterpart of `trace_event!`.
macro_rules! trace_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "bucket_lfu", $($arg)+);
    };
}

/// Typed-handle slot arena backing entries and buckets.
///
/// **Note**: internal infrastructure. Handles are plain indices; the cache
/// guarantees it never dereferences one after its slot is vacated.
pub(crate) mod slab;

/// Cache entry type and its handle.
pub(crate) mod entry;

/// Frequency buckets and the chain linking them.
pub(crate) mod bucket;

/// Cache configuration structures.
pub mod config;

/// Error types.
pub mod error;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used item,
/// oldest first among ties, with every operation in O(1).
pub mod lfu;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions, evictions and the shape of the
/// frequency chain, reported through a common interface.
pub mod metrics;

/// Concurrent cache implementation.
///
/// Provides a thread-safe LFU cache: the whole cache behind one
/// `parking_lot::Mutex`.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use config::LfuCacheConfig;
pub use error::{ConfigError, InvariantError};
pub use lfu::LfuCache;
pub use metrics::CacheMetrics;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLfuCache;

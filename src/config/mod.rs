//! Cache Configuration Module
//!
//! Configuration structures have public fields for simple instantiation:
//! build the struct, then hand it to
//! [`LfuCache::init`](crate::LfuCache::init).
//!
//! # Sizing
//!
//! The cache is bounded by entry count only. Every entry costs exactly one
//! slot, whatever the size of its value. A capacity of zero is accepted by the
//! lenient constructors and turns every write into a no-op; call
//! [`LfuCacheConfig::validate`] (or use
//! [`LfuCache::try_new`](crate::LfuCache::try_new)) to reject it instead.
//!
//! Memory per entry is roughly the key (stored twice: once in the lookup
//! table, once in the entry), the value, and ~40 bytes of links. Buckets add
//! ~80 bytes per distinct frequency in use.
//!
//! # Examples
//!
//! ```
//! use bucket_lfu::config::LfuCacheConfig;
//! use bucket_lfu::LfuCache;
//!
//! let config = LfuCacheConfig { capacity: 1000 };
//! let cache: LfuCache<String, i32> = LfuCache::init(config, None);
//! assert_eq!(cache.cap(), 1000);
//! ```

pub mod lfu;

pub use lfu::LfuCacheConfig;

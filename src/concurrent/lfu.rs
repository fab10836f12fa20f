//! Concurrent LFU Cache Implementation
//!
//! A thread-safe LFU cache: one [`LfuCache`](crate::LfuCache) segment behind
//! one lock. This is the multi-threaded counterpart to `LfuCache`.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            ConcurrentLfuCache            │
//! │                                          │
//! │   thread A ──┐                           │
//! │   thread B ──┼──▶ ┌────────┐             │
//! │   thread C ──┘    │ Mutex  │             │
//! │                   └───┬────┘             │
//! │                   ┌───▼────────┐         │
//! │                   │ LfuSegment │         │
//! │                   └────────────┘         │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Performance Characteristics
//!
//! | Metric | Value |
//! |--------|-------|
//! | Get/Set/Remove | O(1) under the lock |
//! | Concurrency | Fully serialized |
//! | Frequency tracking | Global |
//!
//! # When to Use
//!
//! **Use ConcurrentLfuCache when:**
//! - Multiple threads need cache access
//! - Eviction must follow the cache-wide frequency order
//!
//! **Consider alternatives when:**
//! - Single-threaded access only → use `LfuCache`
//! - The lock itself becomes the bottleneck → shard several `ConcurrentLfuCache`
//!   instances by key hash and accept per-shard frequency ordering

extern crate alloc;

use crate::config::LfuCacheConfig;
use crate::error::{ConfigError, InvariantError};
use crate::lfu::LfuSegment;
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LFU cache.
///
/// All methods take `&self`; share the cache across threads with `Arc`.
pub struct ConcurrentLfuCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LfuSegment<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLfuCache<K, V, DefaultHashBuilder> {
    /// Creates a new concurrent LFU cache holding at most `capacity` entries.
    ///
    /// Like [`LfuCache::new`](crate::LfuCache::new), a zero capacity is
    /// accepted and yields a cache that discards every write.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a new concurrent LFU cache, rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        let config = LfuCacheConfig { capacity };
        config.validate()?;
        Ok(Self::init(config, None))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLfuCache<K, V, S> {
    /// Creates a new concurrent LFU cache from a configuration.
    pub fn init(config: LfuCacheConfig, hasher: Option<S>) -> Self
    where
        S: Default,
    {
        Self {
            segment: Mutex::new(LfuSegment::init(config, hasher.unwrap_or_default())),
        }
    }

    /// Creates a new concurrent LFU cache with a custom hash builder.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(LfuSegment::init(LfuCacheConfig { capacity }, hash_builder)),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    pub fn cap(&self) -> usize {
        self.segment.lock().cap()
    }

    /// Returns the number of entries currently cached.
    pub fn len(&self) -> usize {
        self.segment.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.segment.lock().is_empty()
    }

    /// Gets a value from the cache and counts the access.
    ///
    /// This clones the value to avoid holding the lock. For zero-copy access,
    /// use `get_with()` instead.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.segment.lock().get(key).cloned()
    }

    /// Counts an access and applies `f` to the value while holding the lock.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.segment.lock().get(key).map(f)
    }

    /// Returns a clone of the value without counting an access.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.segment.lock().peek(key).cloned()
    }

    /// Returns `true` if the cache contains the specified key.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains(key)
    }

    /// Returns the access count of `key`, if cached.
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().frequency(key)
    }

    /// Inserts or updates a key-value pair, returning the evicted pair if
    /// room had to be made.
    pub fn set(&self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        self.segment.lock().set(key, value)
    }

    /// Like `set()`, but reports a write to a zero-capacity cache as an error.
    pub fn try_set(&self, key: K, value: V) -> Result<Option<(K, V)>, ConfigError>
    where
        K: Clone,
    {
        self.segment.lock().try_set(key, value)
    }

    /// Removes a key from the cache, returning the value if it existed.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key)
    }

    /// Removes and returns the current eviction candidate.
    pub fn pop(&self) -> Option<(K, V)> {
        self.segment.lock().pop()
    }

    /// Clears all entries from the cache.
    pub fn clear(&self) {
        self.segment.lock().clear();
    }

    /// Audits the cache structure under the lock. Runs in O(n).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.segment.lock().check_invariants()
    }
}

impl<K, V, S> CacheMetrics for ConcurrentLfuCache<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLFU"
    }
}

impl<K, V, S> fmt::Debug for ConcurrentLfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentLfuCache")
            .field("segment", &*self.segment.lock())
            .finish()
    }
}

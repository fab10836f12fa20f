//! Least Frequently Used Cache Implementation.
//!
//! The LFU cache evicts the entry that has been accessed the fewest times
//! when it must make room for a new key. Among entries sharing the lowest
//! access count, the one touched least recently goes first.
//!
//! Every operation, eviction included, runs in O(1) without a priority queue
//! or any scan. Instead the cache keeps a two-level structure:
//!
//! ```text
//!   lookup table            bucket chain, strictly increasing frequency
//!   ┌─────┬───────┐
//!   │ "a" │  e0 ──┼─┐    min ──▶ [freq 0] ◀──▶ [freq 1] ◀──▶ [freq 3]
//!   │ "b" │  e1 ──┼─┼─┐             │             │             │
//!   │ "c" │  e2 ──┼─┼─┼─┐           ▼             ▼             ▼
//!   │ "d" │  e3 ──┼─┼─┼─┼──▶   e1 ◀──▶ e2         e0            e3
//!   └─────┴───────┘ └─┴─┴──▶ (least ──▶ most recent within a bucket)
//! ```
//!
//! - An access moves the entry from its bucket to the tail of the bucket
//!   holding the next frequency, creating that bucket right after the current
//!   one if it does not exist yet. Frequencies only ever grow by one, so the
//!   chain never needs re-sorting.
//! - A bucket is destroyed the moment it becomes empty. If it was the
//!   minimum bucket, the minimum pointer moves to its right neighbor.
//! - Eviction takes the head of the minimum bucket.
//! - A new key starts at frequency 0, at the tail of the frequency-0 bucket,
//!   which becomes the new chain head if it had to be created.
//!
//! Entries and buckets live in arenas and link to each other through typed
//! handles, so the back-references carry no ownership.
//!
//! # Thread Safety
//!
//! `LfuCache` performs no internal locking. Serialize access externally, or
//! enable the `concurrent` feature and use
//! [`ConcurrentLfuCache`](crate::concurrent::ConcurrentLfuCache), which places the
//! whole cache behind a single lock.

extern crate alloc;

use crate::bucket::{BucketChain, BucketId, EntrySlab};
use crate::config::LfuCacheConfig;
use crate::entry::{CacheEntry, EntryId};
use crate::error::{ConfigError, InvariantError};
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use crate::slab::Slab;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on the slots reserved up front. Larger caches grow their
/// arenas on demand instead.
const MAX_PREALLOCATED_SLOTS: usize = 1 << 16;

/// Internal LFU segment containing the actual cache algorithm.
///
/// Shared between `LfuCache` (single-threaded) and `ConcurrentLfuCache`
/// (one lock around the whole segment).
pub(crate) struct LfuSegment<K, V, S = DefaultHashBuilder> {
    /// Configuration for the LFU cache
    config: LfuCacheConfig,

    /// Key to entry handle
    map: HashMap<K, EntryId, S>,

    /// Every live entry
    entries: EntrySlab<K, V>,

    /// Every live bucket, linked in increasing frequency order
    chain: BucketChain,

    /// Head of the chain: the bucket with the lowest frequency in use
    min_bucket: Option<BucketId>,

    /// Metrics for tracking cache performance and frequency distribution
    metrics: LfuCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuSegment<K, V, S> {
    /// Creates a new LFU segment from a configuration and hash builder.
    pub(crate) fn init(config: LfuCacheConfig, hash_builder: S) -> Self {
        let reserved = config.capacity.min(MAX_PREALLOCATED_SLOTS);
        trace_debug!(capacity = config.capacity, "lfu cache created");

        LfuSegment {
            config,
            map: HashMap::with_capacity_and_hasher(reserved, hash_builder),
            entries: Slab::with_capacity(reserved),
            // A promotion briefly holds one bucket more than there are entries.
            chain: BucketChain::with_capacity(reserved + 1),
            min_bucket: None,
            metrics: LfuCacheMetrics::new(),
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.config.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &LfuCacheMetrics {
        &self.metrics
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.lookup(key)?;
        self.promote(id);
        Some(&self.entries[id].value)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.lookup(key)?;
        self.promote(id);
        Some(&mut self.entries[id].value)
    }

    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = *self.map.get(key)?;
        Some(&self.entries[id].value)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    pub(crate) fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = *self.map.get(key)?;
        Some(self.chain[self.entries[id].bucket].frequency())
    }

    pub(crate) fn min_frequency(&self) -> Option<u64> {
        self.min_bucket.map(|bucket| self.chain[bucket].frequency())
    }

    /// Stores `key`, returning the evicted pair if room had to be made.
    /// A zero-capacity segment discards the write.
    pub(crate) fn set(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        if self.config.capacity == 0 {
            self.reject_write();
            return None;
        }
        self.store(key, value)
    }

    /// Like [`set`](Self::set), but reports a zero-capacity write as an error.
    pub(crate) fn try_set(&mut self, key: K, value: V) -> Result<Option<(K, V)>, ConfigError>
    where
        K: Clone,
    {
        if self.config.capacity == 0 {
            self.reject_write();
            return Err(ConfigError::new("cache capacity is zero; write discarded"));
        }
        Ok(self.store(key, value))
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.map.remove(key)?;
        let bucket = self.entries[id].bucket;

        self.chain[bucket].unlink(id, &mut self.entries);
        if self.chain[bucket].is_empty() {
            self.retire_bucket(bucket);
        }

        let entry = self.entries.remove(id)?;
        self.refresh_levels();
        Some(entry.value)
    }

    /// Removes and returns the eviction candidate: the least recently touched
    /// entry of the minimum bucket.
    pub(crate) fn pop(&mut self) -> Option<(K, V)> {
        let min = self.min_bucket?;
        let id = self.chain[min].detach_head(&mut self.entries)?;
        if self.chain[min].is_empty() {
            self.retire_bucket(min);
        }

        let entry = self.entries.remove(id)?;
        self.map.remove(&entry.key);
        self.metrics.core.record_eviction();
        self.refresh_levels();
        trace_event!(remaining = self.map.len(), "evicted least frequently used entry");

        Some((entry.key, entry.value))
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.entries.clear();
        self.chain.clear();
        self.min_bucket = None;
        self.refresh_levels();
    }

    /// Walks the whole structure and reports the first inconsistency found.
    pub(crate) fn check_invariants(&self) -> Result<(), InvariantError> {
        fn broken(msg: String) -> Result<(), InvariantError> {
            Err(InvariantError::new(msg))
        }

        if self.map.len() > self.config.capacity {
            return broken(format!(
                "{} entries exceed capacity {}",
                self.map.len(),
                self.config.capacity
            ));
        }
        if self.map.len() != self.entries.len() {
            return broken(format!(
                "lookup table holds {} keys but {} entries are live",
                self.map.len(),
                self.entries.len()
            ));
        }
        if self.min_bucket.is_none() && !self.map.is_empty() {
            return broken(format!("no minimum bucket while {} entries are live", self.map.len()));
        }

        let mut seen_entries = 0usize;
        let mut seen_buckets = 0usize;
        let mut prev_bucket: Option<BucketId> = None;
        let mut prev_frequency: Option<u64> = None;
        let mut cursor = self.min_bucket;

        while let Some(bucket_id) = cursor {
            if !self.chain.contains(bucket_id) {
                return broken(format!("chain links to destroyed bucket {:?}", bucket_id));
            }
            seen_buckets += 1;
            if seen_buckets > self.chain.len() {
                return broken(String::from("bucket chain contains a cycle"));
            }

            let bucket = &self.chain[bucket_id];
            let frequency = bucket.frequency();
            if bucket.prev() != prev_bucket {
                return broken(format!("bucket with frequency {} has a stale prev link", frequency));
            }
            if let Some(prev) = prev_frequency {
                if frequency <= prev {
                    return broken(format!(
                        "bucket frequencies not strictly increasing: {} after {}",
                        frequency, prev
                    ));
                }
            }
            if bucket.is_empty() {
                return broken(format!("empty bucket with frequency {} left in chain", frequency));
            }

            let mut count = 0usize;
            let mut prev_entry: Option<EntryId> = None;
            let mut entry_cursor = bucket.head();
            while let Some(entry_id) = entry_cursor {
                if !self.entries.contains(entry_id) {
                    return broken(format!("bucket {} links to a removed entry", frequency));
                }
                count += 1;
                if count > self.entries.len() {
                    return broken(format!("entry list of bucket {} contains a cycle", frequency));
                }

                let entry = &self.entries[entry_id];
                if entry.bucket != bucket_id {
                    return broken(format!(
                        "entry in bucket {} points at another bucket",
                        frequency
                    ));
                }
                if entry.prev != prev_entry {
                    return broken(format!("entry in bucket {} has a stale prev link", frequency));
                }
                if self.map.get(&entry.key) != Some(&entry_id) {
                    return broken(format!(
                        "lookup table does not resolve an entry of bucket {}",
                        frequency
                    ));
                }

                prev_entry = Some(entry_id);
                entry_cursor = entry.next;
            }

            if bucket.tail() != prev_entry {
                return broken(format!("bucket {} tail is not its last entry", frequency));
            }
            if bucket.len() != count {
                return broken(format!(
                    "bucket {} records {} entries but links {}",
                    frequency,
                    bucket.len(),
                    count
                ));
            }

            seen_entries += count;
            prev_bucket = Some(bucket_id);
            prev_frequency = Some(frequency);
            cursor = bucket.next();
        }

        if seen_entries != self.entries.len() {
            return broken(format!(
                "{} entries live but {} reachable from the chain",
                self.entries.len(),
                seen_entries
            ));
        }
        if seen_buckets != self.chain.len() {
            return broken(format!(
                "{} buckets live but {} reachable from the minimum bucket",
                self.chain.len(),
                seen_buckets
            ));
        }
        Ok(())
    }

    /// Records a miss or returns the entry handle for `key`.
    fn lookup<Q>(&mut self, key: &Q) -> Option<EntryId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key) {
            Some(&id) => {
                self.metrics.record_hit();
                Some(id)
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    /// Overwrites or inserts. Capacity is known to be non-zero.
    fn store(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        if let Some(&id) = self.map.get(&key) {
            self.entries[id].value = value;
            self.metrics.core.record_update();
            self.promote(id);
            return None;
        }

        let evicted = if self.map.len() >= self.config.capacity {
            self.pop()
        } else {
            None
        };
        self.insert_fresh(key, value);
        evicted
    }

    /// Moves `id` one frequency up, to the tail of the next bucket.
    fn promote(&mut self, id: EntryId) {
        let current = self.entries[id].bucket;

        let Some(target_frequency) = self.chain[current].frequency().checked_add(1) else {
            // Frequency saturated: only the recency position changes.
            self.chain[current].unlink(id, &mut self.entries);
            self.chain[current].append(current, id, &mut self.entries);
            return;
        };

        let target = match self.chain[current].next() {
            Some(next) if self.chain[next].frequency() == target_frequency => next,
            _ => {
                let created = self.chain.create(target_frequency);
                self.chain.insert_after(current, created);
                trace_event!(frequency = target_frequency, "bucket created");
                created
            }
        };

        self.chain[current].unlink(id, &mut self.entries);
        self.chain[target].append(target, id, &mut self.entries);

        if self.chain[current].is_empty() {
            self.retire_bucket(current);
        }

        self.metrics.record_frequency_increment(target_frequency);
        self.refresh_levels();
    }

    /// Links a new entry at frequency 0.
    fn insert_fresh(&mut self, key: K, value: V)
    where
        K: Clone,
    {
        let bucket = match self.min_bucket {
            Some(min) if self.chain[min].frequency() == 0 => min,
            current => {
                let created = self.chain.create(0);
                if let Some(min) = current {
                    self.chain.insert_before(min, created);
                }
                self.min_bucket = Some(created);
                trace_event!(frequency = 0u64, "bucket created");
                created
            }
        };

        let id = self.entries.insert(CacheEntry::new(key.clone(), value, bucket));
        self.chain[bucket].append(bucket, id, &mut self.entries);
        self.map.insert(key, id);

        self.metrics.core.record_insertion();
        self.refresh_levels();
    }

    /// Destroys an emptied bucket. If it was the minimum, its right neighbor
    /// takes over: every surviving bucket has a higher frequency.
    fn retire_bucket(&mut self, bucket: BucketId) {
        let (_, next) = self.chain.remove_from_chain(bucket);
        if self.min_bucket == Some(bucket) {
            self.min_bucket = next;
        }
        trace_event!(levels = self.chain.len(), "bucket destroyed");
    }

    fn reject_write(&mut self) {
        self.metrics.core.record_rejected_write();
        trace_event!("write discarded by zero-capacity cache");
    }

    fn refresh_levels(&mut self) {
        let min = self.min_frequency();
        let levels = self.chain.len();
        self.metrics.update_frequency_levels(levels, min);
    }
}

impl<K, V, S> fmt::Debug for LfuSegment<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.entries.len())
            .field("buckets", &self.chain.len())
            .finish()
    }
}

/// An O(1) Least Frequently Used (LFU) cache.
///
/// The cache tracks how many times each key has been read or updated and,
/// when full, evicts the key with the lowest count. Ties are broken by
/// recency: among the least frequently used keys, the one touched longest ago
/// is evicted.
///
/// New keys start at frequency 0. Every [`get`](Self::get),
/// [`get_mut`](Self::get_mut) and every [`set`](Self::set) of a key already
/// present raises that key's frequency by exactly one.
///
/// # Examples
///
/// ```
/// use bucket_lfu::LfuCache;
///
/// let mut cache = LfuCache::new(2);
/// cache.set(1, "one");
/// cache.set(2, "two");
///
/// // Key 1 is now used more often than key 2.
/// assert_eq!(cache.get(&1), Some(&"one"));
///
/// // Making room for key 3 evicts key 2.
/// assert_eq!(cache.set(3, "three"), Some((2, "two")));
/// assert_eq!(cache.get(&2), None);
/// assert_eq!(cache.get(&3), Some(&"three"));
/// ```
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    segment: LfuSegment<K, V, S>,
}

impl<K: Hash + Eq, V> LfuCache<K, V> {
    /// Creates a new LFU cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is accepted; such a cache silently discards every
    /// write. Use [`try_new`](Self::try_new) to reject it instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_lfu::LfuCache;
    ///
    /// let mut cache: LfuCache<&str, u32> = LfuCache::new(0);
    /// cache.set("a", 1);
    /// assert_eq!(cache.get(&"a"), None);
    /// ```
    pub fn new(capacity: usize) -> Self {
        LfuCache::with_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a new LFU cache, rejecting a zero capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_lfu::LfuCache;
    ///
    /// assert!(LfuCache::<u64, u64>::try_new(16).is_ok());
    /// assert!(LfuCache::<u64, u64>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        let config = LfuCacheConfig { capacity };
        config.validate()?;
        Ok(LfuCache::init(config, None))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates a new LFU cache from a configuration.
    ///
    /// Uses `hasher` when given, otherwise `S::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_lfu::config::LfuCacheConfig;
    /// use bucket_lfu::LfuCache;
    ///
    /// let config = LfuCacheConfig { capacity: 100 };
    /// let cache: LfuCache<String, Vec<u8>> = LfuCache::init(config, None);
    /// assert_eq!(cache.cap(), 100);
    /// ```
    pub fn init(config: LfuCacheConfig, hasher: Option<S>) -> Self
    where
        S: Default,
    {
        LfuCache {
            segment: LfuSegment::init(config, hasher.unwrap_or_default()),
        }
    }

    /// Creates a new LFU cache with the specified capacity and hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_lfu::LfuCache;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let cache: LfuCache<&str, u32, _> = LfuCache::with_hasher(10, RandomState::new());
    /// assert!(cache.is_empty());
    /// ```
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        LfuCache {
            segment: LfuSegment::init(LfuCacheConfig { capacity }, hash_builder),
        }
    }

    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn cap(&self) -> usize {
        self.segment.cap()
    }

    /// Returns the current number of key-value pairs in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Returns a reference to the value for `key` and counts the access.
    ///
    /// The key may be any borrowed form of the cache's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Returns a mutable reference to the value for `key` and counts the
    /// access.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns a reference to the value for `key` without counting an access.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(2);
    /// cache.set("a", 1);
    /// assert_eq!(cache.peek(&"a"), Some(&1));
    /// assert_eq!(cache.frequency(&"a"), Some(0));
    /// ```
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.peek(key)
    }

    /// Returns `true` if `key` is cached. Does not count an access.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains(key)
    }

    /// Returns how many times `key` has been accessed since it was inserted.
    #[inline]
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.frequency(key)
    }

    /// Returns the lowest access count among cached keys, or `None` when the
    /// cache is empty.
    #[inline]
    pub fn min_frequency(&self) -> Option<u64> {
        self.segment.min_frequency()
    }

    /// Inserts or updates a key-value pair.
    ///
    /// - If `key` is present its value is replaced and the write counts as an
    ///   access.
    /// - Otherwise, if the cache is full, the least frequently used entry is
    ///   evicted first and returned.
    /// - The new key starts with frequency 0.
    ///
    /// On a zero-capacity cache nothing is stored and `None` is returned.
    #[inline]
    pub fn set(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        self.segment.set(key, value)
    }

    /// Like [`set`](Self::set), but a write to a zero-capacity cache is
    /// reported as an error instead of being silently discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(0);
    /// assert!(cache.try_set("a", 1).is_err());
    ///
    /// let mut cache = LfuCache::new(1);
    /// assert_eq!(cache.try_set("a", 1), Ok(None));
    /// assert_eq!(cache.try_set("b", 2), Ok(Some(("a", 1))));
    /// ```
    #[inline]
    pub fn try_set(&mut self, key: K, value: V) -> Result<Option<(K, V)>, ConfigError>
    where
        K: Clone,
    {
        self.segment.try_set(key, value)
    }

    /// Removes a key from the cache, returning its value if it was present.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key)
    }

    /// Removes and returns the eviction candidate.
    ///
    /// This is the entry [`set`](Self::set) would evict next: the least
    /// frequently used one, least recently touched among ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(2);
    /// cache.set("a", 1);
    /// cache.set("b", 2);
    /// cache.get(&"a");
    ///
    /// assert_eq!(cache.pop(), Some(("b", 2)));
    /// assert_eq!(cache.pop(), Some(("a", 1)));
    /// assert_eq!(cache.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.segment.pop()
    }

    /// Clears the cache, removing all key-value pairs.
    #[inline]
    pub fn clear(&mut self) {
        self.segment.clear()
    }

    /// Audits the bucket chain, every entry list and the lookup table.
    ///
    /// Runs in O(n). Intended for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.segment.check_invariants()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("segment", &self.segment)
            .finish()
    }
}

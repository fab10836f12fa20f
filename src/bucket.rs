//! Frequency Buckets
//!
//! A `FrequencyBucket` groups every live entry that has been accessed the
//! same number of times. Buckets form a doubly linked chain in strictly
//! increasing frequency order; each bucket in turn owns a doubly linked list
//! of entries ordered by recency:
//!
//! ```text
//!   min bucket
//!       │
//!       ▼
//!   ┌────────┐  next   ┌────────┐  next   ┌────────┐
//!   │ freq 0 │ ──────▶ │ freq 1 │ ──────▶ │ freq 4 │ ──▶ None
//!   │        │ ◀────── │        │ ◀────── │        │
//!   └────────┘  prev   └────────┘  prev   └────────┘
//!    head: a            head: d            head: f
//!    tail: c            tail: e            tail: f
//! ```
//!
//! Heads are the least recently touched entries of their frequency, so the
//! head of the minimum bucket is always the eviction victim.
//!
//! Every operation here is a constant number of handle reassignments. The
//! list surgery spells out the sole / head / tail / interior cases
//! explicitly rather than relying on sentinels.

use crate::entry::{CacheEntry, EntryId};
use crate::slab::{Slab, SlotKey};
use core::fmt;
use core::ops::{Index, IndexMut};

/// Arena holding every cache entry.
pub(crate) type EntrySlab<K, V> = Slab<EntryId, CacheEntry<K, V>>;

/// Handle to a [`FrequencyBucket`] stored in a [`BucketChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BucketId(usize);

impl SlotKey for BucketId {
    #[inline]
    fn from_index(index: usize) -> Self {
        BucketId(index)
    }

    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

/// All entries sharing one access frequency, ordered least to most recently
/// touched.
#[derive(Debug)]
pub(crate) struct FrequencyBucket {
    frequency: u64,
    prev: Option<BucketId>,
    next: Option<BucketId>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
}

impl FrequencyBucket {
    /// Creates an empty, unchained bucket.
    pub(crate) fn new(frequency: u64) -> Self {
        FrequencyBucket {
            frequency,
            prev: None,
            next: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn frequency(&self) -> u64 {
        self.frequency
    }

    #[inline]
    pub(crate) fn prev(&self) -> Option<BucketId> {
        self.prev
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<BucketId> {
        self.next
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<EntryId> {
        self.head
    }

    #[inline]
    pub(crate) fn tail(&self) -> Option<EntryId> {
        self.tail
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Links `id` at the tail (most recently touched position) and points
    /// the entry's back-reference at `me`, which must be this bucket's handle.
    pub(crate) fn append<K, V>(
        &mut self,
        me: BucketId,
        id: EntryId,
        entries: &mut EntrySlab<K, V>,
    ) {
        debug_assert!(entries[id].is_detached(), "append of a linked entry");

        let entry = &mut entries[id];
        entry.bucket = me;
        entry.prev = self.tail;
        entry.next = None;

        match self.tail {
            None => self.head = Some(id),
            Some(tail) => entries[tail].next = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Unlinks and returns the head (least recently touched) entry.
    pub(crate) fn detach_head<K, V>(&mut self, entries: &mut EntrySlab<K, V>) -> Option<EntryId> {
        let head = self.head?;

        match entries[head].next {
            // Sole member: the list becomes empty.
            None => {
                self.head = None;
                self.tail = None;
            }
            Some(next) => {
                entries[next].prev = None;
                self.head = Some(next);
            }
        }

        entries[head].clear_links();
        self.len -= 1;
        Some(head)
    }

    /// Unlinks `id`, which must currently belong to this bucket, using only
    /// the entry's own neighbor links.
    pub(crate) fn unlink<K, V>(&mut self, id: EntryId, entries: &mut EntrySlab<K, V>) {
        let (prev, next) = {
            let entry = &entries[id];
            (entry.prev, entry.next)
        };

        match (prev, next) {
            (None, None) => {
                debug_assert_eq!(self.head, Some(id));
                self.head = None;
                self.tail = None;
            }
            (None, Some(next)) => {
                debug_assert_eq!(self.head, Some(id));
                entries[next].prev = None;
                self.head = Some(next);
            }
            (Some(prev), None) => {
                debug_assert_eq!(self.tail, Some(id));
                entries[prev].next = None;
                self.tail = Some(prev);
            }
            (Some(prev), Some(next)) => {
                entries[prev].next = Some(next);
                entries[next].prev = Some(prev);
            }
        }

        entries[id].clear_links();
        self.len -= 1;
    }
}

/// Owner of every frequency bucket and of the chain linking them.
pub(crate) struct BucketChain {
    buckets: Slab<BucketId, FrequencyBucket>,
}

impl BucketChain {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        BucketChain {
            buckets: Slab::with_capacity(capacity),
        }
    }

    /// Allocates an empty bucket that is not yet part of the chain.
    pub(crate) fn create(&mut self, frequency: u64) -> BucketId {
        self.buckets.insert(FrequencyBucket::new(frequency))
    }

    /// Splices the unchained bucket `new` directly after `anchor`.
    pub(crate) fn insert_after(&mut self, anchor: BucketId, new: BucketId) {
        let next = self.buckets[anchor].next;
        debug_assert!(self.buckets[new].frequency > self.buckets[anchor].frequency);
        debug_assert!(
            next.map_or(true, |n| self.buckets[n].frequency > self.buckets[new].frequency)
        );

        let bucket = &mut self.buckets[new];
        bucket.prev = Some(anchor);
        bucket.next = next;

        if let Some(next) = next {
            self.buckets[next].prev = Some(new);
        }
        self.buckets[anchor].next = Some(new);
    }

    /// Splices the unchained bucket `new` directly before `anchor`.
    pub(crate) fn insert_before(&mut self, anchor: BucketId, new: BucketId) {
        let prev = self.buckets[anchor].prev;
        debug_assert!(self.buckets[new].frequency < self.buckets[anchor].frequency);
        debug_assert!(
            prev.map_or(true, |p| self.buckets[p].frequency < self.buckets[new].frequency)
        );

        let bucket = &mut self.buckets[new];
        bucket.prev = prev;
        bucket.next = Some(anchor);

        if let Some(prev) = prev {
            self.buckets[prev].next = Some(new);
        }
        self.buckets[anchor].prev = Some(new);
    }

    /// Splices `id` out of the chain, destroys it, and returns its former
    /// `(prev, next)` neighbors, which are now linked to each other.
    pub(crate) fn remove_from_chain(
        &mut self,
        id: BucketId,
    ) -> (Option<BucketId>, Option<BucketId>) {
        let (prev, next) = {
            let bucket = &self.buckets[id];
            debug_assert!(bucket.is_empty(), "removing a bucket that still holds entries");
            (bucket.prev, bucket.next)
        };

        if let Some(prev) = prev {
            self.buckets[prev].next = next;
        }
        if let Some(next) = next {
            self.buckets[next].prev = prev;
        }

        self.buckets.remove(id);
        (prev, next)
    }

    #[inline]
    pub(crate) fn contains(&self, id: BucketId) -> bool {
        self.buckets.contains(id)
    }

    /// Number of live buckets (distinct frequencies in use).
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
    }
}

impl Index<BucketId> for BucketChain {
    type Output = FrequencyBucket;

    #[inline]
    fn index(&self, id: BucketId) -> &FrequencyBucket {
        &self.buckets[id]
    }
}

impl IndexMut<BucketId> for BucketChain {
    #[inline]
    fn index_mut(&mut self, id: BucketId) -> &mut FrequencyBucket {
        &mut self.buckets[id]
    }
}

impl fmt::Debug for BucketChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketChain")
            .field("buckets", &self.buckets.len())
            .finish()
    }
}

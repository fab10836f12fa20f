//! Cache Entry
//!
//! One `CacheEntry` exists per live key. It carries the key and value plus
//! the structural links that place it inside its frequency bucket:
//!
//! ```text
//!   FrequencyBucket (freq = 3)
//!     head ──▶ [entry a] ◀──▶ [entry b] ◀──▶ [entry c] ◀── tail
//!              least recent                   most recent
//!                  │               │               │
//!                  └─────── bucket back-reference ─┘
//! ```
//!
//! The back-reference and the neighbor links are handles into the cache's
//! arenas, not owners. The owning bucket drives every relink; the entry only
//! remembers where it currently sits so that unlinking needs no search.
//!
//! An entry does not store its frequency. The frequency belongs to the
//! bucket the entry is linked into.

use crate::bucket::BucketId;
use crate::slab::SlotKey;
use core::fmt;

/// Handle to a [`CacheEntry`] stored in the cache's entry arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntryId(usize);

impl SlotKey for EntryId {
    #[inline]
    fn from_index(index: usize) -> Self {
        EntryId(index)
    }

    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

/// A cached key/value pair and its position within a frequency bucket.
pub(crate) struct CacheEntry<K, V> {
    /// The cached key
    pub(crate) key: K,

    /// The cached value
    pub(crate) value: V,

    /// Bucket this entry is linked into. Only meaningful while linked;
    /// `FrequencyBucket::append` rewrites it on every move.
    pub(crate) bucket: BucketId,

    /// Neighbor toward the bucket head (less recently touched)
    pub(crate) prev: Option<EntryId>,

    /// Neighbor toward the bucket tail (more recently touched)
    pub(crate) next: Option<EntryId>,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates an unlinked entry destined for `bucket`.
    #[inline]
    pub(crate) fn new(key: K, value: V, bucket: BucketId) -> Self {
        CacheEntry {
            key,
            value,
            bucket,
            prev: None,
            next: None,
        }
    }

    /// Clears both neighbor links.
    #[inline]
    pub(crate) fn clear_links(&mut self) {
        self.prev = None;
        self.next = None;
    }

    /// Returns `true` if the entry has no neighbors on either side.
    #[inline]
    pub(crate) fn is_detached(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("bucket", &self.bucket)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_starts_detached() {
        let entry = CacheEntry::new("k", 1, BucketId::from_index(3));
        assert!(entry.is_detached());
        assert_eq!(entry.bucket, BucketId::from_index(3));
        assert_eq!(entry.key, "k");
        assert_eq!(entry.value, 1);
    }

    #[test]
    fn test_entry_clear_links() {
        let mut entry = CacheEntry::new(1u32, 2u32, BucketId::from_index(0));
        entry.prev = Some(EntryId::from_index(4));
        entry.next = Some(EntryId::from_index(5));
        assert!(!entry.is_detached());

        entry.clear_links();
        assert!(entry.is_detached());
    }
}

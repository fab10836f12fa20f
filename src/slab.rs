//! Slot arena addressed by typed handles.
//!
//! Entries and frequency buckets reference each other in both directions
//! (entry → owning bucket, bucket → head/tail entry, neighbor links on both
//! levels). Storing them in arenas and linking them by index keeps every
//! relink a plain assignment, with no shared ownership and no `unsafe`.
//!
//! Vacated slots are recycled through a free list, so a cache running at
//! steady state stops growing its arenas once they have reached capacity.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

/// A `Copy` handle that names one slot of a [`Slab`].
pub(crate) trait SlotKey: Copy + Eq {
    fn from_index(index: usize) -> Self;
    fn index(self) -> usize;
}

/// Vector-backed arena with slot reuse.
///
/// Handles stay valid until the slot is removed. Indexing a vacated slot
/// panics; the cache never holds a handle past its removal.
pub(crate) struct Slab<I, T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
    len: usize,
    _key: PhantomData<I>,
}

impl<I: SlotKey, T> Slab<I, T> {
    /// Creates an arena with room for `capacity` live values before any
    /// reallocation.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Slab {
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            len: 0,
            _key: PhantomData,
        }
    }

    /// Stores `value`, reusing a vacated slot when one is available.
    pub(crate) fn insert(&mut self, value: T) -> I {
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(value);
                index
            }
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            }
        };
        self.len += 1;
        I::from_index(index)
    }

    /// Vacates the slot and hands back its value.
    pub(crate) fn remove(&mut self, id: I) -> Option<T> {
        let value = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id.index());
        self.len -= 1;
        Some(value)
    }

    #[inline]
    pub(crate) fn get(&self, id: I) -> Option<&T> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn contains(&self, id: I) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Drops every value. Reserved memory is kept.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<I: SlotKey, T> Index<I> for Slab<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, id: I) -> &T {
        match self.slots.get(id.index()) {
            Some(Some(value)) => value,
            _ => panic!("slab handle {} refers to a vacant slot", id.index()),
        }
    }
}

impl<I: SlotKey, T> IndexMut<I> for Slab<I, T> {
    #[inline]
    fn index_mut(&mut self, id: I) -> &mut T {
        match self.slots.get_mut(id.index()) {
            Some(Some(value)) => value,
            _ => panic!("slab handle {} refers to a vacant slot", id.index()),
        }
    }
}

impl<I, T> fmt::Debug for Slab<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slab")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .field("free", &self.free.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Id(usize);

    impl SlotKey for Id {
        fn from_index(index: usize) -> Self {
            Id(index)
        }

        fn index(self) -> usize {
            self.0
        }
    }

    #[test]
    fn test_slab_insert_remove_reuse() {
        let mut slab: Slab<Id, &str> = Slab::with_capacity(4);
        let a = slab.insert("a");
        let b = slab.insert("b");
        assert_eq!(slab.len(), 2);
        assert_eq!(slab[a], "a");
        assert_eq!(slab[b], "b");

        assert_eq!(slab.remove(a), Some("a"));
        assert_eq!(slab.remove(a), None);
        assert!(!slab.contains(a));
        assert_eq!(slab.len(), 1);

        // The vacated slot is handed out again before the arena grows.
        let c = slab.insert("c");
        assert_eq!(c, a);
        assert_eq!(slab.get(c), Some(&"c"));
        assert_eq!(slab.len(), 2);
    }

    #[test]
    fn test_slab_index_mut() {
        let mut slab: Slab<Id, i32> = Slab::with_capacity(1);
        let id = slab.insert(1);
        slab[id] += 41;
        assert_eq!(slab[id], 42);
    }

    #[test]
    fn test_slab_clear() {
        let mut slab: Slab<Id, i32> = Slab::with_capacity(2);
        let id = slab.insert(1);
        slab.insert(2);
        slab.clear();
        assert_eq!(slab.len(), 0);
        assert!(slab.get(id).is_none());
        assert_eq!(slab.insert(3), Id(0));
    }

    #[test]
    #[should_panic(expected = "vacant slot")]
    fn test_slab_index_vacant_panics() {
        let mut slab: Slab<Id, i32> = Slab::with_capacity(1);
        let id = slab.insert(1);
        slab.remove(id);
        let _ = slab[id];
    }
}

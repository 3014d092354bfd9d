//! Generational slot arena backing the node chain.
//!
//! Nodes live in a growable `Vec` of slots. Vacant slots form an intrusive
//! LIFO free-list threaded through the vector, so removal and reuse are O(1)
//! and no per-node allocation ever happens after a slot exists.
//!
//! Each slot carries a generation counter, bumped on every removal. A
//! [`Handle`] captures the generation it was minted with, so a handle whose
//! element was removed reads as stale even if the slot has since been reused
//! by a newer element.

/// Sentinel index meaning "no slot" / "no link".
pub(crate) const NONE: u32 = u32::MAX;

/// A stable reference to one element of a sequence.
///
/// Handles are minted by insertion (`push_front`, `push_back`,
/// `insert_before`, `insert_after`) and stay valid until the element they
/// name is removed. Removing *other* elements, inserting anywhere, or
/// mutating elements in place never invalidates a handle.
///
/// A stale handle is detected, not undefined behavior: lookups return
/// `None` and insertion relative to it panics.
///
/// A handle is only meaningful for the sequence that minted it. Presenting
/// it to a different sequence is not detected and may resolve to an
/// arbitrary element there; keeping handles with their sequence is the
/// caller's responsibility (same discipline as the `slab` crate's keys).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

struct Slot<E> {
    generation: u32,
    entry: Entry<E>,
}

enum Entry<E> {
    Occupied(E),
    Vacant { next_free: u32 },
}

/// Growable slot storage with generation-checked indices.
///
/// Link fields in stored elements refer to slots by raw `u32` index with
/// [`NONE`] as the null link; only occupied slots may ever be linked to.
pub(crate) struct Arena<E> {
    slots: Vec<Slot<E>>,
    free_head: u32,
    len: usize,
}

impl<E> Arena<E> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: NONE,
            len: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Inserts a value, returning the index of its slot.
    ///
    /// Reuses the most recently freed slot if one exists, otherwise grows.
    pub(crate) fn insert(&mut self, value: E) -> u32 {
        self.len += 1;

        if self.free_head != NONE {
            let index = self.free_head;
            let slot = &mut self.slots[index as usize];
            match slot.entry {
                Entry::Vacant { next_free } => self.free_head = next_free,
                Entry::Occupied(_) => unreachable!("occupied slot on free-list"),
            }
            slot.entry = Entry::Occupied(value);
            return index;
        }

        let index = self.slots.len();
        assert!(index < NONE as usize, "slot index space exhausted");
        self.slots.push(Slot {
            generation: 0,
            entry: Entry::Occupied(value),
        });
        index as u32
    }

    /// Removes the value at `index` and pushes the slot onto the free-list.
    ///
    /// The generation bump is what invalidates outstanding handles.
    /// Callers must pass an occupied index (a chain invariant).
    pub(crate) fn remove(&mut self, index: u32) -> E {
        let slot = &mut self.slots[index as usize];
        let entry = std::mem::replace(
            &mut slot.entry,
            Entry::Vacant {
                next_free: self.free_head,
            },
        );
        match entry {
            Entry::Occupied(value) => {
                slot.generation = slot.generation.wrapping_add(1);
                self.free_head = index;
                self.len -= 1;
                value
            }
            Entry::Vacant { .. } => unreachable!("link to vacant slot"),
        }
    }

    /// Drops every occupied value and frees all slots.
    ///
    /// Slots are retained (not truncated) so their generation counters
    /// survive; handles minted before the clear stay detectably stale.
    pub(crate) fn clear(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if let Entry::Occupied(_) = slot.entry {
                slot.entry = Entry::Vacant {
                    next_free: self.free_head,
                };
                slot.generation = slot.generation.wrapping_add(1);
                self.free_head = i as u32;
            }
        }
        self.len = 0;
    }

    /// Mints a handle for an occupied slot.
    #[inline]
    pub(crate) fn handle(&self, index: u32) -> Handle {
        debug_assert!(matches!(
            self.slots[index as usize].entry,
            Entry::Occupied(_)
        ));
        Handle {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    /// Resolves a handle to its slot index, or `None` if the handle is
    /// stale (element removed, possibly slot since reused).
    #[inline]
    pub(crate) fn resolve(&self, handle: Handle) -> Option<u32> {
        let slot = self.slots.get(handle.index as usize)?;
        match slot.entry {
            Entry::Occupied(_) if slot.generation == handle.generation => Some(handle.index),
            _ => None,
        }
    }

    /// Returns the element in an occupied slot.
    ///
    /// Only reachable through chain links or resolved handles, so a vacant
    /// slot here means the chain is corrupt.
    #[inline]
    pub(crate) fn occupied(&self, index: u32) -> &E {
        match &self.slots[index as usize].entry {
            Entry::Occupied(value) => value,
            Entry::Vacant { .. } => unreachable!("link to vacant slot"),
        }
    }

    /// Mutable counterpart of [`occupied`](Self::occupied).
    #[inline]
    pub(crate) fn occupied_mut(&mut self, index: u32) -> &mut E {
        match &mut self.slots[index as usize].entry {
            Entry::Occupied(value) => value,
            Entry::Vacant { .. } => unreachable!("link to vacant slot"),
        }
    }
}

//! Doubly-linked sequence with arena-backed node storage.
//!
//! [`LinkedSequence`] keeps its nodes in a generational slot arena and
//! threads them together with index links. This gives list semantics
//! (O(1) push/pop at both ends, O(1) insert/remove at any held position)
//! without any per-node heap allocation or pointer ownership to get wrong:
//! the arena owns every node, links are plain indices, and removal is a
//! relink plus a slot free.
//!
//! # Handle stability
//!
//! Every insertion returns a [`Handle`] naming the new element. Handles obey
//! a narrow invalidation contract:
//!
//! - removing an element invalidates *only* that element's handle;
//! - every other operation short of [`clear`](LinkedSequence::clear) and
//!   drop leaves existing handles valid;
//! - a stale handle is detected (generation check), never undefined
//!   behavior. Lookups with a stale handle return `None`; inserting
//!   relative to one panics.
//!
//! # Example
//!
//! ```
//! use linkseq::LinkedSequence;
//!
//! let mut seq = LinkedSequence::new();
//! let _a = seq.push_back(1);
//! let c = seq.push_back(3);
//! seq.insert_before(c, 2);
//!
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! seq.remove(c);
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use crate::arena::{Arena, Handle, NONE};
use crate::cursor::{Cursor, CursorMut};
use crate::iter::{Drain, IntoIter, Iter, IterMut};

/// A node in the chain: one element plus its neighbor links.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: u32,
    pub(crate) next: u32,
}

impl<T> Node<T> {
    #[inline]
    fn unlinked(value: T) -> Self {
        Self {
            value,
            prev: NONE,
            next: NONE,
        }
    }
}

/// A doubly-linked, double-ended sequence.
///
/// Elements are stored in insertion order between a front and a back.
/// Pushes and pops at either end, and insertion/removal at any position
/// named by a [`Handle`], are O(1). [`len`](Self::len) is O(1) as well,
/// maintained incrementally.
///
/// Traversal is available three ways: `Iterator`-based ([`iter`](Self::iter)
/// and friends), handle navigation ([`next_handle`](Self::next_handle) /
/// [`prev_handle`](Self::prev_handle)), and [`Cursor`]s, which model a
/// bidirectional position including the one-past-the-end sentinel.
///
/// # Example
///
/// ```
/// use linkseq::LinkedSequence;
///
/// let mut seq: LinkedSequence<&str> = LinkedSequence::new();
/// seq.push_back("b");
/// seq.push_front("a");
/// seq.push_back("c");
///
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.front(), Some(&"a"));
/// assert_eq!(seq.back(), Some(&"c"));
/// ```
pub struct LinkedSequence<T> {
    pub(crate) arena: Arena<Node<T>>,
    pub(crate) head: u32,
    pub(crate) tail: u32,
}

impl<T> LinkedSequence<T> {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: NONE,
            tail: NONE,
        }
    }

    /// Returns the number of elements.
    ///
    /// Every occupied arena slot is on the chain, so the arena's occupancy
    /// count is the sequence length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ========================================================================
    // Link operations (relink only, no alloc/free)
    // ========================================================================

    fn link_front(&mut self, idx: u32) {
        let node = self.arena.occupied_mut(idx);
        node.next = self.head;
        node.prev = NONE;

        if self.head != NONE {
            self.arena.occupied_mut(self.head).prev = idx;
        } else {
            self.tail = idx;
        }

        self.head = idx;
    }

    fn link_back(&mut self, idx: u32) {
        let node = self.arena.occupied_mut(idx);
        node.prev = self.tail;
        node.next = NONE;

        if self.tail != NONE {
            self.arena.occupied_mut(self.tail).next = idx;
        } else {
            self.head = idx;
        }

        self.tail = idx;
    }

    pub(crate) fn link_before(&mut self, before: u32, idx: u32) {
        let prev = self.arena.occupied(before).prev;
        let node = self.arena.occupied_mut(idx);
        node.next = before;
        node.prev = prev;

        self.arena.occupied_mut(before).prev = idx;

        if prev != NONE {
            self.arena.occupied_mut(prev).next = idx;
        } else {
            self.head = idx;
        }
    }

    pub(crate) fn link_after(&mut self, after: u32, idx: u32) {
        let next = self.arena.occupied(after).next;
        let node = self.arena.occupied_mut(idx);
        node.prev = after;
        node.next = next;

        self.arena.occupied_mut(after).next = idx;

        if next != NONE {
            self.arena.occupied_mut(next).prev = idx;
        } else {
            self.tail = idx;
        }
    }

    pub(crate) fn unlink(&mut self, idx: u32) {
        let node = self.arena.occupied(idx);
        let prev = node.prev;
        let next = node.next;

        if prev != NONE {
            self.arena.occupied_mut(prev).next = next;
        } else {
            self.head = next;
        }

        if next != NONE {
            self.arena.occupied_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Inserts a value at the front. O(1).
    ///
    /// Returns a handle to the new element.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Handle {
        let idx = self.arena.insert(Node::unlinked(value));
        self.link_front(idx);
        self.arena.handle(idx)
    }

    /// Inserts a value at the back. O(1).
    ///
    /// Returns a handle to the new element.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Handle {
        let idx = self.arena.insert(Node::unlinked(value));
        self.link_back(idx);
        self.arena.handle(idx)
    }

    /// Removes and returns the front element, or `None` if empty. O(1).
    ///
    /// Invalidates only the removed element's handle.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == NONE {
            return None;
        }
        let idx = self.head;
        self.unlink(idx);
        Some(self.arena.remove(idx).value)
    }

    /// Removes and returns the back element, or `None` if empty. O(1).
    ///
    /// Invalidates only the removed element's handle.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NONE {
            return None;
        }
        let idx = self.tail;
        self.unlink(idx);
        Some(self.arena.remove(idx).value)
    }

    /// Inserts `value` immediately before the element named by `position`.
    /// O(1).
    ///
    /// Returns a handle to the new element. Handles to other elements
    /// remain valid.
    ///
    /// # Panics
    ///
    /// Panics if `position` is stale.
    pub fn insert_before(&mut self, position: Handle, value: T) -> Handle {
        let before = self.arena.resolve(position).expect("stale handle");
        let idx = self.arena.insert(Node::unlinked(value));
        self.link_before(before, idx);
        self.arena.handle(idx)
    }

    /// Inserts `value` immediately after the element named by `position`.
    /// O(1).
    ///
    /// Returns a handle to the new element. Handles to other elements
    /// remain valid.
    ///
    /// # Panics
    ///
    /// Panics if `position` is stale.
    pub fn insert_after(&mut self, position: Handle, value: T) -> Handle {
        let after = self.arena.resolve(position).expect("stale handle");
        let idx = self.arena.insert(Node::unlinked(value));
        self.link_after(after, idx);
        self.arena.handle(idx)
    }

    /// Removes the element named by `position` and returns it. O(1).
    ///
    /// Returns `None` if the handle is stale. Invalidates only `position`;
    /// neighbors are relinked and their handles stay valid.
    pub fn remove(&mut self, position: Handle) -> Option<T> {
        let idx = self.arena.resolve(position)?;
        self.unlink(idx);
        Some(self.arena.remove(idx).value)
    }

    /// Removes every element. O(n).
    ///
    /// All outstanding handles become stale.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NONE;
        self.tail = NONE;
    }

    /// Removes all elements, yielding them front to back.
    ///
    /// The sequence is empty after the iterator is dropped, even if it was
    /// not fully consumed.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { seq: self }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head == NONE {
            return None;
        }
        Some(&self.arena.occupied(self.head).value)
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head == NONE {
            return None;
        }
        Some(&mut self.arena.occupied_mut(self.head).value)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail == NONE {
            return None;
        }
        Some(&self.arena.occupied(self.tail).value)
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail == NONE {
            return None;
        }
        Some(&mut self.arena.occupied_mut(self.tail).value)
    }

    /// Returns a reference to the element named by `position`, or `None`
    /// if the handle is stale.
    #[inline]
    pub fn get(&self, position: Handle) -> Option<&T> {
        let idx = self.arena.resolve(position)?;
        Some(&self.arena.occupied(idx).value)
    }

    /// Returns a mutable reference to the element named by `position`, or
    /// `None` if the handle is stale.
    #[inline]
    pub fn get_mut(&mut self, position: Handle) -> Option<&mut T> {
        let idx = self.arena.resolve(position)?;
        Some(&mut self.arena.occupied_mut(idx).value)
    }

    /// Returns `true` if `position` still names a live element.
    #[inline]
    pub fn contains(&self, position: Handle) -> bool {
        self.arena.resolve(position).is_some()
    }

    // ========================================================================
    // Handle navigation
    // ========================================================================

    /// Handle of the front element, or `None` if empty.
    #[inline]
    pub fn first_handle(&self) -> Option<Handle> {
        if self.head == NONE {
            return None;
        }
        Some(self.arena.handle(self.head))
    }

    /// Handle of the back element, or `None` if empty.
    #[inline]
    pub fn last_handle(&self) -> Option<Handle> {
        if self.tail == NONE {
            return None;
        }
        Some(self.arena.handle(self.tail))
    }

    /// Handle of the element after `position`.
    ///
    /// Returns `None` if `position` is the back element or stale.
    #[inline]
    pub fn next_handle(&self, position: Handle) -> Option<Handle> {
        let idx = self.arena.resolve(position)?;
        let next = self.arena.occupied(idx).next;
        if next == NONE {
            return None;
        }
        Some(self.arena.handle(next))
    }

    /// Handle of the element before `position`.
    ///
    /// Returns `None` if `position` is the front element or stale.
    #[inline]
    pub fn prev_handle(&self, position: Handle) -> Option<Handle> {
        let idx = self.arena.resolve(position)?;
        let prev = self.arena.occupied(idx).prev;
        if prev == NONE {
            return None;
        }
        Some(self.arena.handle(prev))
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns an iterator over mutable references, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back, remaining) = (self.head, self.tail, self.len());
        IterMut {
            arena: &mut self.arena,
            front,
            back,
            remaining,
        }
    }

    /// Returns a cursor at the front element (at the end sentinel if empty).
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor {
            seq: self,
            current: self.head,
        }
    }

    /// Returns a cursor at the back element (at the end sentinel if empty).
    #[inline]
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor {
            seq: self,
            current: self.tail,
        }
    }

    /// Returns a cursor at the end sentinel.
    ///
    /// `move_prev` from here reaches the back element.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor {
            seq: self,
            current: NONE,
        }
    }

    /// Returns a cursor at the element named by `position`, or `None` if
    /// the handle is stale.
    #[inline]
    pub fn cursor_at(&self, position: Handle) -> Option<Cursor<'_, T>> {
        let idx = self.arena.resolve(position)?;
        Some(Cursor {
            seq: self,
            current: idx,
        })
    }

    /// Returns a mutable cursor at the front element (at the end sentinel
    /// if empty).
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        CursorMut {
            seq: self,
            current: head,
        }
    }

    /// Returns a mutable cursor at the back element (at the end sentinel
    /// if empty).
    #[inline]
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let tail = self.tail;
        CursorMut {
            seq: self,
            current: tail,
        }
    }

    /// Returns a mutable cursor at the end sentinel.
    ///
    /// `insert_before` from here appends.
    #[inline]
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            seq: self,
            current: NONE,
        }
    }

    /// Returns a mutable cursor at the element named by `position`, or
    /// `None` if the handle is stale.
    #[inline]
    pub fn cursor_at_mut(&mut self, position: Handle) -> Option<CursorMut<'_, T>> {
        let idx = self.arena.resolve(position)?;
        Some(CursorMut {
            seq: self,
            current: idx,
        })
    }

    /// Walks the chain both ways and checks it against the bookkeeping.
    #[cfg(test)]
    pub(crate) fn assert_chain(&self) {
        let mut forward = Vec::new();
        let mut idx = self.head;
        while idx != NONE {
            forward.push(idx);
            idx = self.arena.occupied(idx).next;
        }
        assert_eq!(forward.len(), self.len(), "forward walk vs len");
        assert_eq!(forward.last().copied().unwrap_or(NONE), self.tail);

        let mut backward = Vec::new();
        let mut idx = self.tail;
        while idx != NONE {
            backward.push(idx);
            idx = self.arena.occupied(idx).prev;
        }
        backward.reverse();
        assert_eq!(forward, backward, "backward walk is not the reverse");

        if let Some(&first) = forward.first() {
            assert_eq!(self.arena.occupied(first).prev, NONE);
        }
        if let Some(&last) = forward.last() {
            assert_eq!(self.arena.occupied(last).next, NONE);
        }
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    /// Deep copy: fresh nodes holding clones of each element, in order.
    /// The copy shares no storage with the source.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.extend(self.iter().cloned());
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    /// Length check first, then pairwise comparison in traversal order,
    /// short-circuiting on the first mismatch.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: Hash> Hash for LinkedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Chained append: pushes `value` to the back and yields the sequence.
///
/// ```
/// use linkseq::LinkedSequence;
///
/// let seq = LinkedSequence::new() + 1 + 2 + 3;
/// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
impl<T> Add<T> for LinkedSequence<T> {
    type Output = Self;

    fn add(mut self, value: T) -> Self {
        self.push_back(value);
        self
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { seq: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(seq: &LinkedSequence<u64>) -> Vec<u64> {
        seq.iter().copied().collect()
    }

    #[test]
    fn new_is_empty() {
        let seq: LinkedSequence<u64> = LinkedSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.front().is_none());
        assert!(seq.back().is_none());
        assert!(seq.first_handle().is_none());
        assert!(seq.last_handle().is_none());
    }

    #[test]
    fn push_back_single() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);

        assert_eq!(seq.len(), 1);
        assert_eq!(seq.front(), Some(&1));
        assert_eq!(seq.back(), Some(&1));
        assert_eq!(seq.get(a), Some(&1));
        assert_eq!(seq.first_handle(), Some(a));
        assert_eq!(seq.last_handle(), Some(a));
        seq.assert_chain();
    }

    #[test]
    fn push_back_multiple() {
        let mut seq = LinkedSequence::new();

        seq.push_back(1);
        seq.push_back(2);
        seq.push_back(3);

        assert_eq!(seq.len(), 3);
        assert_eq!(values(&seq), vec![1, 2, 3]);
        assert_eq!(seq.back(), Some(&3));
        seq.assert_chain();
    }

    #[test]
    fn push_front_multiple() {
        let mut seq = LinkedSequence::new();

        seq.push_front(1);
        seq.push_front(2);
        seq.push_front(3);

        assert_eq!(values(&seq), vec![3, 2, 1]);
        assert_eq!(seq.front(), Some(&3));
        seq.assert_chain();
    }

    #[test]
    fn pop_front() {
        let mut seq = LinkedSequence::new();

        seq.push_back(1);
        seq.push_back(2);
        seq.push_back(3);

        assert_eq!(seq.pop_front(), Some(1));
        assert_eq!(seq.len(), 2);
        seq.assert_chain();

        assert_eq!(seq.pop_front(), Some(2));
        assert_eq!(seq.pop_front(), Some(3));
        assert_eq!(seq.pop_front(), None);
        assert!(seq.is_empty());
    }

    #[test]
    fn pop_back() {
        let mut seq = LinkedSequence::new();

        seq.push_back(1);
        seq.push_back(2);

        assert_eq!(seq.pop_back(), Some(2));
        assert_eq!(seq.len(), 1);
        seq.assert_chain();

        assert_eq!(seq.pop_back(), Some(1));
        assert!(seq.is_empty());
        assert_eq!(seq.pop_back(), None);
    }

    #[test]
    fn remove_middle_preserves_order() {
        let mut seq = LinkedSequence::new();

        seq.push_back(1);
        let b = seq.push_back(2);
        seq.push_back(3);
        seq.push_back(4);

        assert_eq!(seq.remove(b), Some(2));
        assert_eq!(seq.len(), 3);
        assert_eq!(values(&seq), vec![1, 3, 4]);
        seq.assert_chain();
    }

    #[test]
    fn remove_endpoints_updates_head_tail() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);
        seq.push_back(2);
        let c = seq.push_back(3);

        seq.remove(a);
        assert_eq!(seq.front(), Some(&2));
        seq.assert_chain();

        seq.remove(c);
        assert_eq!(seq.back(), Some(&2));
        assert_eq!(seq.len(), 1);
        seq.assert_chain();
    }

    #[test]
    fn remove_stale_handle_is_none() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);
        assert_eq!(seq.remove(a), Some(1));
        assert_eq!(seq.remove(a), None);
        assert!(!seq.contains(a));
    }

    #[test]
    fn handles_survive_unrelated_mutation() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);
        let b = seq.push_back(2);
        let c = seq.push_back(3);

        seq.remove(b);
        seq.push_front(0);
        seq.pop_back();

        assert_eq!(seq.get(a), Some(&1));
        assert!(!seq.contains(b));
        assert!(!seq.contains(c)); // popped off the back
    }

    #[test]
    fn stale_handle_after_slot_reuse() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);
        seq.remove(a);

        // The freed slot is reused; the old handle must still read stale.
        let b = seq.push_back(2);
        assert!(!seq.contains(a));
        assert_eq!(seq.get(a), None);
        assert_eq!(seq.get(b), Some(&2));
    }

    #[test]
    fn insert_before_places_element() {
        let mut seq = LinkedSequence::new();

        seq.push_back(1);
        let c = seq.push_back(3);

        let b = seq.insert_before(c, 2);
        assert_eq!(seq.len(), 3);
        assert_eq!(values(&seq), vec![1, 2, 3]);
        assert_eq!(seq.next_handle(b), Some(c));
        seq.assert_chain();
    }

    #[test]
    fn insert_before_front_updates_head() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);
        seq.insert_before(a, 0);

        assert_eq!(seq.front(), Some(&0));
        assert_eq!(values(&seq), vec![0, 1]);
        seq.assert_chain();
    }

    #[test]
    fn insert_after_back_updates_tail() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);
        seq.insert_after(a, 2);

        assert_eq!(seq.back(), Some(&2));
        assert_eq!(values(&seq), vec![1, 2]);
        seq.assert_chain();
    }

    #[test]
    #[should_panic(expected = "stale handle")]
    fn insert_before_stale_handle_panics() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);
        seq.remove(a);
        seq.insert_before(a, 2);
    }

    #[test]
    fn clear_resets_and_invalidates() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);
        seq.push_back(2);
        seq.push_back(3);

        seq.clear();

        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.front().is_none());
        assert!(!seq.contains(a));

        // Usable after clear
        seq.push_back(7);
        assert_eq!(values(&seq), vec![7]);
        seq.assert_chain();
    }

    #[test]
    fn front_back_mut() {
        let mut seq = LinkedSequence::new();

        seq.push_back(1);
        seq.push_back(2);

        *seq.front_mut().unwrap() = 10;
        *seq.back_mut().unwrap() = 20;

        assert_eq!(values(&seq), vec![10, 20]);
    }

    #[test]
    fn get_mut_through_handle() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);
        *seq.get_mut(a).unwrap() = 5;
        assert_eq!(seq.get(a), Some(&5));
    }

    #[test]
    fn handle_navigation() {
        let mut seq = LinkedSequence::new();

        let a = seq.push_back(1);
        let b = seq.push_back(2);
        let c = seq.push_back(3);

        assert_eq!(seq.next_handle(a), Some(b));
        assert_eq!(seq.next_handle(b), Some(c));
        assert_eq!(seq.next_handle(c), None);

        assert_eq!(seq.prev_handle(c), Some(b));
        assert_eq!(seq.prev_handle(a), None);
    }

    #[test]
    fn clone_is_deep() {
        let mut a: LinkedSequence<u64> = (1..=3).collect();
        let b = a.clone();

        a.push_back(4);
        a.pop_front();

        assert_eq!(values(&a), vec![2, 3, 4]);
        assert_eq!(values(&b), vec![1, 2, 3]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let a: LinkedSequence<u64> = (1..=3).collect();
        let mut b: LinkedSequence<u64> = (10..=15).collect();

        b.clone_from(&a);
        assert_eq!(b, a);
        b.assert_chain();
    }

    #[test]
    fn equality_laws() {
        let a: LinkedSequence<u64> = (1..=3).collect();
        let b: LinkedSequence<u64> = (1..=3).collect();
        let shorter: LinkedSequence<u64> = (1..=2).collect();
        let different: LinkedSequence<u64> = [1, 2, 4].into_iter().collect();
        let empty1: LinkedSequence<u64> = LinkedSequence::new();
        let empty2: LinkedSequence<u64> = LinkedSequence::new();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, shorter);
        assert_ne!(shorter, a);
        assert_ne!(a, different);
        assert_eq!(empty1, empty2);
        assert_ne!(a, empty1);
    }

    #[test]
    fn chained_append_operator() {
        let seq = LinkedSequence::new() + 1 + 2 + 3;
        assert_eq!(values(&seq), vec![1, 2, 3]);
        assert_eq!(seq.back(), Some(&3));
    }

    #[test]
    fn debug_format() {
        let seq: LinkedSequence<u64> = (1..=3).collect();
        assert_eq!(format!("{seq:?}"), "[1, 2, 3]");
    }

    #[test]
    fn hash_matches_equality() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(seq: &LinkedSequence<u64>) -> u64 {
            let mut hasher = DefaultHasher::new();
            seq.hash(&mut hasher);
            hasher.finish()
        }

        let a: LinkedSequence<u64> = (1..=3).collect();
        let b: LinkedSequence<u64> = (1..=3).collect();
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn extend_and_from_iterator() {
        let mut seq: LinkedSequence<u64> = (1..=2).collect();
        seq.extend([3, 4]);
        assert_eq!(values(&seq), vec![1, 2, 3, 4]);
    }
}

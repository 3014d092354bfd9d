//! Iterators over a sequence.
//!
//! [`Iter`] and [`IterMut`] walk the chain from both ends with a remaining
//! count, so `DoubleEndedIterator` and `ExactSizeIterator` come cheap.
//! [`IntoIter`] consumes the sequence; [`Drain`] empties it in place and
//! finishes the job even if dropped early.

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::seq::{LinkedSequence, Node};

/// Iterator over references to elements, front to back.
pub struct Iter<'a, T> {
    pub(crate) arena: &'a Arena<Node<T>>,
    pub(crate) front: u32,
    pub(crate) back: u32,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let node = self.arena.occupied(self.front);
        self.front = node.next;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let node = self.arena.occupied(self.back);
        self.back = node.prev;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Iterator over mutable references to elements, front to back.
pub struct IterMut<'a, T> {
    pub(crate) arena: &'a mut Arena<Node<T>>,
    pub(crate) front: u32,
    pub(crate) back: u32,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let node = self.arena.occupied_mut(self.front);
        self.front = node.next;
        // Extend lifetime - safe because the remaining count guarantees
        // each node is visited exactly once
        Some(unsafe { &mut *((&mut node.value) as *mut T) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let node = self.arena.occupied_mut(self.back);
        self.back = node.prev;
        // Extend lifetime - safe because the remaining count guarantees
        // each node is visited exactly once
        Some(unsafe { &mut *((&mut node.value) as *mut T) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, front to back.
pub struct IntoIter<T> {
    pub(crate) seq: LinkedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.seq.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// Iterator returned by [`LinkedSequence::drain`].
///
/// Removes every element, yielding them front to back. Dropping the
/// iterator removes whatever it has not yielded yet.
pub struct Drain<'a, T> {
    pub(crate) seq: &'a mut LinkedSequence<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.seq.pop_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        // Exhaust remaining elements to ensure cleanup
        for _ in self.by_ref() {}
    }
}

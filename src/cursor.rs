//! Bidirectional cursors over a sequence.
//!
//! A cursor is a position, not an element: it points either at an element
//! or at the end sentinel (the "ghost"), the single non-dereferenceable
//! position between the back and the front. Movement is circular through
//! the ghost:
//!
//! ```text
//! front  ...  back  (ghost)  front  ...
//! ```
//!
//! so `move_next` from the back lands on the ghost, `move_next` from the
//! ghost lands on the front, and `move_prev` from the ghost lands on the
//! back. At the ghost, [`Cursor::current`] returns `None`.

use crate::arena::{Handle, NONE};
use crate::seq::LinkedSequence;

/// A read-only cursor over a [`LinkedSequence`].
///
/// # Example
///
/// ```
/// use linkseq::LinkedSequence;
///
/// let seq: LinkedSequence<u64> = (1..=3).collect();
///
/// // Walk backward from the end sentinel.
/// let mut cursor = seq.cursor_end();
/// let mut reversed = Vec::new();
/// cursor.move_prev();
/// while let Some(&value) = cursor.current() {
///     reversed.push(value);
///     cursor.move_prev();
/// }
/// assert_eq!(reversed, vec![3, 2, 1]);
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    pub(crate) seq: &'a LinkedSequence<T>,
    pub(crate) current: u32,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the element under the cursor, or `None` at the end sentinel.
    #[inline]
    pub fn current(&self) -> Option<&'a T> {
        if self.current == NONE {
            return None;
        }
        Some(&self.seq.arena.occupied(self.current).value)
    }

    /// Returns a handle to the element under the cursor, or `None` at the
    /// end sentinel.
    #[inline]
    pub fn handle(&self) -> Option<Handle> {
        if self.current == NONE {
            return None;
        }
        Some(self.seq.arena.handle(self.current))
    }

    /// Returns `true` if the cursor is at the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current == NONE
    }

    /// Moves to the next position: the following element, the end sentinel
    /// after the back element, or the front element from the sentinel.
    #[inline]
    pub fn move_next(&mut self) {
        self.current = if self.current == NONE {
            self.seq.head
        } else {
            self.seq.arena.occupied(self.current).next
        };
    }

    /// Moves to the previous position: the preceding element, the end
    /// sentinel before the front element, or the back element from the
    /// sentinel.
    #[inline]
    pub fn move_prev(&mut self) {
        self.current = if self.current == NONE {
            self.seq.tail
        } else {
            self.seq.arena.occupied(self.current).prev
        };
    }

    /// Returns the element after the cursor without moving it.
    #[inline]
    pub fn peek_next(&self) -> Option<&'a T> {
        let mut probe = Cursor {
            seq: self.seq,
            current: self.current,
        };
        probe.move_next();
        probe.current()
    }

    /// Returns the element before the cursor without moving it.
    #[inline]
    pub fn peek_prev(&self) -> Option<&'a T> {
        let mut probe = Cursor {
            seq: self.seq,
            current: self.current,
        };
        probe.move_prev();
        probe.current()
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// Identity comparison: two cursors are equal iff they are positions in
/// the same sequence and point at the same node (or both at the sentinel).
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.seq, other.seq) && self.current == other.current
    }
}

impl<T> Eq for Cursor<'_, T> {}

/// A cursor with mutable access: elements can be edited in place, inserted
/// on either side of the position, and removed at it.
///
/// # Example
///
/// ```
/// use linkseq::LinkedSequence;
///
/// let mut seq: LinkedSequence<u64> = (1..=4).collect();
///
/// // Remove the even elements in one pass.
/// let mut cursor = seq.cursor_front_mut();
/// while let Some(&value) = cursor.current() {
///     if value % 2 == 0 {
///         cursor.remove_current();
///     } else {
///         cursor.move_next();
///     }
/// }
/// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) seq: &'a mut LinkedSequence<T>,
    pub(crate) current: u32,
}

impl<T> CursorMut<'_, T> {
    /// Returns the element under the cursor, or `None` at the end sentinel.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        if self.current == NONE {
            return None;
        }
        Some(&self.seq.arena.occupied(self.current).value)
    }

    /// Returns the element under the cursor mutably, or `None` at the end
    /// sentinel.
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.current == NONE {
            return None;
        }
        Some(&mut self.seq.arena.occupied_mut(self.current).value)
    }

    /// Returns a handle to the element under the cursor, or `None` at the
    /// end sentinel.
    #[inline]
    pub fn handle(&self) -> Option<Handle> {
        if self.current == NONE {
            return None;
        }
        Some(self.seq.arena.handle(self.current))
    }

    /// Returns `true` if the cursor is at the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current == NONE
    }

    /// Moves to the next position (see [`Cursor::move_next`]).
    #[inline]
    pub fn move_next(&mut self) {
        self.current = if self.current == NONE {
            self.seq.head
        } else {
            self.seq.arena.occupied(self.current).next
        };
    }

    /// Moves to the previous position (see [`Cursor::move_prev`]).
    #[inline]
    pub fn move_prev(&mut self) {
        self.current = if self.current == NONE {
            self.seq.tail
        } else {
            self.seq.arena.occupied(self.current).prev
        };
    }

    /// Inserts `value` before the cursor's position and returns its handle.
    ///
    /// At the end sentinel this appends, matching "insert before nothing".
    /// The cursor stays on its current position.
    pub fn insert_before(&mut self, value: T) -> Handle {
        if self.current == NONE {
            return self.seq.push_back(value);
        }
        let before = self.seq.arena.handle(self.current);
        self.seq.insert_before(before, value)
    }

    /// Inserts `value` after the cursor's position and returns its handle.
    ///
    /// At the end sentinel this prepends. The cursor stays on its current
    /// position.
    pub fn insert_after(&mut self, value: T) -> Handle {
        if self.current == NONE {
            return self.seq.push_front(value);
        }
        let after = self.seq.arena.handle(self.current);
        self.seq.insert_after(after, value)
    }

    /// Removes the element under the cursor, advancing to the next
    /// position.
    ///
    /// Returns `None` (and stays put) at the end sentinel. Only the removed
    /// element's handle is invalidated.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.current == NONE {
            return None;
        }
        let idx = self.current;
        self.current = self.seq.arena.occupied(idx).next;
        self.seq.unlink(idx);
        Some(self.seq.arena.remove(idx).value)
    }
}

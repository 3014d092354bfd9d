//! Doubly-linked, double-ended sequence over a generational slot arena.
//!
//! [`LinkedSequence`] gives list semantics — O(1) insertion and removal at
//! both ends and at any held position — without raw pointer plumbing. The
//! key insight: separate the chain from the allocation.
//!
//! ```text
//! classic linked list   - one heap node per element, prev/next pointers,
//!                         manual ownership on every erase path
//! LinkedSequence        - nodes live in a slot arena, links are u32
//!                         indices, the arena owns everything
//! ```
//!
//! Benefits:
//! - **Stable handles**: every insertion returns a [`Handle`]; removing one
//!   element invalidates only that element's handle
//! - **Detected staleness**: slots carry generation counters, so a handle
//!   to a removed element reads as stale instead of aliasing whatever
//!   reused the slot
//! - **No per-node allocation**: freed slots are reused LIFO from an
//!   intrusive free-list
//! - **Value semantics**: `Clone` is a deep copy, `Eq` compares length then
//!   elements in order, `Drop` releases every node exactly once
//!
//! # Quick start
//!
//! ```
//! use linkseq::LinkedSequence;
//!
//! let mut seq = LinkedSequence::new();
//! seq.push_back(10);
//! seq.push_back(20);
//! seq.push_front(5);
//!
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.front(), Some(&5));
//! assert_eq!(seq.back(), Some(&20));
//!
//! seq.pop_back();
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![5, 10]);
//! ```
//!
//! # Positional mutation
//!
//! Handles make arbitrary-position edits O(1):
//!
//! ```
//! use linkseq::LinkedSequence;
//!
//! let mut seq = LinkedSequence::new();
//! seq.push_back(1);
//! let three = seq.push_back(3);
//!
//! seq.insert_before(three, 2);
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! assert_eq!(seq.remove(three), Some(3));
//! assert_eq!(seq.remove(three), None); // stale now, detected
//! ```
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] model a bidirectional position, including
//! the one-past-the-end sentinel; see the [`cursor`] module docs for the
//! movement rules.
//!
//! ```
//! use linkseq::LinkedSequence;
//!
//! let mut seq: LinkedSequence<u64> = (1..=4).collect();
//!
//! let mut cursor = seq.cursor_front_mut();
//! while let Some(&value) = cursor.current() {
//!     if value % 2 == 0 {
//!         cursor.remove_current();
//!     } else {
//!         cursor.move_next();
//!     }
//! }
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//! ```
//!
//! # Contracts
//!
//! The container is single-threaded and all contracts are narrow:
//! absence is typed (`Option` from pops, lookups, and stale handles), and
//! the one misuse that cannot return a value — inserting relative to a
//! stale handle — panics rather than corrupting the chain.

#![warn(missing_docs)]

mod arena;
pub mod cursor;
pub mod iter;
pub mod seq;

pub use arena::Handle;
pub use cursor::{Cursor, CursorMut};
pub use iter::{Drain, IntoIter, Iter, IterMut};
pub use seq::LinkedSequence;

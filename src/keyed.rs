//! Priority/item adapter over [`MinHeap`]
//!
//! [`KeyedHeap`] stores `(priority, item)` pairs and orders them by the
//! priority alone, so the item type needs no ordering at all. It adds no
//! heap logic of its own: every operation forwards to a [`MinHeap`] whose
//! comparator looks only at the priority half of each pair.
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::keyed::KeyedHeap;
//!
//! let mut tasks = KeyedHeap::natural();
//! tasks.insert(3, "write docs");
//! tasks.insert(1, "fix build");
//! tasks.insert(2, "review");
//!
//! assert_eq!(tasks.peek_entry(), Some((&1, &"fix build")));
//! assert_eq!(tasks.pop_entry(), Ok((1, "fix build")));
//! assert_eq!(tasks.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::binary::MinHeap;
use crate::compare::{Compare, Natural};
use crate::traits::{Heap, HeapError};

/// Orders `(priority, item)` pairs by priority
#[derive(Clone)]
struct ByPriority<C>(C);

impl<P, T, C: Compare<P>> Compare<(P, T)> for ByPriority<C> {
    fn compare(&self, a: &(P, T), b: &(P, T)) -> Ordering {
        self.0.compare(&a.0, &b.0)
    }
}

/// A min-heap of items keyed by a separate priority
///
/// # Type Parameters
/// - `P`: the priority type, ordered by `C`
/// - `T`: the item type, never compared
/// - `C`: a [`Compare<P>`] comparator
#[derive(Clone)]
pub struct KeyedHeap<P, T, C> {
    heap: MinHeap<(P, T), ByPriority<C>>,
}

impl<P, T, C: Compare<P>> KeyedHeap<P, T, C> {
    /// Creates an empty heap ordered by `compare` over priorities
    pub fn new(compare: C) -> Self {
        Self {
            heap: MinHeap::with_comparator(ByPriority(compare)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts `item` with the given priority
    pub fn insert(&mut self, priority: P, item: T) {
        self.heap.push((priority, item));
    }

    /// Returns the minimum priority and its item without removing them
    pub fn peek_entry(&self) -> Option<(&P, &T)> {
        self.heap.peek().map(|(priority, item)| (priority, item))
    }

    /// Removes and returns the minimum priority and its item
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn pop_entry(&mut self) -> Result<(P, T), HeapError> {
        self.heap.pop()
    }

    /// Consumes the heap, returning entries in non-decreasing priority order
    pub fn into_sorted_vec(self) -> Vec<(P, T)> {
        self.heap.into_sorted_vec()
    }
}

impl<P: Ord, T> KeyedHeap<P, T, Natural> {
    /// Creates an empty heap ordered by `P`'s own [`Ord`] implementation
    pub fn natural() -> Self {
        Self::new(Natural)
    }
}

impl<P: Ord, T> Default for KeyedHeap<P, T, Natural> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<P, T, C: Compare<P>> Heap<(P, T)> for KeyedHeap<P, T, C> {
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, entry: (P, T)) {
        self.heap.push(entry)
    }

    fn peek(&self) -> Option<&(P, T)> {
        self.heap.peek()
    }

    fn pop(&mut self) -> Result<(P, T), HeapError> {
        self.heap.pop()
    }
}

impl<P: fmt::Debug, T: fmt::Debug, C> fmt::Debug for KeyedHeap<P, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedHeap")
            .field("entries", &self.heap.as_slice())
            .finish_non_exhaustive()
    }
}

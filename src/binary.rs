//! Binary min-heap ordered by a comparator
//!
//! An array-backed complete binary tree. For the element at index `i` the
//! children live at `2i + 1` and `2i + 2` and the parent at `(i - 1) / 2`.
//! Every parent compares less than or equal to its children under the
//! heap's comparator, so the root is always the minimum.
//!
//! The comparator is any [`Compare`] value: a closure, a function, or one of
//! the helpers in [`compare`](crate::compare).
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `new` (heapify)  | O(n)       |
//! | `push`           | O(log n)   |
//! | `pop`            | O(log n)   |
//! | `peek`           | O(1)       |
//! | `into_sorted_vec`| O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::MinHeap;
//!
//! let mut heap = MinHeap::new(vec![3, 2, 1], |a: &i32, b: &i32| a.cmp(b));
//!
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! heap.push(1);
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert!(heap.pop().is_err());
//! ```

use std::fmt;

use crate::compare::{Compare, Natural};
use crate::traits::{Heap, HeapError};

/// A binary min-heap over `T`, ordered by the comparator `C`
///
/// The comparator is fixed for the heap's lifetime. If it panics during a
/// `push` or `pop`, the panic propagates to the caller and the heap still
/// owns all of its elements, but their order is unspecified; treat the heap
/// as unusable afterwards.
#[derive(Clone)]
pub struct MinHeap<T, C> {
    /// Complete binary tree in level order
    items: Vec<T>,
    compare: C,
}

impl<T, C> MinHeap<T, C> {
    /// Creates an empty heap
    pub fn with_comparator(compare: C) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    /// Creates an empty heap with room for `capacity` elements before reallocating
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the comparator the heap was built with
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns the backing array in heap order
    ///
    /// Only `as_slice()[0]` has a defined position (the minimum); the rest is
    /// an implementation detail useful for checking the heap-order invariant.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the heap, returning the backing array in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Builds a heap from an unordered vector in O(n)
    ///
    /// The vector is reordered in place with a single bottom-up heapify pass.
    pub fn new(items: Vec<T>, compare: C) -> Self {
        let mut heap = Self { items, compare };
        heap.heapify();
        heap
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] when the heap has no elements, without
    /// touching it.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        // The last element takes the root's place
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Consumes the heap, returning its elements in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Bottom-up heapify: sift down every non-leaf, last one first
    fn heapify(&mut self) {
        let len = self.items.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up while its parent is strictly greater
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self
                .compare
                .compares_gt(&self.items[parent], &self.items[index])
            {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while a child is strictly smaller
    ///
    /// The left child is checked first and is only displaced by the right
    /// child when the right one is strictly smaller, so equal children
    /// resolve to the left.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len
                && self
                    .compare
                    .compares_lt(&self.items[left], &self.items[smallest])
            {
                smallest = left;
            }
            if right < len
                && self
                    .compare
                    .compares_lt(&self.items[right], &self.items[smallest])
            {
                smallest = right;
            }

            if smallest != index {
                self.items.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T>> Heap<T> for MinHeap<T, C> {
    fn is_empty(&self) -> bool {
        MinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MinHeap::len(self)
    }

    fn push(&mut self, item: T) {
        MinHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        MinHeap::peek(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        MinHeap::pop(self)
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> MinHeap<T, Natural> {
    /// Builds a heap ordered by `T`'s own [`Ord`] implementation
    pub fn natural(items: Vec<T>) -> Self {
        Self::new(items, Natural)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::natural(iter.into_iter().collect())
    }
}

impl<T: Ord> Default for MinHeap<T, Natural> {
    fn default() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

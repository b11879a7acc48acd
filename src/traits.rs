//! Common traits for heap data structures
//!
//! [`Heap`] is the capability interface shared by the crate's heap types.
//! There is exactly one heap algorithm, [`MinHeap`](crate::binary::MinHeap);
//! the trait lets generic code and thin adapters such as
//! [`KeyedHeap`](crate::keyed::KeyedHeap) work with it without naming the
//! comparator type.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `pop` was called on a heap with no elements
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "cannot pop from an empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-heap/priority queue data structures
///
/// The ordering is whatever the implementation was constructed with; the
/// trait only promises that `pop` and `peek` see the minimum under it.
///
/// # Example
///
/// ```rust
/// use comparator_heap::{Heap, HeapError, MinHeap};
///
/// fn drain<T, H: Heap<T>>(heap: &mut H) -> Vec<T> {
///     let mut out = Vec::with_capacity(heap.len());
///     while let Ok(item) = heap.pop() {
///         out.push(item);
///     }
///     out
/// }
///
/// let mut heap = MinHeap::new(vec![3, 1, 2], |a: &i32, b: &i32| a.cmp(b));
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to remove. The
    /// heap is left untouched in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;
}

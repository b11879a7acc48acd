//! Comparator-ordered binary heap for Rust
//!
//! This crate provides a binary min-heap whose order comes from a comparator
//! value supplied at construction rather than from an `Ord` bound on the
//! element type. The same record type can therefore live in several heaps,
//! each ordered differently.
//!
//! # Features
//!
//! - **MinHeap**: O(n) construction from a vector; O(log n) push and pop; O(1) peek
//! - **Comparators**: closures, functions, [`Natural`], [`Reversed`] and [`by_key`](compare::by_key)
//! - **KeyedHeap**: (priority, item) pairs ordered by priority only
//! - **Heap trait**: a small capability interface over both
//!
//! `pop` on an empty heap returns [`HeapError::EmptyHeap`] instead of a
//! sentinel value.
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::compare::by_key;
//! use comparator_heap::MinHeap;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Thing {
//!     name: &'static str,
//!     value: i32,
//! }
//!
//! let things = vec![
//!     Thing { name: "b", value: 3 },
//!     Thing { name: "c", value: 1 },
//!     Thing { name: "a", value: 2 },
//! ];
//!
//! let mut by_value = MinHeap::new(things.clone(), by_key(|t: &Thing| t.value));
//! let mut by_name = MinHeap::new(things, by_key(|t: &Thing| t.name));
//!
//! assert_eq!(by_value.pop().unwrap().name, "c");
//! assert_eq!(by_name.pop().unwrap().name, "a");
//! ```

pub mod binary;
pub mod compare;
pub mod keyed;
pub mod traits;

// Re-export the main types for convenience
pub use binary::MinHeap;
pub use compare::{Compare, Natural, Reversed};
pub use keyed::KeyedHeap;
pub use traits::{Heap, HeapError};

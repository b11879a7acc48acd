//! Comparators used to order heap elements
//!
//! A heap never relies on `T: Ord`. Instead it is handed a comparator value
//! at construction, so the same element type can be ordered several ways.
//!
//! - Any closure or function `Fn(&T, &T) -> Ordering` is a comparator.
//! - [`Natural`] orders `T: Ord` ascending.
//! - [`Reversed`] flips another comparator, turning a min-heap into a max-heap.
//! - [`by_key`] orders by a key extracted from each element.
//!
//! `Ordering::Less` means the first argument comes out of the heap first.
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::compare::{by_key, Compare, Natural, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = by_key(|s: &&str| s.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A three-way comparison between two values of type `T`
///
/// Implementations must describe a consistent total order (transitive and
/// antisymmetric). Heaps do not check this; a comparator that breaks the
/// contract leaves the heap in an unspecified, but memory-safe, order.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` sorts strictly before `b`
    fn compares_lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if `a` sorts strictly after `b`
    fn compares_gt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ascending order given by `T`'s own [`Ord`] implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of the wrapped comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Builds a comparator that orders elements by the key `key` extracts
///
/// Keys are recomputed on every comparison, so `key` should be cheap.
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

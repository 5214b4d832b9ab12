//! Comparator and error types shared by the heap containers
//!
//! - [`Less`]: the ordering predicate a heap is parameterized by
//! - [`MinOrder`] / [`MaxOrder`]: zero-sized comparators for `Ord` types
//! - [`HeapError`]: recoverable failures reported by the `try_*` operations
//!
//! A comparator answers one question: should `a` sit above `b` in the heap?
//! It must return the same answer for the same pair of live elements every
//! time it is asked. It need not be a strict weak order; ties are resolved
//! arbitrarily.

use std::collections::TryReserveError;
use std::fmt;

/// Error type for fallible heap operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// Doubling the current capacity would overflow `usize`
    CapacityOverflow,
    /// The allocator could not provide storage for the grown heap
    AllocationFailed {
        /// The capacity (in slots) that was requested
        capacity: usize,
        /// The underlying reservation failure
        source: TryReserveError,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::CapacityOverflow => {
                write!(f, "heap capacity would overflow usize")
            }
            HeapError::AllocationFailed { capacity, source } => {
                write!(f, "failed to allocate {} heap slots: {}", capacity, source)
            }
        }
    }
}

impl std::error::Error for HeapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeapError::CapacityOverflow => None,
            HeapError::AllocationFailed { source, .. } => Some(source),
        }
    }
}

/// Ordering predicate for a heap
///
/// `less(a, b)` returns true when `a` should float above `b`. The element at
/// the root of a heap is one for which no other element `x` satisfies
/// `less(x, root)`.
///
/// Every `Fn(&T, &T) -> bool` is a comparator, so closures can be passed
/// directly:
///
/// ```rust
/// use fastheap::FastHeap;
///
/// let mut heap = FastHeap::new(|a: &(u32, &str), b: &(u32, &str)| a.0 < b.0);
/// heap.push((2, "second"));
/// heap.push((1, "first"));
/// assert_eq!(heap.pop(), (1, "first"));
/// ```
pub trait Less<T: ?Sized> {
    /// Returns true if `a` should sit above `b`
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Less<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders by [`Ord`], smallest element on top (a min-heap)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinOrder;

impl<T: ?Sized + Ord> Less<T> for MinOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders by [`Ord`], largest element on top (a max-heap)
///
/// This is the order `std::collections::BinaryHeap` uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<T: ?Sized + Ord> Less<T> for MaxOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

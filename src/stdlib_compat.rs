//! Standard library compatibility layer
//!
//! Provides a drop-in replacement for the common subset of
//! `std::collections::BinaryHeap`.
//!
//! # Differences from FastHeap
//!
//! - **Max-heap**: like `BinaryHeap`, the largest element comes out first.
//!   Use `std::cmp::Reverse<T>` to get min-heap behavior.
//! - **Option results**: `peek` and `pop` return `None` on an empty heap
//!   instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use fastheap::stdlib_compat::StdHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&7));
//! assert_eq!(heap.pop(), Some(7));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use std::fmt;

use crate::heap::FastHeap;
use crate::traits::MaxOrder;

/// A drop-in replacement for `std::collections::BinaryHeap`
///
/// The item itself serves as the priority, compared with its `Ord` impl.
pub struct StdHeap<T: Ord> {
    heap: FastHeap<T, MaxOrder>,
}

impl<T: Ord> StdHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: FastHeap::max_heap(),
        }
    }

    /// Creates an empty heap with room for at least `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: FastHeap::with_capacity(capacity, MaxOrder),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the number of items the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.push(item)
    }

    /// Returns a reference to the greatest item, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        if self.heap.is_empty() {
            None
        } else {
            Some(self.heap.peek())
        }
    }

    /// Removes and returns the greatest item, or `None` if empty
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            None
        } else {
            Some(self.heap.pop())
        }
    }

    /// Drops all items
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// Consumes the heap and returns its items in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted.reverse();
        sorted
    }
}

impl<T: Ord> Default for StdHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for StdHeap<T> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
        }
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for StdHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StdHeap").field(&self.heap).finish()
    }
}

impl<T: Ord> Extend<T> for StdHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter)
    }
}

impl<T: Ord> FromIterator<T> for StdHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> From<Vec<T>> for StdHeap<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

//! Comparator-ordered binary heap
//!
//! [`FastHeap`] is an array-backed binary heap whose order comes from a
//! [`Less`] comparator rather than from `Ord`. With `less = |a, b| a < b` it is
//! a min-heap; with `|a, b| a > b` it is a max-heap.
//!
//! # Time Complexity
//!
//! | Operation | Complexity          |
//! |-----------|---------------------|
//! | `push`    | O(log n), amortized O(1) reallocation |
//! | `pop`     | O(log n), amortized O(1) reallocation |
//! | `peek`    | O(1)                |
//! | `fix`     | O(log n)            |
//! | `len`     | O(1)                |
//!
//! # Preconditions
//!
//! `peek` and `pop` on an empty heap, and `fix` with an index outside
//! `0..len()`, are programming errors and panic. Check [`is_empty`] first, or
//! use [`StdHeap`](crate::stdlib_compat::StdHeap) for an `Option`-returning API.
//!
//! # Example
//!
//! ```rust
//! use fastheap::FastHeap;
//!
//! let mut heap = FastHeap::new(|a: &i32, b: &i32| a < b);
//! for x in [5, 1, 4, 2, 8] {
//!     heap.push(x);
//! }
//!
//! assert_eq!(heap.len(), 5);
//! assert_eq!(*heap.peek(), 1);
//!
//! let mut out = Vec::new();
//! while !heap.is_empty() {
//!     out.push(heap.pop());
//! }
//! assert_eq!(out, vec![1, 2, 4, 5, 8]);
//! ```
//!
//! [`is_empty`]: FastHeap::is_empty

use std::fmt;

use crate::storage::{Slots, MIN_CAPACITY};
use crate::traits::{HeapError, Less, MaxOrder, MinOrder};

/// A binary heap ordered by a user-supplied comparator
///
/// The root is always an element `r` such that no other element `x` has
/// `less(x, r)`. For every live index `i > 0`, `less(elements[i],
/// elements[(i - 1) / 2])` is false.
pub struct FastHeap<T, L> {
    slots: Slots<T>,
    len: usize,
    less: L,
}

impl<T, L: Less<T>> FastHeap<T, L> {
    /// Creates an empty heap with [`MIN_CAPACITY`] slots
    pub fn new(less: L) -> Self {
        Self::with_capacity(MIN_CAPACITY, less)
    }

    /// Creates an empty heap with room for `max(capacity, MIN_CAPACITY)`
    /// elements
    pub fn with_capacity(capacity: usize, less: L) -> Self {
        Self {
            slots: Slots::with_capacity(capacity),
            len: 0,
            less,
        }
    }

    /// Returns the number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns the comparator this heap orders by
    pub fn comparator(&self) -> &L {
        &self.less
    }

    /// Inserts an element
    ///
    /// Doubles the storage when it is full. Allocation failure is fatal; use
    /// [`try_push`](Self::try_push) to observe it instead.
    pub fn push(&mut self, element: T) {
        self.slots.grow(self.len);
        self.place_last(element);
    }

    /// Inserts an element, reporting allocation failure instead of aborting
    ///
    /// On error `element` is dropped and the heap is unchanged.
    pub fn try_push(&mut self, element: T) -> Result<(), HeapError> {
        self.slots.try_grow(self.len)?;
        self.place_last(element);
        Ok(())
    }

    /// Returns the top element without removing it
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn peek(&self) -> &T {
        assert!(!self.is_empty(), "peek on an empty heap");
        occupied(&self.slots.as_slice()[0])
    }

    /// Removes and returns the top element
    ///
    /// The last element takes the root's place and sifts down. Storage is
    /// halved afterwards if fewer than half the slots remain live.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn pop(&mut self) -> T {
        assert!(!self.is_empty(), "pop on an empty heap");
        self.len -= 1;
        let last = self.len;
        let slots = self.slots.as_mut_slice();
        let top = match slots[last].take() {
            Some(moved) if last > 0 => slots[0].replace(moved),
            vacated => vacated,
        };
        if last > 1 {
            self.sift_down(0, last);
        }
        self.slots.shrink(self.len);
        match top {
            Some(top) => top,
            None => unreachable!("vacant slot inside the live range"),
        }
    }

    /// Restores heap order after the element at `index` changed in place
    ///
    /// The element is first sifted down; only if it did not move is it
    /// sifted up.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn fix(&mut self, index: usize) {
        assert!(
            index < self.len,
            "fix index {} out of range for heap of length {}",
            index,
            self.len
        );
        if !self.sift_down(index, self.len) {
            self.sift_up(index);
        }
    }

    /// Applies `f` to the element at `index`, then restores heap order
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn update<F>(&mut self, index: usize, f: F)
    where
        F: FnOnce(&mut T),
    {
        let len = self.len;
        match self.get_mut(index) {
            Some(element) => f(element),
            None => panic!(
                "update index {} out of range for heap of length {}",
                index, len
            ),
        }
        self.fix(index);
    }

    /// Returns the element at logical `index`, or `None` if out of range
    ///
    /// Index 0 is the top; the rest are in heap (not sorted) order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.as_slice()[..self.len]
            .get(index)
            .map(occupied)
    }

    /// Returns a mutable reference to the element at logical `index`
    ///
    /// If the change affects the element's order, call [`fix`](Self::fix)
    /// with the same index afterwards.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let len = self.len;
        self.slots.as_mut_slice()[..len]
            .get_mut(index)
            .map(|slot| match slot {
                Some(element) => element,
                None => unreachable!("vacant slot inside the live range"),
            })
    }

    /// Removes every element and returns storage to [`MIN_CAPACITY`]
    pub fn clear(&mut self) {
        self.slots.reset();
        self.len = 0;
    }

    fn place_last(&mut self, element: T) {
        let index = self.len;
        self.slots.as_mut_slice()[index] = Some(element);
        self.len += 1;
        self.sift_up(index);
    }

    /// Floats the element at `pos` toward the root while it should sit
    /// above its parent. Returns true if it moved.
    fn sift_up(&mut self, pos: usize) -> bool {
        let less = &self.less;
        let mut hole = Hole::new(self.slots.as_mut_slice(), pos);

        while hole.pos() > 0 {
            let parent = (hole.pos() - 1) / 2;
            if !less.less(hole.element(), hole.get(parent)) {
                break;
            }
            hole.move_to(parent);
        }

        hole.pos() != pos
    }

    /// Sinks the element at `pos` below any child that should sit above it,
    /// considering only indices below `end`. Returns true if it moved.
    fn sift_down(&mut self, pos: usize, end: usize) -> bool {
        let less = &self.less;
        let mut hole = Hole::new(self.slots.as_mut_slice(), pos);
        let mut child = 2 * pos + 1;

        while child < end {
            // prefer the right child only if it is strictly better
            if child + 1 < end && less.less(hole.get(child + 1), hole.get(child)) {
                child += 1;
            }
            if !less.less(hole.get(child), hole.element()) {
                break;
            }
            hole.move_to(child);
            child = 2 * hole.pos() + 1;
        }

        hole.pos() != pos
    }
}

impl<T: Ord> FastHeap<T, MinOrder> {
    /// Creates an empty heap that yields its smallest element first
    pub fn min_heap() -> Self {
        Self::new(MinOrder)
    }
}

impl<T: Ord> FastHeap<T, MaxOrder> {
    /// Creates an empty heap that yields its largest element first
    pub fn max_heap() -> Self {
        Self::new(MaxOrder)
    }
}

impl<T, L: Less<T> + Default> Default for FastHeap<T, L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}

impl<T: Clone, L: Clone> Clone for FastHeap<T, L> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
            less: self.less.clone(),
        }
    }
}

impl<T: fmt::Debug, L> fmt::Debug for FastHeap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastHeap")
            .field("len", &self.len)
            .field("capacity", &self.slots.capacity())
            .field(
                "elements",
                &self.slots.as_slice()[..self.len]
                    .iter()
                    .map(occupied)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<T, L: Less<T>> Extend<T> for FastHeap<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

#[inline]
fn occupied<T>(slot: &Option<T>) -> &T {
    match slot {
        Some(element) => element,
        None => unreachable!("vacant slot inside the live range"),
    }
}

// Sifting moves one element out of its slot (leaving a hole), shifts
// neighbours into the hole one step at a time, and writes the element back
// once at the hole's final position. Each level moves one payload and
// leaves a `None` tag in the vacated slot, instead of the two payload moves
// a swap costs. The write-back happens in `Drop`, so a panicking
// comparator still leaves every live slot occupied.
struct Hole<'a, T> {
    slots: &'a mut [Option<T>],
    element: Option<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    #[inline]
    fn new(slots: &'a mut [Option<T>], pos: usize) -> Self {
        let element = slots[pos].take();
        debug_assert!(element.is_some());
        Hole {
            slots,
            element,
            pos,
        }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// The element that was lifted out
    #[inline]
    fn element(&self) -> &T {
        occupied(&self.element)
    }

    /// The element at `index`, which must be live and not the hole
    #[inline]
    fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        occupied(&self.slots[index])
    }

    /// Moves the element at `index` into the hole; the hole moves to `index`
    #[inline]
    fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        self.slots[self.pos] = self.slots[index].take();
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        self.slots[self.pos] = self.element.take();
    }
}

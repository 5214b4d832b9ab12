//! Backing storage and capacity control for [`FastHeap`](crate::FastHeap)
//!
//! Storage is a boxed slice of slots. A slot holds either a live element or
//! `None`; the slice length is the capacity. Live elements always occupy the
//! prefix `0..len`, and every slot past `len` is `None` so that removed
//! elements are not kept alive by the heap.
//!
//! # Capacity policy
//!
//! - Growth doubles the capacity when one more element would not fit.
//! - Shrink halves the capacity once fewer than half the slots are live,
//!   but never below [`MIN_CAPACITY`].
//!
//! Growth triggers at full and shrink triggers strictly below half full.
//! After a grow from `c` to `2c` slots the heap holds `c + 1` elements, and
//! it takes two pops before fewer than half the slots are live, so a single
//! push/pop pair can never trigger both.

use std::collections::TryReserveError;
use tracing::trace;

use crate::traits::HeapError;

/// Smallest capacity the storage is ever given or shrunk to
pub const MIN_CAPACITY: usize = 16;

/// Fixed-size slot buffer with explicit grow/shrink
pub(crate) struct Slots<T> {
    buf: Box<[Option<T>]>,
}

impl<T> Slots<T> {
    /// Allocates `max(capacity, MIN_CAPACITY)` empty slots
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Self {
            buf: buf.into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Option<T>] {
        &self.buf
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Option<T>] {
        &mut self.buf
    }

    /// Makes room for one more element when `len` slots are live
    ///
    /// Aborts through the global allocation error handler if memory is
    /// exhausted, and panics if the doubled capacity overflows.
    pub(crate) fn grow(&mut self, len: usize) {
        if len < self.capacity() {
            return;
        }
        let new_capacity = self
            .capacity()
            .checked_mul(2)
            .expect("heap capacity overflow");
        self.relocate(Vec::with_capacity(new_capacity), len, new_capacity);
    }

    /// Fallible version of [`grow`](Self::grow)
    ///
    /// On error the storage is left untouched.
    pub(crate) fn try_grow(&mut self, len: usize) -> Result<(), HeapError> {
        if len < self.capacity() {
            return Ok(());
        }
        let new_capacity = self
            .capacity()
            .checked_mul(2)
            .ok_or(HeapError::CapacityOverflow)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(new_capacity)
            .map_err(|source: TryReserveError| HeapError::AllocationFailed {
                capacity: new_capacity,
                source,
            })?;
        self.relocate(buf, len, new_capacity);
        Ok(())
    }

    /// Releases half the slots if fewer than half of them are live
    pub(crate) fn shrink(&mut self, len: usize) {
        let capacity = self.capacity();
        if capacity <= MIN_CAPACITY || len * 2 >= capacity {
            return;
        }
        let new_capacity = (capacity / 2).max(MIN_CAPACITY);
        self.relocate(Vec::with_capacity(new_capacity), len, new_capacity);
    }

    /// Drops every element and returns to the floor capacity
    pub(crate) fn reset(&mut self) {
        *self = Self::with_capacity(MIN_CAPACITY);
    }

    /// Moves the live prefix into `buf`, pads it to `new_capacity` and
    /// installs it as the new storage.
    fn relocate(&mut self, mut buf: Vec<Option<T>>, len: usize, new_capacity: usize) {
        debug_assert!(len <= new_capacity);
        debug_assert!(buf.capacity() >= new_capacity);
        buf.extend(self.buf[..len].iter_mut().map(Option::take));
        buf.resize_with(new_capacity, || None);
        let old_capacity = self.capacity();
        self.buf = buf.into_boxed_slice();
        trace!(
            old_capacity,
            new_capacity,
            live = len,
            "reallocated heap storage"
        );
    }
}

impl<T: Clone> Clone for Slots<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
        }
    }
}

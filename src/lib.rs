//! Comparator-Ordered Binary Heap for Rust
//!
//! This crate provides [`FastHeap`], an array-backed binary heap (priority
//! queue) ordered by a user-supplied predicate `less(a, b)`: "should `a` sit
//! above `b`". Any `Fn(&T, &T) -> bool` works as the predicate, so the same
//! container serves as a min-heap, a max-heap, or a heap keyed on any field.
//!
//! # Features
//!
//! - **Hole-based sifting**: an element is lifted out once, neighbours shift
//!   into the gap one payload move per level, and it is written back once.
//!   A swap-based heap moves two payloads per level.
//! - **Hysteresis capacity control**: storage doubles when full and halves
//!   once less than half full, never below [`MIN_CAPACITY`] slots. No single
//!   push/pop pair can trigger both a grow and a shrink.
//! - **In-place priority changes**: [`FastHeap::fix`] and
//!   [`FastHeap::update`] restore order after an element changes.
//! - **Drop-in `BinaryHeap` replacement**: [`StdHeap`] mirrors the standard
//!   library's max-heap API.
//!
//! # Example
//!
//! ```rust
//! use fastheap::FastHeap;
//!
//! let mut heap = FastHeap::new(|a: &(u32, &str), b: &(u32, &str)| a.0 < b.0);
//! heap.push((5, "five"));
//! heap.push((1, "one"));
//! heap.push((3, "three"));
//!
//! assert_eq!(heap.peek(), &(1, "one"));
//! heap.update(0, |entry| entry.0 = 4);
//! assert_eq!(heap.pop(), (3, "three"));
//! assert_eq!(heap.pop(), (4, "one"));
//! ```

pub mod heap;
mod storage;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use heap::FastHeap;
pub use stdlib_compat::StdHeap;
pub use storage::MIN_CAPACITY;
pub use traits::{HeapError, Less, MaxOrder, MinOrder};

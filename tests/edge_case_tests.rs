//! Edge cases for bug finding
//!
//! These target specific edge cases and potential bug patterns:
//! - Empty heap preconditions
//! - Out-of-range indices
//! - Single element heaps
//! - Ties and degenerate comparators
//! - Fix on the root and on leaves

use std::cell::Cell;
use std::rc::Rc;

use fastheap::{FastHeap, MinOrder, StdHeap, MIN_CAPACITY};

// ============================================================================
// Preconditions
// ============================================================================

#[test]
#[should_panic(expected = "peek on an empty heap")]
fn test_peek_on_new_heap_panics() {
    let heap: FastHeap<u64, MinOrder> = FastHeap::min_heap();
    let _ = heap.peek();
}

#[test]
#[should_panic(expected = "pop on an empty heap")]
fn test_pop_on_new_heap_panics() {
    let mut heap: FastHeap<String, MinOrder> = FastHeap::min_heap();
    let _ = heap.pop();
}

#[test]
#[should_panic(expected = "pop on an empty heap")]
fn test_pop_after_draining_panics() {
    let mut heap = FastHeap::min_heap();
    heap.push(1);
    heap.push(2);
    heap.pop();
    heap.pop();
    heap.pop();
}

#[test]
#[should_panic(expected = "fix index 0 out of range for heap of length 0")]
fn test_fix_on_empty_heap_panics() {
    let mut heap: FastHeap<i32, MinOrder> = FastHeap::min_heap();
    heap.fix(0);
}

#[test]
#[should_panic(expected = "update index 3 out of range for heap of length 3")]
fn test_update_out_of_range_panics() {
    let mut heap = FastHeap::min_heap();
    heap.extend([1, 2, 3]);
    heap.update(3, |x| *x = 0);
}

#[test]
fn test_std_heap_empty_is_none() {
    let mut heap: StdHeap<i32> = StdHeap::new();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
}

// ============================================================================
// Single element
// ============================================================================

#[test]
fn test_single_element() {
    let mut heap = FastHeap::min_heap();
    heap.push(42);
    assert_eq!(*heap.peek(), 42);
    heap.fix(0);
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.pop(), 42);
    assert!(heap.is_empty());

    // reusable after emptying
    heap.push(7);
    assert_eq!(heap.pop(), 7);
}

#[test]
fn test_two_elements_reverse_order() {
    let mut heap = FastHeap::min_heap();
    heap.push(2);
    heap.push(1);
    assert_eq!(heap.get(0), Some(&1));
    assert_eq!(heap.get(1), Some(&2));
    assert_eq!(heap.pop(), 1);
    assert_eq!(heap.pop(), 2);
}

// ============================================================================
// Ties and degenerate comparators
// ============================================================================

#[test]
fn test_all_equal_priorities() {
    let mut heap = FastHeap::new(|a: &(u8, usize), b: &(u8, usize)| a.0 < b.0);
    for id in 0..100 {
        heap.push((1, id));
    }
    let mut ids: Vec<usize> = Vec::new();
    while !heap.is_empty() {
        let (priority, id) = heap.pop();
        assert_eq!(priority, 1);
        ids.push(id);
    }
    ids.sort_unstable();
    assert_eq!(ids, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_never_less_comparator() {
    // nothing ever floats, so elements stay where they land
    let mut heap = FastHeap::new(|_: &i32, _: &i32| false);
    heap.extend([3, 1, 2]);
    assert_eq!(*heap.peek(), 3);
    assert_eq!(heap.len(), 3);

    let mut out = Vec::new();
    while !heap.is_empty() {
        out.push(heap.pop());
    }
    out.sort_unstable();
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn test_always_less_comparator_keeps_every_element() {
    let mut heap = FastHeap::new(|_: &i32, _: &i32| true);
    heap.extend(0..50);
    assert_eq!(heap.len(), 50);

    let mut out = Vec::new();
    while !heap.is_empty() {
        out.push(heap.pop());
    }
    out.sort_unstable();
    assert_eq!(out, (0..50).collect::<Vec<_>>());
}

#[test]
fn test_extreme_values() {
    let mut heap = FastHeap::min_heap();
    heap.extend([i64::MAX, 0, i64::MIN, -1, i64::MAX, i64::MIN]);
    let out: Vec<i64> = (0..6).map(|_| heap.pop()).collect();
    assert_eq!(out, vec![i64::MIN, i64::MIN, -1, 0, i64::MAX, i64::MAX]);
}

#[test]
fn test_left_child_wins_ties() {
    let mut heap = FastHeap::new(|a: &(i32, char), b: &(i32, char)| a.0 < b.0);
    heap.push((0, 'r'));
    heap.push((5, 'L'));
    heap.push((5, 'R'));
    heap.push((9, 'z'));

    // (9, 'z') replaces the root and must sink toward the left child,
    // since the right child is not strictly better
    assert_eq!(heap.pop(), (0, 'r'));
    assert_eq!(heap.peek(), &(5, 'L'));
    assert_eq!(heap.get(1), Some(&(9, 'z')));
    assert_eq!(heap.get(2), Some(&(5, 'R')));
}

// ============================================================================
// Fix
// ============================================================================

#[test]
fn test_fix_unchanged_element_is_noop() {
    let mut heap = FastHeap::min_heap();
    heap.extend([1, 2, 3, 4, 5, 6, 7]);
    let before: Vec<i32> = (0..heap.len()).map(|i| *heap.get(i).unwrap()).collect();
    for i in 0..heap.len() {
        heap.fix(i);
    }
    let after: Vec<i32> = (0..heap.len()).map(|i| *heap.get(i).unwrap()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_fix_leaf_rises_to_root() {
    let mut heap = FastHeap::min_heap();
    heap.extend(10..25);
    let leaf = heap.len() - 1;
    heap.update(leaf, |x| *x = 0);
    assert_eq!(*heap.peek(), 0);
}

#[test]
fn test_fix_root_sinks_to_leaf() {
    let mut heap = FastHeap::min_heap();
    heap.extend(10..25);
    heap.update(0, |x| *x = 100);
    assert_eq!(*heap.peek(), 11);
    let mut last = i32::MIN;
    while !heap.is_empty() {
        let next = heap.pop();
        assert!(next >= last);
        last = next;
    }
    assert_eq!(last, 100);
}

#[test]
fn test_fix_through_shared_cells() {
    let keys: Vec<Rc<Cell<u32>>> = (0..32).map(|i| Rc::new(Cell::new(i))).collect();
    let mut heap = FastHeap::new(|a: &Rc<Cell<u32>>, b: &Rc<Cell<u32>>| a.get() < b.get());
    heap.extend(keys.iter().cloned());

    // raise the current minimum above everything else
    heap.peek().set(1_000);
    heap.fix(0);
    assert_eq!(heap.peek().get(), 1);

    let mut order = Vec::new();
    while !heap.is_empty() {
        order.push(heap.pop().get());
    }
    let mut expected: Vec<u32> = (1..32).collect();
    expected.push(1_000);
    assert_eq!(order, expected);
}

// ============================================================================
// Storage
// ============================================================================

#[test]
fn test_floor_capacity() {
    let heap: FastHeap<u8, MinOrder> = FastHeap::with_capacity(0, MinOrder);
    assert_eq!(heap.capacity(), MIN_CAPACITY);
    let heap: FastHeap<u8, MinOrder> = FastHeap::with_capacity(MIN_CAPACITY - 1, MinOrder);
    assert_eq!(heap.capacity(), MIN_CAPACITY);
}

#[test]
fn test_large_seed_capacity_halves_per_pop() {
    let mut heap = FastHeap::with_capacity(1_000, MinOrder);
    heap.push(1u32);
    heap.push(2u32);
    assert_eq!(heap.capacity(), 1_000);
    heap.pop();
    // one pop shrinks by half at most
    assert_eq!(heap.capacity(), 500);
    heap.pop();
    assert_eq!(heap.capacity(), 250);
    assert!(heap.is_empty());
}

#[test]
fn test_zero_sized_elements() {
    let mut heap = FastHeap::new(|_: &(), _: &()| false);
    for _ in 0..100 {
        heap.push(());
    }
    assert_eq!(heap.len(), 100);
    for _ in 0..100 {
        heap.pop();
    }
    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), MIN_CAPACITY);
}

#[test]
fn test_dropped_heap_releases_elements() {
    let tracked = Rc::new(());
    {
        let mut heap = FastHeap::new(|a: &(i32, Rc<()>), b: &(i32, Rc<()>)| a.0 < b.0);
        for i in 0..40 {
            heap.push((i, Rc::clone(&tracked)));
        }
        for _ in 0..25 {
            heap.pop();
        }
        assert_eq!(Rc::strong_count(&tracked), 16);
    }
    assert_eq!(Rc::strong_count(&tracked), 1);
}

//! The shared priority queue contract
//!
//! All six queue implementations in this crate implement [`PriorityQueue`].
//! The trait is deliberately close to the standard `BinaryHeap` surface
//! (`push`, `pop -> Option`, `front -> Option`, `len`, `is_empty`) with two
//! additions: the comparator is a value carried by the queue and readable via
//! [`PriorityQueue::order`], and [`PriorityQueue::dump`] exposes the raw
//! backing-store order for diagnostics and invariant tests.

use crate::order::PriorityOrder;

/// An associative queue: `pop` and `front` always act on the element with the
/// highest priority under the queue's [`PriorityOrder`], regardless of
/// insertion position.
///
/// Calling `front` or `pop` on an empty queue returns `None`; there are no
/// panicking variants. `pop` returns the removed element by value.
///
/// Implementations differ only in backing-store organization and the
/// resulting cost profile:
///
/// | Implementation | stable | push | pop | front |
/// |----------------|--------|------|-----|-------|
/// | [`ScanListQueue`](crate::scan_list::ScanListQueue) | yes | O(1) | O(n) | O(n) |
/// | [`SortedListQueue`](crate::sorted_list::SortedListQueue) | yes | O(n) | O(1) | O(1) |
/// | [`UnstableScanQueue`](crate::scan_deque::UnstableScanQueue) | no | O(1)* | O(n) | O(n) |
/// | [`StableScanQueue`](crate::scan_deque::StableScanQueue) | yes | O(1)* | O(n) | O(n) |
/// | [`SortedVecQueue`](crate::sorted_vec::SortedVecQueue) | yes | O(n) | O(1) | O(1) |
/// | [`BinaryHeapQueue`](crate::binary_heap::BinaryHeapQueue) | no | O(log n) | O(log n) | O(1) |
///
/// \* amortized. "Stable" means elements of equal priority are extracted in
/// the order they were pushed.
pub trait PriorityQueue<T, P: PriorityOrder<T>> {
    /// Creates an empty queue with a default-constructed ordering.
    fn new() -> Self
    where
        Self: Sized,
        P: Default;

    /// Creates an empty queue using the supplied ordering.
    fn with_order(order: P) -> Self
    where
        Self: Sized;

    /// Inserts an element. Increases `len` by one.
    fn push(&mut self, item: T);

    /// Removes and returns a highest-priority element, or `None` when empty.
    ///
    /// Exactly one occurrence is removed; all other elements keep their
    /// logical multiset membership.
    fn pop(&mut self) -> Option<T>;

    /// Returns a reference to a highest-priority element without removing it,
    /// or `None` when empty.
    ///
    /// The reference is invalidated by the next mutating call.
    fn front(&self) -> Option<&T>;

    /// Returns the number of elements currently in the queue.
    fn len(&self) -> usize;

    /// Returns true iff the queue holds no elements.
    fn is_empty(&self) -> bool;

    /// Removes every element. The queue remains usable.
    fn clear(&mut self);

    /// Read-only access to the queue's ordering.
    fn order(&self) -> &P;

    /// The elements in raw backing-store order.
    ///
    /// For diagnostics and tests only: the order is an implementation detail
    /// (push order for the scan queues, ascending priority for the sorted
    /// queues, heap shape for the heap queue) and callers must not rely on it
    /// for correctness.
    fn dump(&self) -> Vec<&T>;
}

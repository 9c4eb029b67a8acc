//! Sorting by queue drain
//!
//! Pushing a whole sequence into any of the queues and draining it yields the
//! elements in descending priority order — a selection/heap sort depending on
//! the variant chosen. This module packages that drain as a function, mostly
//! as a demonstration that the six variants are observably interchangeable.
//!
//! ```rust
//! use linear_priority_queues::pqsort::pqsort;
//!
//! assert_eq!(pqsort([5, 1, 4, 2, 8, 3]), vec![8, 5, 4, 3, 2, 1]);
//! ```

use crate::binary_heap::BinaryHeapQueue;
use crate::order::{Natural, PriorityOrder};
use crate::traits::PriorityQueue;

/// Sorts `items` into descending priority order by pushing them all into a
/// queue of type `Q` and draining it.
///
/// The queue variant only affects running time; the output is the same for
/// all six (up to tie order, which follows each variant's documented
/// stability).
pub fn pqsort_with<T, P, Q, I>(items: I, order: P) -> Vec<T>
where
    P: PriorityOrder<T>,
    Q: PriorityQueue<T, P>,
    I: IntoIterator<Item = T>,
{
    let mut queue = Q::with_order(order);
    for item in items {
        queue.push(item);
    }
    let mut sorted = Vec::with_capacity(queue.len());
    while let Some(item) = queue.pop() {
        sorted.push(item);
    }
    sorted
}

/// Sorts `items` descending by their `Ord` instance using the heap queue,
/// the O(n log n) variant.
pub fn pqsort<T: Ord>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    pqsort_with::<T, Natural, BinaryHeapQueue<T, Natural>, _>(items, Natural)
}

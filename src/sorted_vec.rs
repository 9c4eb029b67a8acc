//! Order-maintaining vector queue
//!
//! The `Vec` store is kept sorted ascending by priority at all times, so the
//! last element is always the highest-priority one. Insertion finds its spot
//! with a [`lower_bound`](crate::algorithm::lower_bound) binary search and
//! shifts the tail; extraction is a `Vec::pop`.
//!
//! # Time Complexity
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `push`    | O(n)       | O(log n) search, O(n) shift |
//! | `pop`     | O(1)       | |
//! | `front`   | O(1)       | |
//!
//! As in [`SortedListQueue`](crate::sorted_list::SortedListQueue), a new
//! element lands before any existing equals, so back-end extraction drains
//! equal-priority elements FIFO: the queue is stable.
//!
//! # Example
//!
//! ```rust
//! use linear_priority_queues::{PriorityQueue, SortedVecQueue};
//! use linear_priority_queues::order::Natural;
//!
//! let mut queue: SortedVecQueue<i32, Natural> = SortedVecQueue::new();
//! queue.extend([3, 8, 5]);
//!
//! assert_eq!(queue.dump(), vec![&3, &5, &8]);
//! assert_eq!(queue.front(), Some(&8));
//! assert_eq!(queue.pop(), Some(8));
//! ```

use crate::algorithm;
use crate::order::PriorityOrder;
use crate::traits::PriorityQueue;

/// A sorted vector-backed priority queue; see the [module docs](self).
#[derive(Debug)]
pub struct SortedVecQueue<T, P> {
    order: P,
    store: Vec<T>,
}

impl<T, P: PriorityOrder<T>> PriorityQueue<T, P> for SortedVecQueue<T, P> {
    fn new() -> Self
    where
        P: Default,
    {
        Self::with_order(P::default())
    }

    fn with_order(order: P) -> Self {
        Self {
            order,
            store: Vec::new(),
        }
    }

    fn push(&mut self, item: T) {
        let at = algorithm::lower_bound(&self.store, &item, &self.order);
        self.store.insert(at, item);
    }

    fn pop(&mut self) -> Option<T> {
        self.store.pop()
    }

    fn front(&self) -> Option<&T> {
        self.store.last()
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn clear(&mut self) {
        self.store.clear();
    }

    fn order(&self) -> &P {
        &self.order
    }

    fn dump(&self) -> Vec<&T> {
        self.store.iter().collect()
    }
}

impl<T, P: PriorityOrder<T> + Default> Default for SortedVecQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PriorityOrder<T>> Extend<T> for SortedVecQueue<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

//! Order-maintaining linked-list queue
//!
//! The `LinkedList` store is kept sorted ascending by priority at all times,
//! so the back element is always the highest-priority one. Insertion walks
//! the list to the insertion point and splices; extraction is a `pop_back`.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(n)       |
//! | `pop`     | O(1)       |
//! | `front`   | O(1)       |
//!
//! A new element lands *before* any existing elements of equal priority, so
//! draining from the back yields equal-priority elements in push order
//! (FIFO): the queue is stable.
//!
//! # Example
//!
//! ```rust
//! use linear_priority_queues::{PriorityQueue, SortedListQueue};
//! use linear_priority_queues::order::Natural;
//!
//! let mut queue: SortedListQueue<i32, Natural> = SortedListQueue::new();
//! queue.extend([3, 8, 5]);
//!
//! assert_eq!(queue.dump(), vec![&3, &5, &8]);
//! assert_eq!(queue.pop(), Some(8));
//! ```

use std::collections::LinkedList;

use crate::order::PriorityOrder;
use crate::traits::PriorityQueue;

/// A sorted list-backed priority queue; see the [module docs](self).
#[derive(Debug)]
pub struct SortedListQueue<T, P> {
    order: P,
    store: LinkedList<T>,
}

impl<T, P: PriorityOrder<T>> PriorityQueue<T, P> for SortedListQueue<T, P> {
    fn new() -> Self
    where
        P: Default,
    {
        Self::with_order(P::default())
    }

    fn with_order(order: P) -> Self {
        Self {
            order,
            store: LinkedList::new(),
        }
    }

    fn push(&mut self, item: T) {
        let order = &self.order;
        // First position whose element does not rank below the new one:
        // inserting there keeps the list ascending and places the newcomer
        // before its equals.
        let at = self
            .store
            .iter()
            .take_while(|existing| order.less(existing, &item))
            .count();
        let mut tail = self.store.split_off(at);
        self.store.push_back(item);
        self.store.append(&mut tail);
    }

    fn pop(&mut self) -> Option<T> {
        self.store.pop_back()
    }

    fn front(&self) -> Option<&T> {
        self.store.back()
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

impl<T, P: PriorityOrder<T> + Default> Default for SortedListQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PriorityOrder<T>> Extend<T> for SortedListQueue<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

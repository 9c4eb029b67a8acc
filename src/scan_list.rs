//! Unordered linked-list queue with linear max-scan
//!
//! Elements are kept in push order in a `LinkedList`; the highest-priority
//! element is located by a full [`max_element`](crate::algorithm::max_element)
//! scan on every `front`/`pop`.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(1)       |
//! | `pop`     | O(n)       |
//! | `front`   | O(n)       |
//!
//! Removal is by position, not by value equality, so duplicate elements are
//! unambiguous: exactly the scanned occurrence is removed. Because the scan
//! keeps the first of equal-priority elements and removal leaves every other
//! element in place, extraction is FIFO within equal priorities.
//!
//! # Example
//!
//! ```rust
//! use linear_priority_queues::{PriorityQueue, ScanListQueue};
//! use linear_priority_queues::order::Natural;
//!
//! let mut queue: ScanListQueue<i32, Natural> = ScanListQueue::new();
//! queue.push(3);
//! queue.push(8);
//! queue.push(5);
//!
//! assert_eq!(queue.front(), Some(&8));
//! assert_eq!(queue.pop(), Some(8));
//! assert_eq!(queue.pop(), Some(5));
//! assert_eq!(queue.pop(), Some(3));
//! assert_eq!(queue.pop(), None);
//! ```

use std::collections::LinkedList;

use crate::algorithm;
use crate::order::PriorityOrder;
use crate::traits::PriorityQueue;

/// An unordered list-backed priority queue; see the [module docs](self).
#[derive(Debug)]
pub struct ScanListQueue<T, P> {
    order: P,
    store: LinkedList<T>,
}

impl<T, P: PriorityOrder<T>> PriorityQueue<T, P> for ScanListQueue<T, P> {
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
        self.store.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        let (index, _) = algorithm::max_element(self.store.iter(), &self.order)?;
        // Positional removal: split at the scanned element, detach it, splice
        // the tail back. Order of the survivors is untouched.
        let mut tail = self.store.split_off(index);
        let item = tail.pop_front();
        self.store.append(&mut tail);
        item
    }

    fn front(&self) -> Option<&T> {
        algorithm::max_element(self.store.iter(), &self.order).map(|(_, item)| item)
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

impl<T, P: PriorityOrder<T> + Default> Default for ScanListQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PriorityOrder<T>> Extend<T> for ScanListQueue<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

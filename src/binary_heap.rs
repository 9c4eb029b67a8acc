//! Implicit binary-heap queue
//!
//! The `Vec` store is interpreted as a complete binary tree: the children of
//! index `i` sit at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. The
//! shape invariant — no child outranks its parent — is restored after every
//! mutation by the [`push_heap`](crate::algorithm::push_heap) /
//! [`pop_heap`](crate::algorithm::pop_heap) sift pair, which makes index 0
//! the highest-priority element at all times.
//!
//! `front` is therefore a direct O(1) read of index 0. (Some older
//! descriptions of this layout re-scan the whole array in `front`; the shape
//! invariant makes that redundant.)
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `front`   | O(1)       |
//!
//! Extraction order among equal-priority elements is unspecified: sifting
//! moves elements across the array, so the heap queue is not stable.
//!
//! # Example
//!
//! ```rust
//! use linear_priority_queues::{BinaryHeapQueue, PriorityQueue};
//! use linear_priority_queues::order::Natural;
//!
//! let mut queue: BinaryHeapQueue<i32, Natural> = BinaryHeapQueue::new();
//! queue.extend([3, 8, 5]);
//!
//! assert_eq!(queue.front(), Some(&8));
//! assert_eq!(queue.pop(), Some(8));
//! assert_eq!(queue.pop(), Some(5));
//! assert_eq!(queue.pop(), Some(3));
//! ```

use crate::algorithm;
use crate::order::PriorityOrder;
use crate::traits::PriorityQueue;

/// A binary-heap priority queue; see the [module docs](self).
#[derive(Debug)]
pub struct BinaryHeapQueue<T, P> {
    order: P,
    store: Vec<T>,
}

impl<T, P: PriorityOrder<T>> PriorityQueue<T, P> for BinaryHeapQueue<T, P> {
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
        self.store.push(item);
        algorithm::push_heap(&mut self.store, &self.order);
    }

    fn pop(&mut self) -> Option<T> {
        algorithm::pop_heap(&mut self.store, &self.order);
        self.store.pop()
    }

    fn front(&self) -> Option<&T> {
        self.store.first()
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

impl<T, P: PriorityOrder<T> + Default> Default for BinaryHeapQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PriorityOrder<T>> Extend<T> for BinaryHeapQueue<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::is_heap;
    use crate::order::{Natural, Reversed};

    fn assert_heap_shape(queue: &BinaryHeapQueue<i32, Natural>) {
        let raw: Vec<i32> = queue.dump().into_iter().copied().collect();
        assert!(is_heap(&raw, &Natural), "heap shape violated: {raw:?}");
    }

    #[test]
    fn test_basic_operations() {
        let mut queue: BinaryHeapQueue<i32, Natural> = BinaryHeapQueue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.front(), None);
        assert_eq!(queue.pop(), None);

        queue.push(3);
        queue.push(1);
        queue.push(2);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.front(), Some(&3));

        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_shape_invariant_after_every_mutation() {
        let mut queue: BinaryHeapQueue<i32, Natural> = BinaryHeapQueue::new();
        for v in [5, 1, 4, 2, 8, 3, 8, 0, 6] {
            queue.push(v);
            assert_heap_shape(&queue);
        }
        while queue.pop().is_some() {
            assert_heap_shape(&queue);
        }
    }

    #[test]
    fn test_front_is_root() {
        let mut queue: BinaryHeapQueue<i32, Natural> = BinaryHeapQueue::new();
        queue.extend([2, 7, 5]);
        assert_eq!(queue.front(), queue.dump().first().copied());
    }

    #[test]
    fn test_min_queue_ordering() {
        let mut queue: BinaryHeapQueue<i32, Reversed> = BinaryHeapQueue::new();
        queue.extend([3, 1, 2]);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut queue: BinaryHeapQueue<i32, Natural> = BinaryHeapQueue::new();
        queue.extend([1, 1, 1]);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_clear() {
        let mut queue: BinaryHeapQueue<i32, Natural> = BinaryHeapQueue::new();
        queue.extend([4, 9, 2]);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut queue: BinaryHeapQueue<i32, Natural> = BinaryHeapQueue::new();
        for i in 0..100 {
            queue.push(i);
        }
        for i in (0..100).rev() {
            assert_eq!(queue.pop(), Some(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut queue: BinaryHeapQueue<i32, Natural> = BinaryHeapQueue::new();
        for i in (0..100).rev() {
            queue.push(i);
        }
        for i in (0..100).rev() {
            assert_eq!(queue.pop(), Some(i));
        }
    }
}

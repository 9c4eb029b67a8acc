//! Unordered deque queue with linear max-scan and pluggable removal
//!
//! Elements are kept in push order in a `VecDeque`; `front`/`pop` locate the
//! highest-priority element with a full scan. What happens after the scan is
//! a policy choice, expressed as the [`RemovalPolicy`] type parameter:
//!
//! - [`SwapRemoval`]: overwrite the scanned slot with the back element and
//!   truncate (`VecDeque::swap_remove_back`). O(1) after the scan, but the
//!   moved element loses its place — **not stable**.
//! - [`ShiftRemoval`]: leapfrog every later element down one slot and
//!   truncate (`VecDeque::remove`). O(n) after the scan, but every surviving
//!   element keeps its relative position — **stable**.
//!
//! Use the [`UnstableScanQueue`] and [`StableScanQueue`] aliases rather than
//! naming the policy directly.
//!
//! # Time Complexity
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `push`    | O(1)*      | amortized |
//! | `pop`     | O(n)       | scan dominates both policies |
//! | `front`   | O(n)       | |
//!
//! # Example
//!
//! ```rust
//! use linear_priority_queues::{PriorityQueue, StableScanQueue, UnstableScanQueue};
//! use linear_priority_queues::order::Natural;
//!
//! let mut queue: StableScanQueue<i32, Natural> = StableScanQueue::new();
//! queue.extend([3, 8, 5]);
//! assert_eq!(queue.pop(), Some(8));
//! assert_eq!(queue.dump(), vec![&3, &5]); // push order preserved
//!
//! let mut queue: UnstableScanQueue<i32, Natural> = UnstableScanQueue::new();
//! queue.extend([8, 3, 5]);
//! assert_eq!(queue.pop(), Some(8));
//! assert_eq!(queue.dump(), vec![&5, &3]); // back element moved into the gap
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::algorithm;
use crate::order::PriorityOrder;
use crate::traits::PriorityQueue;

/// How a scanned element is removed from the deque store.
///
/// Implementations must remove exactly the element at `index` and may or may
/// not preserve the relative order of the survivors; see [`Self::STABLE`].
pub trait RemovalPolicy {
    /// True iff the policy preserves the relative order of surviving elements.
    const STABLE: bool;

    /// Removes and returns the element at `index`, or `None` if out of bounds.
    fn remove<T>(store: &mut VecDeque<T>, index: usize) -> Option<T>;
}

/// Swap-with-back removal: O(1), not stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapRemoval;

impl RemovalPolicy for SwapRemoval {
    const STABLE: bool = false;

    fn remove<T>(store: &mut VecDeque<T>, index: usize) -> Option<T> {
        store.swap_remove_back(index)
    }
}

/// Leapfrog removal: every element after `index` shifts down one slot.
/// O(n), stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftRemoval;

impl RemovalPolicy for ShiftRemoval {
    const STABLE: bool = true;

    fn remove<T>(store: &mut VecDeque<T>, index: usize) -> Option<T> {
        store.remove(index)
    }
}

/// An unordered deque-backed priority queue; see the [module docs](self).
#[derive(Debug)]
pub struct ScanDequeQueue<T, P, R> {
    order: P,
    store: VecDeque<T>,
    removal: PhantomData<R>,
}

/// Deque scan queue with [`SwapRemoval`]: fastest removal, not stable.
pub type UnstableScanQueue<T, P> = ScanDequeQueue<T, P, SwapRemoval>;

/// Deque scan queue with [`ShiftRemoval`]: stable removal.
pub type StableScanQueue<T, P> = ScanDequeQueue<T, P, ShiftRemoval>;

impl<T, P, R> PriorityQueue<T, P> for ScanDequeQueue<T, P, R>
where
    P: PriorityOrder<T>,
    R: RemovalPolicy,
{
    fn new() -> Self
    where
        P: Default,
    {
        Self::with_order(P::default())
    }

    fn with_order(order: P) -> Self {
        Self {
            order,
            store: VecDeque::new(),
            removal: PhantomData,
        }
    }

    fn push(&mut self, item: T) {
        self.store.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        let (index, _) = algorithm::max_element(self.store.iter(), &self.order)?;
        R::remove(&mut self.store, index)
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

impl<T, P, R> Default for ScanDequeQueue<T, P, R>
where
    P: PriorityOrder<T> + Default,
    R: RemovalPolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, R> Extend<T> for ScanDequeQueue<T, P, R>
where
    P: PriorityOrder<T>,
    R: RemovalPolicy,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

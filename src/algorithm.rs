//! Generic sequence algorithms shared by the queue implementations
//!
//! Three families live here:
//!
//! - [`max_element`]: the linear max-scan used by the unordered-store queues.
//! - [`lower_bound`]: insertion-point search used by the sorted-store queues.
//! - [`push_heap`] / [`pop_heap`] / [`is_heap`]: the sift algorithms over an
//!   implicit binary tree in a slice, used by the heap queue.
//!
//! All of them take the ordering by reference and never allocate.

use crate::order::PriorityOrder;

/// Returns the index and a reference to the first highest-priority element,
/// or `None` for an empty sequence.
///
/// "First" means earliest in iteration order: the current best is replaced
/// only when a later element is *strictly* greater, so among equal-priority
/// elements the earliest occurrence wins. The scan queues rely on this for
/// their stability behavior.
pub fn max_element<'a, T: 'a, P, I>(items: I, order: &P) -> Option<(usize, &'a T)>
where
    P: PriorityOrder<T>,
    I: IntoIterator<Item = &'a T>,
{
    let mut iter = items.into_iter();
    let mut best = (0, iter.next()?);
    for (offset, item) in iter.enumerate() {
        if order.less(best.1, item) {
            best = (offset + 1, item);
        }
    }
    Some(best)
}

/// Returns the first index in an ascending-sorted slice at which `item` can
/// be inserted without breaking the order, placing it *before* any elements
/// of equal priority.
///
/// Binary search: O(log n) comparisons. `sorted` must already be ascending
/// under `order`.
pub fn lower_bound<T, P>(sorted: &[T], item: &T, order: &P) -> usize
where
    P: PriorityOrder<T>,
{
    let mut low = 0;
    let mut high = sorted.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if order.less(&sorted[mid], item) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Restores the heap shape after appending a new element at the end of
/// `heap`: sifts the last element up until its parent outranks it.
///
/// O(log n) swaps. No-op on empty or single-element slices.
pub fn push_heap<T, P>(heap: &mut [T], order: &P)
where
    P: PriorityOrder<T>,
{
    let mut child = match heap.len() {
        0 | 1 => return,
        n => n - 1,
    };
    while child > 0 {
        let parent = (child - 1) / 2;
        if order.less(&heap[parent], &heap[child]) {
            heap.swap(parent, child);
            child = parent;
        } else {
            break;
        }
    }
}

/// Moves the highest-priority element to the end of `heap` and restores the
/// heap shape over the remaining prefix: swaps root and last, then sifts the
/// new root down.
///
/// After this call the caller truncates the last slot (`Vec::pop`). O(log n)
/// swaps. No-op on slices shorter than two.
pub fn pop_heap<T, P>(heap: &mut [T], order: &P)
where
    P: PriorityOrder<T>,
{
    let n = heap.len();
    if n < 2 {
        return;
    }
    heap.swap(0, n - 1);
    sift_down(&mut heap[..n - 1], order);
}

/// Sifts the root down until neither child outranks it.
fn sift_down<T, P>(heap: &mut [T], order: &P)
where
    P: PriorityOrder<T>,
{
    let n = heap.len();
    let mut parent = 0;
    loop {
        let left = 2 * parent + 1;
        if left >= n {
            break;
        }
        let right = left + 1;
        let child = if right < n && order.less(&heap[left], &heap[right]) {
            right
        } else {
            left
        };
        if order.less(&heap[parent], &heap[child]) {
            heap.swap(parent, child);
            parent = child;
        } else {
            break;
        }
    }
}

/// Returns true iff `heap` satisfies the heap shape: no element outranks its
/// parent at index `(i - 1) / 2`.
pub fn is_heap<T, P>(heap: &[T], order: &P) -> bool
where
    P: PriorityOrder<T>,
{
    (1..heap.len()).all(|i| !order.less(&heap[(i - 1) / 2], &heap[i]))
}

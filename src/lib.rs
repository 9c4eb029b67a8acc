//! Priority queues over linear backing stores
//!
//! This crate provides six interchangeable priority queue implementations
//! sharing one contract ([`PriorityQueue`]) and one comparator abstraction
//! ([`order::PriorityOrder`]), differing only in how the backing sequence is
//! organized and what that costs:
//!
//! | Type | store | organization | stable | push | pop | front |
//! |------|-------|--------------|--------|------|-----|-------|
//! | [`ScanListQueue`] | `LinkedList` | push order | yes | O(1) | O(n) | O(n) |
//! | [`SortedListQueue`] | `LinkedList` | sorted ascending | yes | O(n) | O(1) | O(1) |
//! | [`UnstableScanQueue`] | `VecDeque` | push order | no | O(1)* | O(n) | O(n) |
//! | [`StableScanQueue`] | `VecDeque` | push order | yes | O(1)* | O(n) | O(n) |
//! | [`SortedVecQueue`] | `Vec` | sorted ascending | yes | O(n) | O(1) | O(1) |
//! | [`BinaryHeapQueue`] | `Vec` | implicit binary heap | no | O(log n) | O(log n) | O(1) |
//!
//! \* amortized.
//!
//! "Stable" means elements of equal priority are extracted in push order. The
//! two deque queues are the same component under two removal policies
//! (swap-with-back vs. leapfrog shift); see [`scan_deque`].
//!
//! All queues are plain single-threaded values: no interior mutability, no
//! locking. Wrap a queue in external synchronization if it must be shared.
//!
//! # Example
//!
//! ```rust
//! use linear_priority_queues::{BinaryHeapQueue, PriorityQueue};
//! use linear_priority_queues::order::Natural;
//!
//! let mut queue: BinaryHeapQueue<i32, Natural> = BinaryHeapQueue::new();
//! queue.extend([5, 1, 4, 2, 8, 3]);
//!
//! let mut drained = Vec::new();
//! while let Some(v) = queue.pop() {
//!     drained.push(v);
//! }
//! assert_eq!(drained, vec![8, 5, 4, 3, 2, 1]);
//! ```

pub mod algorithm;
pub mod binary_heap;
pub mod order;
pub mod pqsort;
pub mod scan_deque;
pub mod scan_list;
pub mod sorted_list;
pub mod sorted_vec;
pub mod traits;

pub use binary_heap::BinaryHeapQueue;
pub use scan_deque::{ScanDequeQueue, StableScanQueue, UnstableScanQueue};
pub use scan_list::ScanListQueue;
pub use sorted_list::SortedListQueue;
pub use sorted_vec::SortedVecQueue;
pub use traits::PriorityQueue;

//! Priority comparators
//!
//! Every queue in this crate is generic over a [`PriorityOrder`]: a strict
//! weak ordering where `less(a, b) == true` means "`a` has strictly lower
//! priority than `b`". The element with the *highest* priority under the
//! ordering is the one returned by `front` and removed by `pop`.
//!
//! Two ready-made orderings are provided ([`Natural`] and [`Reversed`]), and
//! any `Fn(&T, &T) -> bool` closure can be used directly:
//!
//! ```rust
//! use linear_priority_queues::{PriorityQueue, SortedVecQueue};
//!
//! // order pairs by their first field only
//! let mut queue = SortedVecQueue::with_order(|a: &(i32, &str), b: &(i32, &str)| a.0 < b.0);
//! queue.push((2, "low"));
//! queue.push((7, "high"));
//! assert_eq!(queue.front(), Some(&(7, "high")));
//! ```

/// A strict weak ordering over `T` used to rank queue elements.
///
/// `less(a, b)` returning `true` means `a` has strictly lower priority than
/// `b`. Implementations must satisfy the strict-weak-order laws
/// (irreflexivity, transitivity, transitivity of incomparability). The queues
/// do not and cannot check this: a lawless ordering may corrupt the heap
/// variant's internal shape or misplace insertions in the sorted variants,
/// and that is the caller's responsibility.
pub trait PriorityOrder<T> {
    /// Returns true iff `a` has strictly lower priority than `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Orders elements by their `Ord` instance: the largest value has the
/// highest priority (a max-queue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> PriorityOrder<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Inverts the `Ord` instance: the smallest value has the highest priority
/// (a min-queue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed;

impl<T: Ord> PriorityOrder<T> for Reversed {
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

impl<T, F> PriorityOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

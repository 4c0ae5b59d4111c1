//! Sorting capabilities.
//!
//! Every algorithm here is generic over [`Element`], so a single sorter value
//! sorts both raw numbers and [`CountingElement`](crate::CountingElement)s.
//! Algorithms move data only through [`Element::assign`] and
//! [`Element::assign_from`], which is what makes their assignments
//! observable.

mod heap;
mod merge;
mod quick;
mod simple;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;

pub use heap::HeapSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use simple::{BubbleSort, InsertionSort, SelectionSort, StdSort};

/// In-place sorting of a contiguous buffer.
///
/// Implementations reorder `data` into non-descending order according to
/// `E`'s own ordering.
pub trait Sorter<E> {
    /// Sorts `data` in place.
    fn sort(&self, data: &mut [E]);

    /// Short name used in reports and logs.
    fn name(&self) -> &'static str;
}

/// Swaps two slots through a temporary, like a three-step swap.
///
/// Performs exactly two assignments, also when `a == b`.
///
/// # Panics
///
/// Panics if either index is out of bounds.
pub fn swap_elements<E: Element>(data: &mut [E], a: usize, b: usize) {
    let tmp = data[a].clone();
    copy_element(data, b, a);
    data[b].assign(tmp);
}

// Stores a copy of data[src] into data[dst] with a single assignment.
pub(crate) fn copy_element<E: Element>(data: &mut [E], src: usize, dst: usize) {
    if src < dst {
        let (lo, hi) = data.split_at_mut(dst);
        hi[0].assign_from(&lo[src]);
    } else if src > dst {
        let (lo, hi) = data.split_at_mut(src);
        lo[dst].assign_from(&hi[0]);
    } else {
        let value = data[src].clone();
        data[dst].assign(value);
    }
}

/// Returns true if `data` is in non-descending order.
///
/// # Example
///
/// ```
/// use sortbench_core::is_sorted;
///
/// assert!(is_sorted(&[1, 1, 2, 5]));
/// assert!(!is_sorted(&[1, 3, 2]));
/// assert!(is_sorted::<i32>(&[]));
/// ```
pub fn is_sorted<E: PartialOrd>(data: &[E]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Returns true if no element of `data` should come before its predecessor.
///
/// `before(a, b)` is a strict ordering: true when `a` belongs in front of `b`.
///
/// ```
/// use sortbench_core::is_sorted_by;
///
/// assert!(is_sorted_by(&[9, 4, 4, 1], |a, b| a > b));
/// assert!(!is_sorted_by(&[1, 3, 4], |a, b| a > b));
/// ```
pub fn is_sorted_by<E, F>(data: &[E], mut before: F) -> bool
where
    F: FnMut(&E, &E) -> bool,
{
    data.windows(2).all(|w| !before(&w[1], &w[0]))
}

/// Runtime selection of one of the bundled algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    #[default]
    Quick,
    Heap,
    /// The standard library's stable sort.
    Std,
}

impl Algorithm {
    /// Every bundled algorithm, in declaration order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Std,
    ];

    /// Returns the name accepted by [`FromStr`] and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Std => "std",
        }
    }
}

impl<E: Element> Sorter<E> for Algorithm {
    fn sort(&self, data: &mut [E]) {
        match self {
            Algorithm::Bubble => BubbleSort.sort(data),
            Algorithm::Selection => SelectionSort.sort(data),
            Algorithm::Insertion => InsertionSort.sort(data),
            Algorithm::Merge => MergeSort.sort(data),
            Algorithm::Quick => QuickSort.sort(data),
            Algorithm::Heap => HeapSort.sort(data),
            Algorithm::Std => StdSort.sort(data),
        }
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sorting algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests;

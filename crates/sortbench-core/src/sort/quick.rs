//! Quicksort with Lomuto partitioning.

use super::{swap_elements, Sorter};
use crate::element::Element;

/// Quicksort using the last element as pivot.
///
/// Recurses into the shorter partition and loops over the longer one, so
/// stack depth stays logarithmic even on already-sorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl<E: Element> Sorter<E> for QuickSort {
    fn sort(&self, data: &mut [E]) {
        quick_sort(data);
    }

    fn name(&self) -> &'static str {
        "quick"
    }
}

fn quick_sort<E: Element>(mut data: &mut [E]) {
    while data.len() > 1 {
        let pivot = partition(data);
        let (left, right) = std::mem::take(&mut data).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            data = right;
        } else {
            quick_sort(right);
            data = left;
        }
    }
}

// Moves every element smaller than the pivot in front of it and returns the
// pivot's final index.
fn partition<E: Element>(data: &mut [E]) -> usize {
    let high = data.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if data[j] < data[high] {
            swap_elements(data, store, j);
            store += 1;
        }
    }
    swap_elements(data, store, high);
    store
}

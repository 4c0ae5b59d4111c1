//! Top-down merge sort.

use super::Sorter;
use crate::element::Element;

/// Top-down merge sort.
///
/// Each merge copies both halves into temporaries (construction, not
/// counted) and assigns every slot of the merged range once.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl<E: Element> Sorter<E> for MergeSort {
    fn sort(&self, data: &mut [E]) {
        merge_sort(data);
    }

    fn name(&self) -> &'static str {
        "merge"
    }
}

fn merge_sort<E: Element>(data: &mut [E]) {
    let n = data.len();
    if n < 2 {
        return;
    }
    // The left half gets the extra element on odd lengths.
    let mid = (n + 1) / 2;
    merge_sort(&mut data[..mid]);
    merge_sort(&mut data[mid..]);
    merge(data, mid);
}

fn merge<E: Element>(data: &mut [E], mid: usize) {
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();
    let (mut i, mut j) = (0, 0);

    for slot in data.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            slot.assign_from(&left[i]);
            i += 1;
        } else {
            slot.assign_from(&right[j]);
            j += 1;
        }
    }
}

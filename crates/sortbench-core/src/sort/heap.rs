//! Heap sort over an implicit binary max-heap.

use super::{swap_elements, Sorter};
use crate::element::Element;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl<E: Element> Sorter<E> for HeapSort {
    fn sort(&self, data: &mut [E]) {
        let n = data.len();
        for i in (0..n / 2).rev() {
            sift_down(data, n, i);
        }
        for end in (1..n).rev() {
            swap_elements(data, 0, end);
            sift_down(data, end, 0);
        }
    }

    fn name(&self) -> &'static str {
        "heap"
    }
}

fn sift_down<E: Element>(data: &mut [E], size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < size && data[left] > data[largest] {
            largest = left;
        }
        if right < size && data[right] > data[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        swap_elements(data, root, largest);
        root = largest;
    }
}

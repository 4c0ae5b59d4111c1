//! Quadratic sorts and the standard library baseline.

use std::cmp::Ordering;

use super::{copy_element, swap_elements, Sorter};
use crate::element::Element;

/// Classic bubble sort without early exit.
///
/// Always performs `n(n-1)/2` comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl<E: Element> Sorter<E> for BubbleSort {
    fn sort(&self, data: &mut [E]) {
        let n = data.len();
        if n < 2 {
            return;
        }
        for i in 0..n - 1 {
            for j in 0..n - i - 1 {
                if data[j] > data[j + 1] {
                    swap_elements(data, j, j + 1);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "bubble"
    }
}

/// Selection sort; swaps once per position, even when already in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl<E: Element> Sorter<E> for SelectionSort {
    fn sort(&self, data: &mut [E]) {
        let n = data.len();
        if n < 2 {
            return;
        }
        for i in 0..n - 1 {
            let mut min = i;
            for j in i + 1..n {
                if data[j] < data[min] {
                    min = j;
                }
            }
            swap_elements(data, min, i);
        }
    }

    fn name(&self) -> &'static str {
        "selection"
    }
}

/// Insertion sort shifting larger elements one slot to the right.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl<E: Element> Sorter<E> for InsertionSort {
    fn sort(&self, data: &mut [E]) {
        for i in 1..data.len() {
            let key = data[i].clone();
            let mut j = i;
            while j > 0 && data[j - 1] > key {
                copy_element(data, j - 1, j);
                j -= 1;
            }
            data[j].assign(key);
        }
    }

    fn name(&self) -> &'static str {
        "insertion"
    }
}

/// The standard library's stable sort, compared through `partial_cmp`.
///
/// Its internal moves bypass [`Element::assign`], so only comparisons are
/// observable.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdSort;

impl<E: Element> Sorter<E> for StdSort {
    fn sort(&self, data: &mut [E]) {
        data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    }

    fn name(&self) -> &'static str {
        "std"
    }
}

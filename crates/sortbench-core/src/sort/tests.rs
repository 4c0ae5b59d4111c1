//! Tests for the bundled sorting algorithms.

use proptest::prelude::*;

use super::*;
use crate::counter::OpCounter;

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut expected = values.to_vec();
    expected.sort_unstable();
    expected
}

fn check_algorithm(algorithm: Algorithm, values: &[i32]) {
    let mut data = values.to_vec();
    algorithm.sort(&mut data);
    assert_eq!(data, sorted_copy(values), "{} failed on {:?}", algorithm, values);
}

#[test]
fn test_all_algorithms_handle_edge_lengths() {
    let cases: [&[i32]; 6] = [
        &[],
        &[42],
        &[2, 1],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[3, 3, 1, 3, 1],
    ];
    for algorithm in Algorithm::ALL {
        for case in cases {
            check_algorithm(algorithm, case);
        }
    }
}

#[test]
fn test_all_algorithms_sort_counting_elements() {
    let values = [9, -3, 7, 7, 0, 12, -8, 4];
    for algorithm in Algorithm::ALL {
        let counter = OpCounter::<i32>::new();
        let mut data = counter.wrap_slice(&values);
        algorithm.sort(&mut data);

        let result: Vec<i32> = data.into_iter().map(|e| e.into_inner()).collect();
        assert_eq!(result, sorted_copy(&values), "{}", algorithm);
        assert!(counter.comparisons() > 0, "{} compared nothing", algorithm);
    }
}

#[test]
fn test_floats_sort_like_numbers() {
    let mut data = vec![2.5_f64, -1.0, 0.0, 10.25, -7.5];
    HeapSort.sort(&mut data);
    assert_eq!(data, vec![-7.5, -1.0, 0.0, 2.5, 10.25]);
}

#[test]
fn test_bubble_sort_counts_every_pair() {
    let counter = OpCounter::<i32>::new();
    let mut data = counter.wrap_slice(&[1, 2, 3, 4, 5, 6]);
    BubbleSort.sort(&mut data);
    assert_eq!(counter.comparisons(), 15);
    assert_eq!(counter.assignments(), 0);
}

#[test]
fn test_bubble_sort_reverse_input_swaps_every_pair() {
    let counter = OpCounter::<i32>::new();
    let mut data = counter.wrap_slice(&[4, 3, 2, 1]);
    BubbleSort.sort(&mut data);
    assert_eq!(counter.comparisons(), 6);
    assert_eq!(counter.assignments(), 12);
}

#[test]
fn test_selection_sort_swaps_once_per_position() {
    let counter = OpCounter::<i32>::new();
    let mut data = counter.wrap_slice(&[1, 2, 3, 4, 5]);
    SelectionSort.sort(&mut data);
    assert_eq!(counter.comparisons(), 10);
    assert_eq!(counter.assignments(), 8);
}

#[test]
fn test_insertion_sort_on_sorted_input_is_linear() {
    let counter = OpCounter::<i32>::new();
    let mut data = counter.wrap_slice(&[1, 2, 3, 4, 5]);
    InsertionSort.sort(&mut data);
    assert_eq!(counter.comparisons(), 4);
    assert_eq!(counter.assignments(), 4);
}

#[test]
fn test_merge_sort_assigns_each_slot_per_level() {
    let counter = OpCounter::<i32>::new();
    let mut data = counter.wrap_slice(&[4, 3, 2, 1]);
    MergeSort.sort(&mut data);
    // Two merges of two elements, then one merge of four.
    assert_eq!(counter.assignments(), 8);
}

#[test]
fn test_std_sort_reports_no_assignments() {
    let counter = OpCounter::<i32>::new();
    let mut data = counter.wrap_slice(&[3, 1, 2]);
    StdSort.sort(&mut data);
    assert!(counter.comparisons() > 0);
    assert_eq!(counter.assignments(), 0);
}

#[test]
fn test_swap_elements_assigns_twice() {
    let counter = OpCounter::<i32>::new();
    let mut data = counter.wrap_slice(&[1, 2]);

    swap_elements(&mut data, 0, 1);
    assert_eq!(*data[0].value(), 2);
    assert_eq!(*data[1].value(), 1);
    assert_eq!(counter.assignments(), 2);

    swap_elements(&mut data, 1, 1);
    assert_eq!(*data[1].value(), 1);
    assert_eq!(counter.assignments(), 4);
}

#[test]
fn test_is_sorted() {
    assert!(is_sorted(&[1, 2, 3, 4, 5]));
    assert!(is_sorted(&[1, 1, 1, 1]));
    assert!(is_sorted(&[3]));
    assert!(!is_sorted(&[5, 4, 3, 2, 1]));
    assert!(!is_sorted(&[1, 3, 2]));
}

#[test]
fn test_is_sorted_by_descending() {
    assert!(is_sorted_by(&[3], |a: &i32, b: &i32| a > b));
    assert!(is_sorted_by(&[23, 10, 6, 4, 3, 1], |a, b| a > b));
    assert!(!is_sorted_by(&[1, 3, 4, 6, 10, 23], |a, b| a > b));
}

#[test]
fn test_algorithm_names_round_trip() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.as_str().parse::<Algorithm>(), Ok(algorithm));
        assert_eq!(Sorter::<i32>::name(&algorithm), algorithm.as_str());
    }
    assert_eq!(" Merge ".parse::<Algorithm>(), Ok(Algorithm::Merge));
    assert_eq!(
        "bogo".parse::<Algorithm>(),
        Err(UnknownAlgorithm("bogo".to_string()))
    );
}

proptest! {
    #[test]
    fn prop_every_algorithm_sorts(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let expected = sorted_copy(&values);
        for algorithm in Algorithm::ALL {
            let mut data = values.clone();
            algorithm.sort(&mut data);
            prop_assert_eq!(&data, &expected);
        }
    }

    #[test]
    fn prop_counting_sort_matches_plain_sort(values in prop::collection::vec(-50i64..50, 0..100)) {
        for algorithm in Algorithm::ALL {
            let mut plain = values.clone();
            algorithm.sort(&mut plain);

            let counter = OpCounter::<i64>::new();
            let mut counted = counter.wrap_slice(&values);
            algorithm.sort(&mut counted);

            let unwrapped: Vec<i64> = counted.iter().map(|e| *e.value()).collect();
            prop_assert_eq!(unwrapped, plain);
        }
    }
}

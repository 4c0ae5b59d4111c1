//! Core building blocks for SortBench.
//!
//! - [`element`] - The [`Element`] abstraction sorting algorithms are written
//!   against, and the instrumented [`CountingElement`] wrapper
//! - [`counter`] - [`OpCounter`], the shared comparison/assignment tally
//! - [`sort`] - The [`Sorter`] trait and the classic sorting algorithms
//! - [`generator`] - Seeded value generators feeding benchmark arrays
//!
//! # Counting Comparisons
//!
//! ```
//! use sortbench_core::{BubbleSort, OpCounter, Sorter};
//!
//! let counter = OpCounter::<i32>::new();
//! let mut data = counter.wrap_slice(&[3, 1, 2]);
//!
//! BubbleSort.sort(&mut data);
//!
//! // Bubble sort always inspects n(n-1)/2 pairs.
//! assert_eq!(counter.comparisons(), 3);
//! assert_eq!(data.iter().map(|e| *e.value()).collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

pub mod counter;
pub mod element;
pub mod generator;
pub mod sort;

pub use counter::{OpCounter, OpCounts};
pub use element::{CountingElement, Element};
pub use generator::{
    seeded_engine, Engine, EngineKind, FnGenerator, GeneratorError, RangeFn, RangeGenerator,
    SeedStrategy, UniformGenerator, ValueGenerator,
};
pub use sort::{
    is_sorted, is_sorted_by, swap_elements, Algorithm, BubbleSort, HeapSort, InsertionSort,
    MergeSort, QuickSort, SelectionSort, Sorter, StdSort, UnknownAlgorithm,
};

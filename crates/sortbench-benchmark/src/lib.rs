//! Benchmarking driver for SortBench.
//!
//! Runs trials of a sorting algorithm over generated arrays and records, per
//! trial, the array length, the wall-clock sort duration, and the number of
//! comparisons and assignments the algorithm performed.
//!
//! # Overview
//!
//! Each trial sorts the same generated values twice:
//! - once as raw `T`, timed with a monotonic clock
//! - once wrapped in [`CountingElement`](sortbench_core::CountingElement)s,
//!   to count operations
//!
//! Timing never pays for the counting bookkeeping, and the counts always
//! describe the exact input that was timed.
//!
//! # Example
//!
//! ```
//! use sortbench_benchmark::SortBench;
//! use sortbench_core::{is_sorted, Algorithm, RangeGenerator, Engine};
//!
//! let generator = RangeGenerator::new(-100, 100, Engine::default()).unwrap();
//! let mut bench = SortBench::new(Algorithm::Merge, generator).with_retention(false, true);
//!
//! let stats = bench.run_repeated(64, 3);
//! assert_eq!(stats.len(), 3);
//! assert!(stats.iter().all(|s| s.len() == 64 && s.comparisons() > 0));
//!
//! for sorted in bench.sorted_arrays().unwrap() {
//!     assert!(is_sorted(sorted));
//! }
//! ```

mod error;
mod report;
mod result;
mod runner;

pub use error::{BenchError, Snapshot};
pub use report::{CsvExporter, MarkdownReport};
pub use result::SortStats;
pub use runner::SortBench;

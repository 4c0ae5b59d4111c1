//! Per-trial measurement record.

use std::time::Duration;

use sortbench_core::OpCounts;

/// Measurements from a single trial.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::SortStats;
/// use std::time::Duration;
///
/// let stats = SortStats::new(100, Duration::from_micros(12), 4950, 0);
/// assert_eq!(stats.len(), 100);
/// assert_eq!(stats.duration().as_nanos(), 12_000);
/// assert_eq!(stats.comparisons(), 4950);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortStats {
    len: usize,
    duration: Duration,
    comparisons: u64,
    assignments: u64,
}

impl SortStats {
    pub fn new(len: usize, duration: Duration, comparisons: u64, assignments: u64) -> Self {
        Self {
            len,
            duration,
            comparisons,
            assignments,
        }
    }

    pub(crate) fn from_counts(len: usize, duration: Duration, counts: OpCounts) -> Self {
        Self::new(len, duration, counts.comparisons, counts.assignments)
    }

    /// Length of the sorted array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Wall-clock time of the sort over raw values.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Comparisons performed by the counted sort.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Assignments performed by the counted sort.
    pub fn assignments(&self) -> u64 {
        self.assignments
    }
}

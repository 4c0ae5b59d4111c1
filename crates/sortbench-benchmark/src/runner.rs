//! Benchmark driver.

use std::time::{Duration, Instant};

use sortbench_core::{CountingElement, Element, OpCounter, OpCounts, Sorter, ValueGenerator};
use tracing::{debug, info, trace};

use crate::error::{BenchError, Snapshot};
use crate::result::SortStats;

/// Zero-erasure sorting benchmark.
///
/// Every trial generates an array, sorts it as raw `T` under a monotonic
/// clock, sorts an identical copy of [`CountingElement`]s to count
/// comparisons and assignments, and records one [`SortStats`].
///
/// # Type Parameters
///
/// * `T` - The element type being sorted
/// * `S` - The sorting algorithm, usable on both `T` and `CountingElement<T>`
/// * `G` - The value generator
///
/// # Snapshots
///
/// With retention enabled the driver keeps every trial's array as generated
/// ([`unsorted_arrays`](Self::unsorted_arrays)) and as sorted
/// ([`sorted_arrays`](Self::sorted_arrays)). Each bulk run replaces the
/// results of the previous one.
pub struct SortBench<T, S, G> {
    time_sort: S,
    count_sort: S,
    generator: G,
    counter: OpCounter<T>,
    stats: Vec<SortStats>,
    keep_before: bool,
    keep_after: bool,
    unsorted: Vec<Vec<T>>,
    sorted: Vec<Vec<T>>,
    initialized: bool,
}

impl<T, S, G> SortBench<T, S, G>
where
    T: Element,
    S: Sorter<T> + for<'c> Sorter<CountingElement<'c, T>> + Clone,
    G: ValueGenerator<T>,
{
    /// Creates a benchmark with both kinds of retention disabled.
    ///
    /// The timing and counting passes use two independent copies of `sorter`.
    pub fn new(sorter: S, generator: G) -> Self {
        Self {
            time_sort: sorter.clone(),
            count_sort: sorter,
            generator,
            counter: OpCounter::new(),
            stats: Vec::new(),
            keep_before: false,
            keep_after: false,
            unsorted: Vec::new(),
            sorted: Vec::new(),
            initialized: false,
        }
    }

    /// Sets both retention flags.
    pub fn with_retention(mut self, keep_before: bool, keep_after: bool) -> Self {
        self.keep_before = keep_before;
        self.keep_after = keep_after;
        self
    }

    /// Runs one trial per entry of `sizes`, in order.
    ///
    /// Clears the results and snapshots of any previous run first.
    pub fn run_sizes(&mut self, sizes: &[usize]) -> &[SortStats] {
        self.clear();
        info!(
            event = "bench_start",
            algorithm = self.name(),
            trials = sizes.len() as u64,
            "Starting benchmark over {} sizes",
            sizes.len()
        );
        for &len in sizes {
            self.measure(len);
        }
        self.finish();
        &self.stats
    }

    /// Runs `count` trials, all on arrays of `len` elements.
    ///
    /// Clears the results and snapshots of any previous run first.
    pub fn run_repeated(&mut self, len: usize, count: usize) -> &[SortStats] {
        self.clear();
        info!(
            event = "bench_start",
            algorithm = self.name(),
            trials = count as u64,
            len = len as u64,
            "Starting benchmark of {} trials",
            count
        );
        for _ in 0..count {
            self.measure(len);
        }
        self.finish();
        &self.stats
    }

    /// Returns the sorter's name.
    pub fn name(&self) -> &'static str {
        Sorter::<T>::name(&self.time_sort)
    }

    // Executes a single trial and records its statistics.
    fn measure(&mut self, len: usize) {
        let mut values = self.generator.generate_vec(len);
        self.initialized = true;

        if self.keep_before {
            self.unsorted.push(values.clone());
            trace!(len = len as u64, "Retained pre-sort array");
        }

        // The counting buffer only lives for this block.
        let (duration, counts) = {
            let mut counted = self.counter.wrap_slice(&values);
            let duration = self.time_single(&mut values);
            let counts = self.count_single(&mut counted);
            (duration, counts)
        };

        let stats = SortStats::from_counts(len, duration, counts);
        debug!(
            event = "trial",
            trial = self.stats.len() as u64,
            len = len as u64,
            duration_ns = duration.as_nanos() as u64,
            comparisons = counts.comparisons,
            assignments = counts.assignments,
            "Trial finished"
        );
        self.stats.push(stats);

        if self.keep_after {
            self.sorted.push(values);
            trace!(len = len as u64, "Retained post-sort array");
        }
    }

    fn time_single(&self, values: &mut [T]) -> Duration {
        let start = Instant::now();
        Sorter::<T>::sort(&self.time_sort, values);
        start.elapsed()
    }

    fn count_single(&self, counted: &mut [CountingElement<'_, T>]) -> OpCounts {
        Sorter::<CountingElement<'_, T>>::sort(&self.count_sort, counted);
        self.counter.take()
    }

    fn finish(&self) {
        let total: Duration = self.stats.iter().map(SortStats::duration).sum();
        info!(
            event = "bench_end",
            algorithm = self.name(),
            trials = self.stats.len() as u64,
            duration_ns = total.as_nanos() as u64,
            "Benchmark finished"
        );
    }
}

impl<T, S, G> SortBench<T, S, G> {
    /// Enables or disables keeping arrays as generated.
    pub fn keep_before(&mut self, keep: bool) {
        self.keep_before = keep;
    }

    /// Enables or disables keeping arrays after sorting.
    pub fn keep_after(&mut self, keep: bool) {
        self.keep_after = keep;
    }

    pub fn keeps_before(&self) -> bool {
        self.keep_before
    }

    pub fn keeps_after(&self) -> bool {
        self.keep_after
    }

    /// Returns the statistics of the latest run, in execution order.
    pub fn stats(&self) -> &[SortStats] {
        &self.stats
    }

    /// Returns true once any trial has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the counter used by the counting pass.
    ///
    /// It reads zero between trials.
    pub fn counter(&self) -> &OpCounter<T> {
        &self.counter
    }

    /// Returns the arrays of the latest run as generated.
    ///
    /// # Errors
    ///
    /// [`BenchError::Uninitialized`] if no trial has ever run, and
    /// [`BenchError::NotRetained`] if pre-sort retention is off and the
    /// latest run kept nothing.
    pub fn unsorted_arrays(&self) -> Result<&[Vec<T>], BenchError> {
        self.snapshot(Snapshot::BeforeSort)
    }

    /// Returns the arrays of the latest run after sorting.
    ///
    /// # Errors
    ///
    /// [`BenchError::Uninitialized`] if no trial has ever run, and
    /// [`BenchError::NotRetained`] if post-sort retention is off and the
    /// latest run kept nothing.
    pub fn sorted_arrays(&self) -> Result<&[Vec<T>], BenchError> {
        self.snapshot(Snapshot::AfterSort)
    }

    fn snapshot(&self, kind: Snapshot) -> Result<&[Vec<T>], BenchError> {
        if !self.initialized {
            return Err(BenchError::Uninitialized);
        }
        let (keep, arrays) = match kind {
            Snapshot::BeforeSort => (self.keep_before, &self.unsorted),
            Snapshot::AfterSort => (self.keep_after, &self.sorted),
        };
        if !keep && arrays.is_empty() {
            return Err(BenchError::NotRetained(kind));
        }
        Ok(arrays)
    }

    // Drops everything accumulated by the previous run.
    fn clear(&mut self) {
        self.stats.clear();
        self.unsorted.clear();
        self.sorted.clear();
        self.counter.reset();
    }
}

//! Comparison and assignment tallies shared by counting elements.
//!
//! An [`OpCounter<T>`] is the single source of truth for every
//! [`CountingElement`] that wraps a `T` and was created through it. The
//! element type is part of the counter's type, so counters for different
//! element types are always independent.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::element::CountingElement;

/// A point-in-time reading of an [`OpCounter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    /// Counted comparisons.
    pub comparisons: u64,
    /// Counted assignments.
    pub assignments: u64,
}

/// Shared tally of comparisons and assignments.
///
/// Both kinds of counting start enabled. Disabling one kind pauses it
/// without touching the current totals; [`reset`](Self::reset) zeroes the
/// totals without touching the switches.
///
/// # Example
///
/// ```
/// use sortbench_core::OpCounter;
///
/// let counter = OpCounter::<u32>::new();
/// let a = counter.wrap(1);
/// let b = counter.wrap(2);
///
/// assert!(a < b);
/// assert!(a != b);
/// assert_eq!(counter.comparisons(), 2);
///
/// counter.set_comparison_counting(false);
/// assert!(a <= b);
/// assert_eq!(counter.comparisons(), 2);
/// ```
pub struct OpCounter<T> {
    comparisons: AtomicU64,
    assignments: AtomicU64,
    count_comparisons: AtomicBool,
    count_assignments: AtomicBool,
    _element: PhantomData<fn(T) -> T>,
}

impl<T> OpCounter<T> {
    /// Creates a counter with zeroed totals and both switches on.
    pub fn new() -> Self {
        Self {
            comparisons: AtomicU64::new(0),
            assignments: AtomicU64::new(0),
            count_comparisons: AtomicBool::new(true),
            count_assignments: AtomicBool::new(true),
            _element: PhantomData,
        }
    }

    /// Wraps `value` in an element that reports to this counter.
    ///
    /// Construction is not an assignment and is never counted.
    pub fn wrap(&self, value: T) -> CountingElement<'_, T> {
        CountingElement::new(value, self)
    }

    /// Wraps a copy of every value of `values`, preserving order.
    pub fn wrap_slice(&self, values: &[T]) -> Vec<CountingElement<'_, T>>
    where
        T: Clone,
    {
        values.iter().map(|v| self.wrap(v.clone())).collect()
    }

    /// Creates an element holding `T::default()`.
    pub fn default_element(&self) -> CountingElement<'_, T>
    where
        T: Default,
    {
        self.wrap(T::default())
    }

    /// Zeroes both totals. The counting switches are left as they are.
    pub fn reset(&self) {
        self.comparisons.store(0, Ordering::Relaxed);
        self.assignments.store(0, Ordering::Relaxed);
    }

    /// Returns the number of counted comparisons.
    pub fn comparisons(&self) -> u64 {
        self.comparisons.load(Ordering::Relaxed)
    }

    /// Returns the number of counted assignments.
    pub fn assignments(&self) -> u64 {
        self.assignments.load(Ordering::Relaxed)
    }

    /// Returns both totals.
    pub fn counts(&self) -> OpCounts {
        OpCounts {
            comparisons: self.comparisons(),
            assignments: self.assignments(),
        }
    }

    /// Returns both totals and resets them.
    pub fn take(&self) -> OpCounts {
        OpCounts {
            comparisons: self.comparisons.swap(0, Ordering::Relaxed),
            assignments: self.assignments.swap(0, Ordering::Relaxed),
        }
    }

    /// Turns comparison counting on or off.
    pub fn set_comparison_counting(&self, enabled: bool) {
        self.count_comparisons.store(enabled, Ordering::Relaxed);
    }

    /// Turns assignment counting on or off.
    pub fn set_assignment_counting(&self, enabled: bool) {
        self.count_assignments.store(enabled, Ordering::Relaxed);
    }

    pub fn is_counting_comparisons(&self) -> bool {
        self.count_comparisons.load(Ordering::Relaxed)
    }

    pub fn is_counting_assignments(&self) -> bool {
        self.count_assignments.load(Ordering::Relaxed)
    }

    pub(crate) fn record_comparison(&self) {
        if self.is_counting_comparisons() {
            self.comparisons.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_assignment(&self) {
        if self.is_counting_assignments() {
            self.assignments.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl<T> Default for OpCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OpCounter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpCounter")
            .field("comparisons", &self.comparisons())
            .field("assignments", &self.assignments())
            .field("count_comparisons", &self.is_counting_comparisons())
            .field("count_assignments", &self.is_counting_assignments())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_with_counting_enabled() {
        let counter = OpCounter::<i32>::new();
        assert_eq!(counter.counts(), OpCounts::default());
        assert!(counter.is_counting_comparisons());
        assert!(counter.is_counting_assignments());
    }

    #[test]
    fn test_reset_keeps_switches() {
        let counter = OpCounter::<i32>::new();
        counter.set_assignment_counting(false);
        counter.record_comparison();
        counter.record_assignment();
        assert_eq!(counter.comparisons(), 1);
        assert_eq!(counter.assignments(), 0);

        counter.reset();
        assert_eq!(counter.counts(), OpCounts::default());
        assert!(counter.is_counting_comparisons());
        assert!(!counter.is_counting_assignments());
    }

    #[test]
    fn test_take_reads_then_zeroes() {
        let counter = OpCounter::<i64>::new();
        counter.record_comparison();
        counter.record_comparison();
        counter.record_assignment();

        let counts = counter.take();
        assert_eq!(counts.comparisons, 2);
        assert_eq!(counts.assignments, 1);
        assert_eq!(counter.counts(), OpCounts::default());
    }

    #[test]
    fn test_counters_are_independent() {
        let ints = OpCounter::<i32>::new();
        let floats = OpCounter::<f64>::new();

        let a = ints.wrap(1);
        let b = ints.wrap(2);
        assert!(a < b);

        assert_eq!(ints.comparisons(), 1);
        assert_eq!(floats.comparisons(), 0);
    }

    #[test]
    fn test_wrap_slice_preserves_order_without_counting() {
        let counter = OpCounter::<u8>::new();
        let wrapped = counter.wrap_slice(&[3, 1, 2]);
        let values: Vec<u8> = wrapped.iter().map(|e| *e.value()).collect();
        assert_eq!(values, vec![3, 1, 2]);
        assert_eq!(counter.counts(), OpCounts::default());
    }
}

//! Sortable elements and the instrumented counting wrapper.
//!
//! Rust assignment cannot be overloaded, so sorting algorithms in this crate
//! store values through [`Element::assign`] and [`Element::assign_from`]. For
//! plain numbers those are ordinary stores; for [`CountingElement`] they also
//! report to the element's [`OpCounter`].
//!
//! # Counting Rules
//!
//! - Each call of `==`, `!=`, `<`, `>`, `<=`, `>=`, `partial_cmp` or `cmp`
//!   counts exactly one comparison. `!=` is derived from `==` and the four
//!   ordering operators from `partial_cmp`; only the primitive is counted.
//! - Each call of `assign`, `assign_from`, `assign_value`,
//!   `assign_value_from` or `Clone::clone_from` counts exactly one
//!   assignment.
//! - Construction (`wrap`, `new`, `clone`) is never counted.

use std::cmp::Ordering;
use std::fmt;

use crate::counter::OpCounter;

/// A value that sorting algorithms can compare and store.
pub trait Element: Clone + PartialOrd {
    /// Replaces `self` with `value`.
    fn assign(&mut self, value: Self) {
        *self = value;
    }

    /// Replaces `self` with a copy of `value`.
    fn assign_from(&mut self, value: &Self) {
        self.assign(value.clone());
    }
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(impl Element for $t {})*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

/// A value wrapper that counts comparisons and assignments.
///
/// Orders exactly like the wrapped `T`. The counter is borrowed, so every
/// wrapper created from the same [`OpCounter`] feeds the same totals.
///
/// # Example
///
/// ```
/// use sortbench_core::{Element, OpCounter};
///
/// let counter = OpCounter::<i32>::new();
/// let mut slot = counter.default_element();
/// let other = counter.wrap(7);
///
/// slot.assign_from(&other);
/// slot.assign_value(9);
///
/// assert_eq!(*slot.value(), 9);
/// assert_eq!(counter.assignments(), 2);
/// assert_eq!(counter.comparisons(), 0);
/// ```
pub struct CountingElement<'c, T> {
    value: T,
    counter: &'c OpCounter<T>,
}

impl<'c, T> CountingElement<'c, T> {
    /// Wraps `value`, reporting to `counter`.
    pub fn new(value: T, counter: &'c OpCounter<T>) -> Self {
        Self { value, counter }
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the element.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the counter this element reports to.
    pub fn counter(&self) -> &'c OpCounter<T> {
        self.counter
    }

    /// Replaces the wrapped value with a raw `T`.
    pub fn assign_value(&mut self, value: T) {
        self.counter.record_assignment();
        self.value = value;
    }

    /// Replaces the wrapped value with a copy of a raw `T`.
    pub fn assign_value_from(&mut self, value: &T)
    where
        T: Clone,
    {
        self.counter.record_assignment();
        self.value.clone_from(value);
    }
}

impl<T: Clone> Clone for CountingElement<'_, T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            counter: self.counter,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.counter.record_assignment();
        self.value.clone_from(&source.value);
    }
}

impl<T: Clone + PartialOrd> Element for CountingElement<'_, T> {
    fn assign(&mut self, value: Self) {
        self.counter.record_assignment();
        self.value = value.value;
    }

    fn assign_from(&mut self, value: &Self) {
        self.counter.record_assignment();
        self.value.clone_from(&value.value);
    }
}

impl<T: PartialEq> PartialEq for CountingElement<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.counter.record_comparison();
        self.value == other.value
    }
}

impl<T: Eq> Eq for CountingElement<'_, T> {}

impl<T: PartialOrd> PartialOrd for CountingElement<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.counter.record_comparison();
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for CountingElement<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.counter.record_comparison();
        self.value.cmp(&other.value)
    }
}

impl<T: fmt::Debug> fmt::Debug for CountingElement<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CountingElement").field(&self.value).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CountingElement<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

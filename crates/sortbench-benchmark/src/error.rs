//! Snapshot access errors.

use std::fmt;

use thiserror::Error;

/// Which retained array sequence was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snapshot {
    /// Arrays as generated, before sorting.
    BeforeSort,
    /// Arrays after sorting.
    AfterSort,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Snapshot::BeforeSort => f.write_str("pre-sort"),
            Snapshot::AfterSort => f.write_str("post-sort"),
        }
    }
}

/// Errors returned by snapshot accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BenchError {
    #[error("no trial has run yet; run the benchmark first")]
    Uninitialized,

    #[error("{0} arrays were not retained; enable retention and run the benchmark again")]
    NotRetained(Snapshot),
}

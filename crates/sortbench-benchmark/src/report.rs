//! Report generation for benchmark results.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::result::SortStats;

/// CSV exporter for trial statistics.
///
/// One row per trial, in execution order, with the duration in nanoseconds.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::CsvExporter;
///
/// let csv = CsvExporter::to_string(&[]);
/// assert_eq!(csv, "trial,len,duration_ns,comparisons,assignments\n");
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports trial statistics to a CSV string.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_benchmark::{CsvExporter, SortStats};
    /// use std::time::Duration;
    ///
    /// let stats = [SortStats::new(4, Duration::from_nanos(850), 6, 12)];
    /// let csv = CsvExporter::to_string(&stats);
    /// assert!(csv.ends_with("0,4,850,6,12\n"));
    /// ```
    pub fn to_string(stats: &[SortStats]) -> String {
        let mut output = String::new();

        writeln!(output, "trial,len,duration_ns,comparisons,assignments").unwrap();

        for (trial, s) in stats.iter().enumerate() {
            writeln!(
                output,
                "{},{},{},{},{}",
                trial,
                s.len(),
                s.duration().as_nanos(),
                s.comparisons(),
                s.assignments(),
            )
            .unwrap();
        }

        output
    }

    /// Writes trial statistics as CSV to a writer.
    pub fn write<W: Write>(stats: &[SortStats], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(stats).as_bytes())
    }
}

/// Markdown report generator.
///
/// Renders a title, the run metadata and a table with one row per trial.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::MarkdownReport;
///
/// let md = MarkdownReport::to_string("smoke", "quick", &[]);
/// assert!(md.contains("# Benchmark: smoke"));
/// assert!(md.contains("*No trials recorded.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_benchmark::{MarkdownReport, SortStats};
    /// use std::time::Duration;
    ///
    /// let stats = [SortStats::new(1000, Duration::from_micros(42), 9_976, 5_044)];
    /// let md = MarkdownReport::to_string("quick-1k", "quick", &stats);
    /// assert!(md.contains("| Trial | Length | Time (µs) | Comparisons | Assignments |"));
    /// assert!(md.contains("| 0 | 1000 | 42.000 | 9976 | 5044 |"));
    /// ```
    pub fn to_string(name: &str, algorithm: &str, stats: &[SortStats]) -> String {
        let mut output = String::new();

        writeln!(output, "# Benchmark: {}", name).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "- **Algorithm**: {}", algorithm).unwrap();
        writeln!(output, "- **Trials**: {}", stats.len()).unwrap();
        writeln!(output).unwrap();

        if stats.is_empty() {
            writeln!(output, "*No trials recorded.*").unwrap();
            return output;
        }

        writeln!(
            output,
            "| Trial | Length | Time (µs) | Comparisons | Assignments |"
        )
        .unwrap();
        writeln!(
            output,
            "|-------|--------|-----------|-------------|-------------|"
        )
        .unwrap();

        for (trial, s) in stats.iter().enumerate() {
            writeln!(
                output,
                "| {} | {} | {:.3} | {} | {} |",
                trial,
                s.len(),
                s.duration().as_secs_f64() * 1_000_000.0,
                s.comparisons(),
                s.assignments(),
            )
            .unwrap();
        }

        output
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(
        name: &str,
        algorithm: &str,
        stats: &[SortStats],
        mut writer: W,
    ) -> io::Result<()> {
        writer.write_all(Self::to_string(name, algorithm, stats).as_bytes())
    }
}

//! Colorful console output for benchmark runs.
//!
//! Provides a custom `tracing` layer that formats benchmark events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (benchmark start/end)
//! - **DEBUG**: One line per finished trial
//! - **TRACE**: Snapshot retention

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the benchmark console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner to stderr and sets up tracing. `RUST_LOG` overrides
/// the default `sortbench_benchmark=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive("sortbench_benchmark=info".parse().unwrap())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        "SortBench".bright_cyan().bold(),
        format!("v{}", VERSION).bright_white()
    );
    let _ = stderr.flush();
}

/// A tracing layer that formats benchmark events with colors.
///
/// Output goes to stderr so reports on stdout stay machine-readable.
pub struct BenchConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("sortbench_benchmark") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    trials: Option<u64>,
    trial: Option<u64>,
    len: Option<u64>,
    duration_ns: Option<u64>,
    comparisons: Option<u64>,
    assignments: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "algorithm" => self.algorithm = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "trials" => self.trials = Some(value),
            "trial" => self.trial = Some(value),
            "len" => self.len = Some(value),
            "duration_ns" => self.duration_ns = Some(value),
            "comparisons" => self.comparisons = Some(value),
            "assignments" => self.assignments = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "bench_start" => format_bench_start(v),
        "trial" => format_trial(v),
        "bench_end" => format_bench_end(v),
        _ => String::new(),
    }
}

fn format_bench_start(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("unknown");
    let trials = v.trials.unwrap_or(0);

    let mut output = format!(
        "{} {} │ {} trials",
        "▶".bright_green().bold(),
        algorithm.white().bold(),
        trials.to_formatted_string(&Locale::en).bright_yellow(),
    );

    if let Some(len) = v.len {
        output.push_str(&format!(
            " │ {} elements each",
            len.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }

    output
}

fn format_trial(v: &EventVisitor) -> String {
    format!(
        "  {} #{:<4} │ n={:>12} │ {:>10} │ {:>15} cmp │ {:>15} asg",
        "·".bright_black(),
        v.trial.unwrap_or(0),
        v.len
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        format_duration_ns(v.duration_ns.unwrap_or(0)).yellow(),
        v.comparisons
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
        v.assignments
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
    )
}

fn format_bench_end(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("unknown");
    let trials = v.trials.unwrap_or(0);
    let total = v.duration_ns.unwrap_or(0);

    format!(
        "{} {} complete │ {} trials │ {} sorting",
        "■".bright_cyan().bold(),
        algorithm.white().bold(),
        trials.to_formatted_string(&Locale::en).white(),
        format_duration_ns(total).yellow(),
    )
}

fn format_duration_ns(ns: u64) -> String {
    if ns < 1_000 {
        format!("{}ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2}µs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2}ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", ns as f64 / 1_000_000_000.0)
    }
}

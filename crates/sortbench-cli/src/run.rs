//! Turns a validated configuration into a rendered report.

use std::fmt::Debug;
use std::io::Write;

use clap::ValueEnum;
use num_traits::NumCast;
use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, StandardUniform};
use sortbench_benchmark::{CsvExporter, MarkdownReport, SortBench, SortStats};
use sortbench_config::{BenchConfig, ElementType, RunPlan};
use sortbench_core::{
    is_sorted, seeded_engine, Element, RangeGenerator, UniformGenerator, ValueGenerator,
};

use crate::error::CliError;

/// Report layout written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Markdown,
    Csv,
}

/// Runs the configured benchmark and writes its report to `out`.
pub fn render<W: Write>(config: &BenchConfig, format: Format, out: W) -> Result<(), CliError> {
    let stats = match config.element {
        ElementType::I32 => bench::<i32>(config)?,
        ElementType::I64 => bench::<i64>(config)?,
        ElementType::U32 => bench::<u32>(config)?,
        ElementType::U64 => bench::<u64>(config)?,
        ElementType::F32 => bench::<f32>(config)?,
        ElementType::F64 => bench::<f64>(config)?,
    };

    match format {
        Format::Markdown => {
            MarkdownReport::write(&config.name, config.algorithm.as_str(), &stats, out)?
        }
        Format::Csv => CsvExporter::write(&stats, out)?,
    }
    Ok(())
}

fn bench<T>(config: &BenchConfig) -> Result<Vec<SortStats>, CliError>
where
    T: Element + SampleUniform + NumCast + Debug + 'static,
    StandardUniform: Distribution<T>,
{
    let engine = seeded_engine(config.engine, config.seed_strategy());
    match config.range_as::<T>()? {
        Some((min, max)) => run_trials(config, RangeGenerator::new(min, max, engine)?),
        None => run_trials(config, UniformGenerator::<T>::new(engine)),
    }
}

fn run_trials<T, G>(config: &BenchConfig, generator: G) -> Result<Vec<SortStats>, CliError>
where
    T: Element + 'static,
    G: ValueGenerator<T>,
{
    let mut bench = SortBench::new(config.algorithm, generator)
        .with_retention(config.keep_before, config.keep_after);

    let stats = match &config.run {
        RunPlan::Sizes { sizes } => bench.run_sizes(sizes).to_vec(),
        RunPlan::Repeated { size, trials } => bench.run_repeated(*size, *trials).to_vec(),
    };

    if config.keep_after {
        if let Some(trial) = bench.sorted_arrays()?.iter().position(|a| !is_sorted(a)) {
            return Err(CliError::Unsorted { trial });
        }
    }

    Ok(stats)
}

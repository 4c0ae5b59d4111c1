//! `sortbench` command-line runner.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use sortbench_config::BenchConfig;
use sortbench_core::Algorithm;

mod error;
mod run;

use error::CliError;
use run::Format;

/// Sorting micro-benchmark: times sorts and counts comparisons and assignments.
#[derive(Debug, Parser)]
#[command(name = "sortbench", version, about, long_about = None)]
struct Cli {
    /// Benchmark configuration (TOML, or YAML for .yaml/.yml files)
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Report layout
    #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Fixed seed, overriding the configured one
    #[arg(long)]
    seed: Option<u64>,

    /// Algorithm, overriding the configured one
    #[arg(short, long, value_name = "NAME")]
    algorithm: Option<Algorithm>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn load_config(&self) -> Result<BenchConfig, CliError> {
        let mut config = BenchConfig::load(&self.config)?;
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(algorithm) = self.algorithm {
            config = config.with_algorithm(algorithm);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();
    if !cli.quiet {
        sortbench_console::init();
    }

    let result = cli
        .load_config()
        .and_then(|config| run::render(&config, cli.format, io::stdout().lock()));

    if let Err(err) = result {
        eprintln!("{} {}", "error:".bright_red().bold(), err);
        process::exit(1);
    }
}

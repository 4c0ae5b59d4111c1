use sortbench_benchmark::BenchError;
use sortbench_config::ConfigError;
use sortbench_core::GeneratorError;
use thiserror::Error;

/// Errors surfaced by the `sortbench` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Bench(#[from] BenchError),

    #[error("trial {trial} produced an unsorted array")]
    Unsorted { trial: usize },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

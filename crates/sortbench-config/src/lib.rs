//! Configuration system for SortBench.
//!
//! Describe a benchmark run in TOML or YAML: element type, algorithm,
//! random engine, value range, retention, and the trial plan.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use sortbench_config::{BenchConfig, ElementType, RunPlan};
//! use sortbench_core::Algorithm;
//!
//! let config = BenchConfig::from_toml_str(r#"
//!     name = "heap-vs-random"
//!     element = "i64"
//!     algorithm = "heap"
//!     random_seed = 7
//!
//!     [run]
//!     sizes = [10, 100, 1000]
//!
//!     [range]
//!     min = -500
//!     max = 500
//! "#).unwrap();
//!
//! assert_eq!(config.element, ElementType::I64);
//! assert_eq!(config.algorithm, Algorithm::Heap);
//! assert_eq!(config.run, RunPlan::Sizes { sizes: vec![10, 100, 1000] });
//! assert_eq!(config.range_as::<i64>().unwrap(), Some((-500, 500)));
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use sortbench_config::BenchConfig;
//!
//! let config = BenchConfig::load("sortbench.toml").unwrap_or_default();
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::path::Path;

use num_traits::NumCast;
use serde::{Deserialize, Serialize};
use sortbench_core::{Algorithm, EngineKind, SeedStrategy};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main benchmark configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BenchConfig {
    /// Title used by reports.
    #[serde(default = "default_name")]
    pub name: String,

    /// Type of the generated values.
    #[serde(default)]
    pub element: ElementType,

    /// Sorting algorithm under test.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Pseudo-random engine family.
    #[serde(default)]
    pub engine: EngineKind,

    /// Fixed seed for reproducible inputs; OS entropy when absent.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Keep every generated array before sorting.
    #[serde(default)]
    pub keep_before: bool,

    /// Keep every array after sorting.
    #[serde(default)]
    pub keep_after: bool,

    /// Which trials to run.
    #[serde(default)]
    pub run: RunPlan,

    /// Inclusive value range; the type's full uniform range when absent.
    #[serde(default)]
    pub range: Option<RangeConfig>,
}

fn default_name() -> String {
    "sortbench".to_string()
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            element: ElementType::default(),
            algorithm: Algorithm::default(),
            engine: EngineKind::default(),
            random_seed: None,
            keep_before: false,
            keep_after: false,
            run: RunPlan::default(),
            range: None,
        }
    }
}

impl BenchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::from_yaml_file(path)
            }
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the report title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the element type.
    pub fn with_element(mut self, element: ElementType) -> Self {
        self.element = element;
        self
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the engine family.
    pub fn with_engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets both retention flags.
    pub fn with_retention(mut self, keep_before: bool, keep_after: bool) -> Self {
        self.keep_before = keep_before;
        self.keep_after = keep_after;
        self
    }

    /// Runs one trial per size.
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.run = RunPlan::Sizes { sizes };
        self
    }

    /// Runs `trials` trials of `size` elements each.
    pub fn with_repeated(mut self, size: usize, trials: usize) -> Self {
        self.run = RunPlan::Repeated { size, trials };
        self
    }

    /// Restricts generated values to `min..=max`.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(RangeConfig { min, max });
        self
    }

    /// Returns how the engine should be seeded.
    pub fn seed_strategy(&self) -> SeedStrategy {
        SeedStrategy::from(self.random_seed)
    }

    /// Returns the range cast into the element type, if one is configured.
    ///
    /// Integer targets truncate fractional bounds toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a bound does not fit in `T`.
    pub fn range_as<T: NumCast>(&self) -> Result<Option<(T, T)>, ConfigError> {
        let Some(range) = self.range else {
            return Ok(None);
        };
        let cast = |bound: f64| {
            <T as NumCast>::from(bound).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "range bound {bound} does not fit element type {}",
                    self.element
                ))
            })
        };
        Ok(Some((cast(range.min)?, cast(range.max)?)))
    }

    /// Checks the configuration for values no run could honor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.run {
            RunPlan::Sizes { sizes } if sizes.is_empty() => {
                return Err(ConfigError::Invalid("run.sizes must not be empty".into()));
            }
            RunPlan::Repeated { trials: 0, .. } => {
                return Err(ConfigError::Invalid("run.trials must be at least 1".into()));
            }
            _ => {}
        }

        if let Some(range) = self.range {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "range bounds must be finite, got {}..={}",
                    range.min, range.max
                )));
            }
            if range.min > range.max {
                return Err(ConfigError::Invalid(format!(
                    "range.min ({}) must not exceed range.max ({})",
                    range.min, range.max
                )));
            }
            match self.element {
                ElementType::I32 => self.range_as::<i32>().map(drop)?,
                ElementType::I64 => self.range_as::<i64>().map(drop)?,
                ElementType::U32 => self.range_as::<u32>().map(drop)?,
                ElementType::U64 => self.range_as::<u64>().map(drop)?,
                ElementType::F32 => self.range_as::<f32>().map(drop)?,
                ElementType::F64 => self.range_as::<f64>().map(drop)?,
            }
        }

        Ok(())
    }
}

/// Element type of the generated arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    #[default]
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
}

impl ElementType {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::I32 => "i32",
            ElementType::I64 => "i64",
            ElementType::U32 => "u32",
            ElementType::U64 => "u64",
            ElementType::F32 => "f32",
            ElementType::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trial plan.
///
/// Written as `sizes = [...]`, or as `size` together with `trials`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RunPlan {
    /// One trial per listed size, in order.
    Sizes { sizes: Vec<usize> },

    /// `trials` trials of `size` elements each.
    Repeated { size: usize, trials: usize },
}

impl Default for RunPlan {
    fn default() -> Self {
        RunPlan::Repeated {
            size: 1_000,
            trials: 10,
        }
    }
}

impl RunPlan {
    /// Number of trials the plan runs.
    pub fn trial_count(&self) -> usize {
        match self {
            RunPlan::Sizes { sizes } => sizes.len(),
            RunPlan::Repeated { trials, .. } => *trials,
        }
    }
}

/// Inclusive value range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RangeConfig {
    pub min: f64,
    pub max: f64,
}

#[cfg(test)]
mod tests;

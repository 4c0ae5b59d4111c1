//! Tests for benchmark configuration.

use std::io::Write;

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        name = "merge-sweep"
        element = "f64"
        algorithm = "merge"
        engine = "chacha8"
        random_seed = 42
        keep_before = true

        [run]
        size = 256
        trials = 5

        [range]
        min = -1.5
        max = 1.5
    "#;

    let config = BenchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.name, "merge-sweep");
    assert_eq!(config.element, ElementType::F64);
    assert_eq!(config.algorithm, Algorithm::Merge);
    assert_eq!(config.engine, EngineKind::ChaCha8);
    assert_eq!(config.random_seed, Some(42));
    assert!(config.keep_before);
    assert!(!config.keep_after);
    assert_eq!(config.run, RunPlan::Repeated { size: 256, trials: 5 });
    assert_eq!(config.range, Some(RangeConfig { min: -1.5, max: 1.5 }));
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        element: u32
        algorithm: insertion
        random_seed: 42
        keep_after: true
        run:
          sizes: [1, 2, 3]
        range:
          min: 10
          max: 20
    "#;

    let config = BenchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.element, ElementType::U32);
    assert_eq!(config.algorithm, Algorithm::Insertion);
    assert_eq!(config.seed_strategy(), SeedStrategy::Fixed(42));
    assert_eq!(config.run.trial_count(), 3);
    assert_eq!(config.range_as::<u32>().unwrap(), Some((10, 20)));
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = BenchConfig::from_toml_str("").unwrap();
    assert_eq!(config, BenchConfig::default());
    assert_eq!(config.name, "sortbench");
    assert_eq!(config.algorithm, Algorithm::Quick);
    assert_eq!(config.seed_strategy(), SeedStrategy::Entropy);
    assert_eq!(config.run.trial_count(), 10);
    assert_eq!(config.range_as::<i32>().unwrap(), None);
}

#[test]
fn test_unknown_algorithm_rejected() {
    let err = BenchConfig::from_toml_str(r#"algorithm = "bogo""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = BenchConfig::new()
        .with_name("builder")
        .with_element(ElementType::I64)
        .with_algorithm(Algorithm::Heap)
        .with_engine(EngineKind::ChaCha8)
        .with_random_seed(123)
        .with_retention(true, true)
        .with_sizes(vec![8, 16])
        .with_range(-4.0, 4.0);

    assert_eq!(config.name, "builder");
    assert_eq!(config.random_seed, Some(123));
    assert!(config.keep_before && config.keep_after);
    assert_eq!(config.run.trial_count(), 2);
    assert_eq!(config.range_as::<i64>().unwrap(), Some((-4, 4)));
    assert!(config.validate().is_ok());

    let config = config.with_repeated(32, 3);
    assert_eq!(config.run, RunPlan::Repeated { size: 32, trials: 3 });
}

#[test]
fn test_validate_rejects_inverted_range() {
    let config = BenchConfig::new().with_range(5.0, 1.0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("range.min")));
}

#[test]
fn test_validate_rejects_non_finite_range() {
    let config = BenchConfig::new()
        .with_element(ElementType::F64)
        .with_range(f64::NEG_INFINITY, 1.0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_range_outside_element_type() {
    let negative_unsigned = BenchConfig::new()
        .with_element(ElementType::U64)
        .with_range(-10.0, 10.0);
    assert!(matches!(negative_unsigned.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("u64")));

    let too_wide = BenchConfig::new()
        .with_element(ElementType::I32)
        .with_range(0.0, 1e12);
    assert!(too_wide.validate().is_err());

    let widened = too_wide.with_element(ElementType::I64);
    assert!(widened.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_plans() {
    assert!(BenchConfig::new().with_sizes(vec![]).validate().is_err());
    assert!(BenchConfig::new().with_repeated(100, 0).validate().is_err());
    assert!(BenchConfig::new().with_repeated(0, 1).validate().is_ok());
}

#[test]
fn test_load_detects_format_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("bench.toml");
    std::fs::write(&toml_path, "algorithm = \"selection\"\n").unwrap();
    assert_eq!(BenchConfig::load(&toml_path).unwrap().algorithm, Algorithm::Selection);

    let yaml_path = dir.path().join("bench.YML");
    std::fs::write(&yaml_path, "algorithm: bubble\n").unwrap();
    assert_eq!(BenchConfig::load(&yaml_path).unwrap().algorithm, Algorithm::Bubble);
}

#[test]
fn test_from_files() {
    let mut toml_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(toml_file, "element = \"f32\"").unwrap();
    let config = BenchConfig::from_toml_file(toml_file.path()).unwrap();
    assert_eq!(config.element, ElementType::F32);

    let mut yaml_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(yaml_file, "element: u64").unwrap();
    let config = BenchConfig::from_yaml_file(yaml_file.path()).unwrap();
    assert_eq!(config.element, ElementType::U64);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BenchConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

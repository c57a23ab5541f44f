//! Tests for loading solver configuration from TOML.

use std::io::Write;
use tictactoe_engine::SearchConfig;
use tictactoe_solver::{OutputFormat, SolverConfig};

#[test]
fn test_defaults() {
    let config = SolverConfig::default();
    assert!(*config.search().prune());
    assert_eq!(*config.format(), OutputFormat::Text);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"\n\n[search]\nprune = false").unwrap();

    let config = SolverConfig::from_file(file.path()).expect("valid config");
    assert!(!*config.search().prune());
    assert_eq!(*config.format(), OutputFormat::Json);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[search]").unwrap();

    let config = SolverConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, SolverConfig::default());
}

#[test]
fn test_invalid_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"yaml\"").unwrap();

    let err = SolverConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = SolverConfig::load_or_default(&path).expect("defaults");
    assert_eq!(config, SolverConfig::default());

    let err = SolverConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_overrides_win_over_file() {
    let config = SolverConfig::new(SearchConfig::new(true), OutputFormat::Text)
        .with_overrides(Some(false), Some(OutputFormat::Json));
    assert!(!*config.search().prune());
    assert_eq!(*config.format(), OutputFormat::Json);

    let unchanged = config.clone().with_overrides(None, None);
    assert_eq!(unchanged, config);
}

//! Integration tests for zod-openapi-cli.
//!
//! These tests verify end-to-end functionality of the CLI library,
//! including configuration, loading, conversion, writing and checking.

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use zod_openapi_cli::{
    check_file,
    config::{CliArgs, Config, ConfigManager},
    convert_file, convert_to_string,
    error::{CliError, ConfigError, LoadError},
    writer::FileWriter,
    CheckOutcome,
};

/// Get the path to test fixtures.
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn user_model() -> PathBuf {
    fixtures_path().join("user_model.json")
}

fn user_schema() -> Value {
    let content = fs::read_to_string(fixtures_path().join("user_schema.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// =============================================================================
// Conversion Integration Tests
// =============================================================================

#[test]
fn test_convert_fixture_model() {
    let schema = convert_file(&user_model(), &Config::default()).unwrap();
    assert_eq!(schema.to_value().unwrap(), user_schema());
}

#[test]
fn test_convert_keeps_declaration_order() {
    let content = convert_to_string(&user_model(), &Config::default()).unwrap();
    let value: Value = serde_json::from_str(&content).unwrap();

    let names: Vec<_> = value["properties"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(names, vec!["name", "age", "tags", "settings"]);
}

#[test]
fn test_convert_output_formats() {
    let pretty = convert_to_string(&user_model(), &Config::default()).unwrap();
    assert!(pretty.contains("\n  \"type\": \"object\""));
    assert!(pretty.ends_with('\n'));

    let config = ConfigManager::merge_cli_args(
        Config::default(),
        &CliArgs {
            pretty: Some(false),
            ..Default::default()
        },
    );
    let compact = convert_to_string(&user_model(), &config).unwrap();
    assert_eq!(compact.lines().count(), 1);
    assert!(compact.starts_with("{\"type\":\"object\""));
}

#[test]
fn test_convert_respects_max_depth() {
    let config = ConfigManager::merge_cli_args(
        Config::default(),
        &CliArgs {
            max_depth: Some(1),
            ..Default::default()
        },
    );
    let schema = convert_file(&user_model(), &config).unwrap();
    let value = schema.to_value().unwrap();

    // Array elements sit two levels below the root.
    assert_eq!(value["properties"]["tags"]["items"], json!({}));
    assert_eq!(value["properties"]["name"]["type"], "string");
}

#[test]
fn test_convert_rejects_zero_depth() {
    let mut config = Config::default();
    config.convert.max_depth = 0;

    let err = convert_file(&user_model(), &config).unwrap_err();
    assert!(matches!(
        err,
        CliError::Config(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_convert_missing_input() {
    let dir = TempDir::new().unwrap();
    let err = convert_file(&dir.path().join("absent.json"), &Config::default()).unwrap_err();
    assert!(matches!(err, CliError::Load(LoadError::NotFound { .. })));
}

#[test]
fn test_convert_malformed_model() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, "\"just a string\"").unwrap();

    let err = convert_file(&path, &Config::default()).unwrap_err();
    assert!(matches!(err, CliError::Load(LoadError::Model { .. })));
}

#[test]
fn test_convert_model_without_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, r#"{ "properties": { "a": { "config": { "required": true } } } }"#).unwrap();

    let schema = convert_file(&path, &Config::default()).unwrap();
    assert_eq!(schema.to_value().unwrap(), json!({}));
}

// =============================================================================
// Configuration Integration Tests
// =============================================================================

#[test]
fn test_load_missing_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigManager::load(Some(&dir.path().join("zod-openapi.toml"))).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zod-openapi.toml");
    fs::write(&path, "[output]\npretty = false\n\n[convert]\nmax_depth = 3\n").unwrap();

    let config = ConfigManager::load(Some(&path)).unwrap();
    assert!(!config.output.pretty);
    assert_eq!(config.convert.max_depth, 3);
}

#[test]
fn test_load_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zod-openapi.toml");
    fs::write(&path, "[output\npretty = ").unwrap();

    let err = ConfigManager::load(Some(&path)).unwrap_err();
    assert!(matches!(
        err,
        CliError::Config(ConfigError::InvalidToml { .. })
    ));
}

#[test]
fn test_load_config_with_zero_depth() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zod-openapi.toml");
    fs::write(&path, "[convert]\nmax_depth = 0\n").unwrap();

    assert!(ConfigManager::load(Some(&path)).is_err());
}

#[test]
fn test_cli_args_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zod-openapi.toml");
    fs::write(&path, "[output]\nfile = \"from-config.json\"\n").unwrap();

    let config = ConfigManager::load(Some(&path)).unwrap();
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output: Some(PathBuf::from("from-cli.json")),
            ..Default::default()
        },
    );
    assert_eq!(config.output.file, Some(PathBuf::from("from-cli.json")));
}

// =============================================================================
// Writer Integration Tests
// =============================================================================

#[test]
fn test_convert_and_write() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out/schema.json");

    let content = convert_to_string(&user_model(), &Config::default()).unwrap();
    let result = FileWriter::new(false).write(&output, &content).unwrap();

    assert!(result.was_written());
    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, user_schema());
}

#[test]
fn test_dry_run_leaves_disk_untouched() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("schema.json");

    let content = convert_to_string(&user_model(), &Config::default()).unwrap();
    let result = FileWriter::new(true).write(&output, &content).unwrap();

    assert!(!result.was_written());
    assert_eq!(result.path(), output.as_path());
    assert!(!output.exists());
}

// =============================================================================
// Check Integration Tests
// =============================================================================

#[test]
fn test_check_up_to_date() {
    let outcome = check_file(
        &user_model(),
        &fixtures_path().join("user_schema.json"),
        &Config::default(),
    )
    .unwrap();
    assert!(outcome.is_up_to_date());
}

#[test]
fn test_check_ignores_formatting() {
    let dir = TempDir::new().unwrap();
    let against = dir.path().join("schema.json");
    fs::write(&against, serde_json::to_string(&user_schema()).unwrap()).unwrap();

    let outcome = check_file(&user_model(), &against, &Config::default()).unwrap();
    assert_eq!(outcome, CheckOutcome::UpToDate);
}

#[test]
fn test_check_out_of_date() {
    let dir = TempDir::new().unwrap();
    let against = dir.path().join("schema.json");
    let mut stale = user_schema();
    stale["required"] = json!(["name"]);
    fs::write(&against, stale.to_string()).unwrap();

    let outcome = check_file(&user_model(), &against, &Config::default()).unwrap();
    match outcome {
        CheckOutcome::OutOfDate { expected } => {
            assert_eq!(expected.to_value().unwrap(), user_schema());
        }
        CheckOutcome::UpToDate => panic!("stale schema reported as up-to-date"),
    }
}

#[test]
fn test_check_missing_against() {
    let dir = TempDir::new().unwrap();
    let err = check_file(
        &user_model(),
        &dir.path().join("absent.json"),
        &Config::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CliError::Load(LoadError::NotFound { .. })));
}

// =============================================================================
// Init Integration Tests
// =============================================================================

#[test]
fn test_default_config_round_trips_through_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zod-openapi.toml");
    fs::write(&path, ConfigManager::default_config_content()).unwrap();

    assert_eq!(ConfigManager::load(Some(&path)).unwrap(), Config::default());
}

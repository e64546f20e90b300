//! Integration tests for configuration loading and validation
//!
//! Every test takes ENV_MUTEX because the loader reads FLYT_EXPORT_* variables.

use clap::Parser;
use flyt_export::cli::Cli;
use flyt_export::config::{default_config, load_config, ExporterConfig};
use flyt_export::domain::{ExportError, UnmatchedPolicy};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_VARS: &[&str] = &[
    "FLYT_EXPORT_APPLICATION_LOG_LEVEL",
    "FLYT_EXPORT_APPLICATION_DRY_RUN",
    "FLYT_EXPORT_LAYOUT_ROOT_DIR",
    "FLYT_EXPORT_LAYOUT_UNMATCHED",
    "FLYT_EXPORT_CONVERTER_PROGRAM",
    "FLYT_EXPORT_CONVERTER_ARGS",
    "FLYT_EXPORT_CONVERTER_SUPPRESS_WARNINGS",
    "FLYT_EXPORT_CONVERTER_WORKING_DIR",
    "FLYT_EXPORT_LOGGING_LOCAL_ENABLED",
    "FLYT_EXPORT_LOGGING_LOCAL_PATH",
    "FLYT_EXPORT_LOGGING_LOCAL_ROTATION",
    "TEST_CONVERTER_SCRIPT",
];

fn lock_env() -> MutexGuard<'static, ()> {
    let guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
    guard
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = lock_env();
    let temp_file = write_config(
        r#"
[application]
log_level = "debug"
dry_run = true

[layout]
root_dir = "Layouts"
unmatched = "skip"

[converter]
program = "python3"
args = ["LayoutExporter/main.py"]
suppress_warnings = true
working_dir = "/opt/tools"

[logging]
local_enabled = false
local_path = "/tmp/flyt-export"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.layout.root_dir, "Layouts");
    assert_eq!(config.layout.unmatched, UnmatchedPolicy::Skip);
    assert_eq!(config.converter.program, "python3");
    assert_eq!(config.converter.args, vec!["LayoutExporter/main.py"]);
    assert!(config.converter.suppress_warnings);
    assert_eq!(config.converter.working_dir, Some("/opt/tools".to_string()));
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/flyt-export");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_empty_file_matches_defaults() {
    let _lock = lock_env();
    let temp_file = write_config("# nothing to change\n");

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config, ExporterConfig::default());
    assert_eq!(default_config().unwrap(), ExporterConfig::default());
}

#[test]
fn test_env_var_substitution() {
    let _lock = lock_env();
    std::env::set_var("TEST_CONVERTER_SCRIPT", "/opt/LayoutExporter/main.py");

    let temp_file = write_config(
        r#"
[converter]
args = ["${TEST_CONVERTER_SCRIPT}"]
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.converter.args, vec!["/opt/LayoutExporter/main.py"]);
    std::env::remove_var("TEST_CONVERTER_SCRIPT");
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = lock_env();
    let temp_file = write_config(
        r#"
[converter]
program = "${TEST_CONVERTER_SCRIPT}"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, ExportError::Configuration(_)));
    assert!(err.to_string().contains("TEST_CONVERTER_SCRIPT"));
}

#[test]
fn test_env_overrides() {
    let _lock = lock_env();
    std::env::set_var("FLYT_EXPORT_CONVERTER_PROGRAM", "python3");
    std::env::set_var("FLYT_EXPORT_CONVERTER_ARGS", "-u main.py");
    std::env::set_var("FLYT_EXPORT_LAYOUT_ROOT_DIR", "Layouts");
    std::env::set_var("FLYT_EXPORT_LAYOUT_UNMATCHED", "SKIP");
    std::env::set_var("FLYT_EXPORT_APPLICATION_DRY_RUN", "true");

    let temp_file = write_config(
        r#"
[converter]
program = "py"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.converter.program, "python3");
    assert_eq!(config.converter.args, vec!["-u", "main.py"]);
    assert_eq!(config.layout.root_dir, "Layouts");
    assert_eq!(config.layout.unmatched, UnmatchedPolicy::Skip);
    assert!(config.application.dry_run);

    let defaults = default_config().unwrap();
    assert_eq!(defaults.converter.program, "python3");

    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

#[test]
fn test_invalid_unmatched_override() {
    let _lock = lock_env();
    std::env::set_var("FLYT_EXPORT_LAYOUT_UNMATCHED", "rename");

    let err = default_config().unwrap_err();
    assert!(matches!(err, ExportError::Configuration(_)));

    std::env::remove_var("FLYT_EXPORT_LAYOUT_UNMATCHED");
}

#[test]
fn test_invalid_values_fail_validation() {
    let _lock = lock_env();
    let temp_file = write_config(
        r#"
[application]
log_level = "chatty"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, ExportError::Validation(_)));
    assert!(err.to_string().contains("Configuration validation failed"));
}

#[test]
fn test_non_boolean_override_is_rejected() {
    let _lock = lock_env();
    std::env::set_var("FLYT_EXPORT_APPLICATION_DRY_RUN", "1");

    let err = default_config().unwrap_err();
    assert!(matches!(err, ExportError::Configuration(_)));
    assert!(err.to_string().contains("FLYT_EXPORT_APPLICATION_DRY_RUN"));

    std::env::remove_var("FLYT_EXPORT_APPLICATION_DRY_RUN");
}

#[test]
fn test_cli_overrides_take_precedence() {
    let _lock = lock_env();
    std::env::set_var("FLYT_EXPORT_CONVERTER_PROGRAM", "python3");

    let mut config = default_config().unwrap();
    let cli = Cli::parse_from([
        "flyt-export",
        "--converter",
        "py",
        "--suppress-warnings",
        "--skip-unmatched",
        "Demo",
    ]);
    cli.export.apply_overrides(&mut config);

    assert_eq!(config.converter.program, "py");
    assert!(config.converter.suppress_warnings);
    assert_eq!(config.layout.unmatched, UnmatchedPolicy::Skip);

    std::env::remove_var("FLYT_EXPORT_CONVERTER_PROGRAM");
}

//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ExporterConfig;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use crate::domain::UnmatchedPolicy;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ExporterConfig
/// 4. Applies environment variable overrides (FLYT_EXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use flyt_export::config::loader::load_config;
///
/// let config = load_config("flyt-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ExporterConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    Ok(config)
}

/// Builds the configuration used when no file is given
///
/// Defaults reproduce the plain `py main.py <src> <dst>` invocation; the
/// `FLYT_EXPORT_*` overrides still apply.
pub fn default_config() -> Result<ExporterConfig> {
    let mut config = ExporterConfig::default();
    apply_env_overrides(&mut config)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ExporterConfig) -> Result<()> {
    config
        .validate()
        .map_err(|e| ExportError::Validation(format!("Configuration validation failed: {}", e)))
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExportError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using FLYT_EXPORT_* prefix
///
/// Environment variables follow the pattern: FLYT_EXPORT_<SECTION>_<KEY>
/// For example: FLYT_EXPORT_CONVERTER_PROGRAM, FLYT_EXPORT_LAYOUT_ROOT_DIR
fn apply_env_overrides(config: &mut ExporterConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("FLYT_EXPORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("FLYT_EXPORT_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_bool("FLYT_EXPORT_APPLICATION_DRY_RUN", &val)?;
    }

    // Layout overrides
    if let Ok(val) = std::env::var("FLYT_EXPORT_LAYOUT_ROOT_DIR") {
        config.layout.root_dir = val;
    }
    if let Ok(val) = std::env::var("FLYT_EXPORT_LAYOUT_UNMATCHED") {
        config.layout.unmatched = match val.to_lowercase().as_str() {
            "truncate" => UnmatchedPolicy::Truncate,
            "skip" => UnmatchedPolicy::Skip,
            _ => {
                return Err(ExportError::Configuration(format!(
                    "Invalid FLYT_EXPORT_LAYOUT_UNMATCHED '{val}'. Must be one of: truncate, skip"
                )))
            }
        };
    }

    // Converter overrides
    if let Ok(val) = std::env::var("FLYT_EXPORT_CONVERTER_PROGRAM") {
        config.converter.program = val;
    }
    if let Ok(val) = std::env::var("FLYT_EXPORT_CONVERTER_ARGS") {
        config.converter.args = val.split_whitespace().map(str::to_string).collect();
    }
    if let Ok(val) = std::env::var("FLYT_EXPORT_CONVERTER_SUPPRESS_WARNINGS") {
        config.converter.suppress_warnings = parse_bool("FLYT_EXPORT_CONVERTER_SUPPRESS_WARNINGS", &val)?;
    }
    if let Ok(val) = std::env::var("FLYT_EXPORT_CONVERTER_WORKING_DIR") {
        config.converter.working_dir = Some(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("FLYT_EXPORT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("FLYT_EXPORT_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("FLYT_EXPORT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("FLYT_EXPORT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_bool(name: &str, val: &str) -> Result<bool> {
    val.parse().map_err(|_| {
        ExportError::Configuration(format!(
            "Invalid {name} '{val}'. Must be one of: true, false"
        ))
    })
}

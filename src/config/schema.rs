//! Configuration schema types
//!
//! This module defines the configuration structure for flyt-export.
//! Every section is optional; an empty file yields [`ExporterConfig::default`].

use crate::domain::UnmatchedPolicy;
use serde::{Deserialize, Serialize};

/// Main flyt-export configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Where input folders live and how `blyt` entries are mapped
    #[serde(default)]
    pub layout: LayoutConfig,

    /// External converter invocation
    #[serde(default)]
    pub converter: ConverterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.converter.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Plan and print jobs without touching the filesystem or the converter
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Layout folder configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Directory input folders are resolved against.
    ///
    /// Empty means the input folder is used as given; `"Layouts"` matches the
    /// `Layouts/<folder>` convention.
    #[serde(default)]
    pub root_dir: String,

    /// Handling of `blyt` entries without the `.bflyt` suffix
    #[serde(default)]
    pub unmatched: UnmatchedPolicy,
}

/// External converter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Program to execute
    #[serde(default = "default_converter_program")]
    pub program: String,

    /// Arguments placed before the source and destination paths
    #[serde(default = "default_converter_args")]
    pub args: Vec<String>,

    /// Pass `-W ignore` to the (Python) converter
    #[serde(default)]
    pub suppress_warnings: bool,

    /// Working directory for the converter process (defaults to the current one)
    #[serde(default)]
    pub working_dir: Option<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: default_converter_program(),
            args: default_converter_args(),
            suppress_warnings: false,
            working_dir: None,
        }
    }
}

impl ConverterConfig {
    fn validate(&self) -> Result<(), String> {
        if self.program.trim().is_empty() {
            return Err("converter.program cannot be empty".to_string());
        }

        if let Some(dir) = &self.working_dir {
            if dir.trim().is_empty() {
                return Err("converter.working_dir cannot be empty when set".to_string());
            }
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(
                "logging.local_path cannot be empty when local logging is enabled".to_string(),
            );
        }

        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_converter_program() -> String {
    "py".to_string()
}

fn default_converter_args() -> Vec<String> {
    vec!["main.py".to_string()]
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

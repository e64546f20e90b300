//! Domain error types
//!
//! This module defines the error hierarchy for flyt-export.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main flyt-export error type
///
/// This is the primary error type used throughout the application.
/// Every variant is fatal to the batch; nothing is recovered locally.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input layout errors (missing `blyt` directory, unusable entry names)
    #[error("Layout error: {0}")]
    Layout(String),

    /// Converter invocation errors
    #[error("Converter error: {0}")]
    Converter(#[from] ConverterError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Converter-specific errors
///
/// Errors raised while running the external converter for a single job.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// The converter process could not be started
    #[error("Failed to start converter '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    /// The converter ran but reported failure
    #[error("Converter '{program}' failed with {}{}", exit_label(.code), stderr_suffix(.stderr))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "termination by signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

impl ConverterError {
    /// Exit code reported by the converter, if it exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ConverterError::SpawnFailed { .. } => None,
            ConverterError::Failed { code, .. } => *code,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}

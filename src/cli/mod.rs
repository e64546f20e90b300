//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for flyt-export using clap.

pub mod commands;

use crate::domain::{ExportError, InputFolder};
use clap::{CommandFactory, Parser};

/// Batch-convert a folder of BFLYT layouts to FLYT
#[derive(Parser, Debug)]
#[command(name = "flyt-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Folder containing blyt/ (and anim/, timg/); output goes to <INPUT_FOLDER>/flyt
    #[arg(value_name = "INPUT_FOLDER")]
    pub input_folder: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "FLYT_EXPORT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FLYT_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub export: commands::export::ExportArgs,
}

impl Cli {
    /// The validated input folder, `None` when absent or blank
    pub fn input_folder(&self) -> Option<InputFolder> {
        self.input_folder
            .as_deref()
            .and_then(|folder| InputFolder::new(folder).ok())
    }

    /// One-line usage message
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

/// Process exit codes
pub mod exit_code {
    use super::ExportError;

    /// Every job converted
    pub const SUCCESS: i32 = 0;
    /// Missing input folder or invalid arguments
    pub const USAGE: i32 = 1;
    /// Configuration or logging setup failed
    pub const CONFIG: i32 = 2;
    /// Output directory or `blyt` listing failed
    pub const LAYOUT: i32 = 3;
    /// A converter run failed
    pub const CONVERTER: i32 = 4;
    /// Anything else
    pub const FATAL: i32 = 5;

    /// Exit code for a fatal export error
    pub fn for_error(error: &ExportError) -> i32 {
        match error {
            ExportError::Configuration(_) | ExportError::Validation(_) => CONFIG,
            ExportError::Layout(_) | ExportError::Io(_) => LAYOUT,
            ExportError::Converter(_) => CONVERTER,
            ExportError::Other(_) => FATAL,
        }
    }
}

//! Export command implementation
//!
//! Converts every entry of `<folder>/blyt` into `<folder>/flyt`.

use crate::adapters::converter::ProcessConverter;
use crate::cli::exit_code;
use crate::config::ExporterConfig;
use crate::core::export::{BatchExporter, ExportOptions};
use crate::domain::{InputFolder, UnmatchedPolicy};
use clap::Args;
use std::sync::Arc;

/// Arguments for the export run
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Resolve the input folder against this directory (e.g. "Layouts")
    #[arg(long, value_name = "DIR")]
    pub layouts_root: Option<String>,

    /// Converter program to run for each layout
    #[arg(long, value_name = "PROGRAM")]
    pub converter: Option<String>,

    /// Converter argument placed before the two paths (repeatable, replaces configured args)
    #[arg(long = "converter-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub converter_args: Vec<String>,

    /// Pass `-W ignore` to the converter
    #[arg(long)]
    pub suppress_warnings: bool,

    /// Skip blyt entries that don't end in .bflyt instead of truncating their names
    #[arg(long)]
    pub skip_unmatched: bool,

    /// Print the conversions without creating directories or running the converter
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Apply CLI overrides on top of file and environment configuration
    pub fn apply_overrides(&self, config: &mut ExporterConfig) {
        if let Some(root) = &self.layouts_root {
            tracing::debug!(root = %root, "Overriding layouts root from CLI");
            config.layout.root_dir = root.clone();
        }

        if let Some(program) = &self.converter {
            tracing::debug!(program = %program, "Overriding converter program from CLI");
            config.converter.program = program.clone();
        }

        if !self.converter_args.is_empty() {
            tracing::debug!(args = ?self.converter_args, "Overriding converter arguments from CLI");
            config.converter.args = self.converter_args.clone();
        }

        if self.suppress_warnings {
            config.converter.suppress_warnings = true;
        }

        if self.skip_unmatched {
            config.layout.unmatched = UnmatchedPolicy::Skip;
        }

        if self.dry_run {
            config.application.dry_run = true;
        }
    }

    /// Execute the export for `folder`
    ///
    /// Returns the process exit code; errors are reported on stderr.
    pub async fn execute(&self, folder: InputFolder, config: &ExporterConfig) -> anyhow::Result<i32> {
        let converter = Arc::new(ProcessConverter::from_config(&config.converter));
        let exporter = BatchExporter::new(folder, ExportOptions::from_config(config), converter);

        match exporter.execute().await {
            Ok(_) => Ok(exit_code::SUCCESS),
            Err(e) => {
                eprintln!("Export failed: {e}");
                Ok(exit_code::for_error(&e))
            }
        }
    }
}

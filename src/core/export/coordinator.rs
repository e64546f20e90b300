//! Batch exporter - orchestrates one folder conversion
//!
//! The run is strictly sequential:
//! 1. Ensure `flyt/` exists (skipped in dry-run mode)
//! 2. List `blyt/`
//! 3. Derive one job per entry
//! 4. For each job print the progress line, then wait for the converter
//!
//! The first failure aborts the batch; jobs after it are never attempted.

use crate::adapters::converter::Converter;
use crate::config::ExporterConfig;
use crate::core::export::plan::{plan_jobs, read_entry_names, ExportPlan};
use crate::core::export::summary::ExportSummary;
use crate::domain::{ExportError, InputFolder, LayoutDirs, Result, UnmatchedPolicy};
use crate::{log_batch_complete, log_job_start};
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

/// Settings that shape a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Directory the input folder is resolved against ("" for none)
    pub layouts_root: String,

    /// Handling of entries without the `.bflyt` suffix
    pub unmatched: UnmatchedPolicy,

    /// Print the jobs without creating directories or running the converter
    pub dry_run: bool,
}

impl ExportOptions {
    /// Extract the batch settings from the full configuration
    pub fn from_config(config: &ExporterConfig) -> Self {
        Self {
            layouts_root: config.layout.root_dir.clone(),
            unmatched: config.layout.unmatched,
            dry_run: config.application.dry_run,
        }
    }
}

/// Batch exporter for a single input folder
pub struct BatchExporter {
    folder: InputFolder,
    dirs: LayoutDirs,
    options: ExportOptions,
    converter: Arc<dyn Converter>,
}

impl BatchExporter {
    /// Create a new batch exporter
    pub fn new(folder: InputFolder, options: ExportOptions, converter: Arc<dyn Converter>) -> Self {
        let dirs = folder.resolve(&options.layouts_root);
        Self {
            folder,
            dirs,
            options,
            converter,
        }
    }

    /// Resolved directories of the input folder
    pub fn dirs(&self) -> &LayoutDirs {
        &self.dirs
    }

    /// Creates `flyt/` when it is missing
    ///
    /// Creation is single-level: a missing input folder is an error.
    /// Returns `true` when the directory was created by this call.
    pub async fn ensure_output_dir(&self) -> Result<bool> {
        let output_dir = self.dirs.output_dir();
        if tokio::fs::try_exists(&output_dir).await.unwrap_or(false) {
            tracing::debug!(path = %output_dir.display(), "Output directory already exists");
            return Ok(false);
        }

        tokio::fs::create_dir(&output_dir).await.map_err(|e| {
            ExportError::Layout(format!(
                "Cannot create output directory {}: {}",
                output_dir.display(),
                e
            ))
        })?;

        tracing::info!(path = %output_dir.display(), "Created output directory");
        Ok(true)
    }

    /// Lists `blyt/` and derives the jobs
    pub async fn plan(&self) -> Result<ExportPlan> {
        let names = read_entry_names(&self.dirs.source_dir()).await?;
        Ok(plan_jobs(names, self.options.unmatched))
    }

    /// Run the batch, printing progress lines to stdout
    pub async fn execute(&self) -> Result<ExportSummary> {
        let mut stdout = std::io::stdout();
        self.execute_with_progress(&mut stdout).await
    }

    /// Run the batch, writing one progress line per job to `progress`
    ///
    /// # Errors
    ///
    /// Stops at the first error: output directory creation, listing,
    /// writing progress, or a failed conversion.
    pub async fn execute_with_progress(&self, progress: &mut dyn Write) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new(self.folder.as_str());
        summary.dry_run = self.options.dry_run;

        tracing::debug!(
            input_folder = %self.folder,
            base = %self.dirs.base().display(),
            converter = %self.converter.describe(),
            dry_run = self.options.dry_run,
            "Starting batch export"
        );

        if !self.options.dry_run {
            summary.output_dir_created = self.ensure_output_dir().await?;
            summary.fonts_present = self.check_fonts().await;
        }

        let plan = self.plan().await?;
        summary.total_entries = plan.total_entries();
        summary.jobs_planned = plan.jobs.len();
        summary.skipped = plan.skipped;

        let total = plan.jobs.len();
        for (index, job) in plan.jobs.iter().enumerate() {
            writeln!(progress, "{}", job.progress_line(self.folder.as_str()))?;
            progress.flush()?;

            if self.options.dry_run {
                continue;
            }

            log_job_start!(index + 1, total, job.source(), job.destination());

            let source = self.dirs.join_relative(job.source());
            let destination = self.dirs.join_relative(job.destination());
            if let Err(e) = self.converter.convert(&source, &destination).await {
                let code = match &e {
                    ExportError::Converter(err) => err.exit_code(),
                    _ => None,
                };
                tracing::debug!(
                    source = %job.source(),
                    destination = %job.destination(),
                    code = ?code,
                    completed = summary.jobs_converted,
                    remaining = total - index - 1,
                    "Conversion failed, aborting batch"
                );
                return Err(e);
            }
            summary.jobs_converted += 1;
        }

        let summary = summary.with_duration(start_time.elapsed());
        log_batch_complete!(summary.jobs_converted, summary.duration);
        summary.log_summary();
        Ok(summary)
    }

    async fn check_fonts(&self) -> bool {
        let fonts_dir = self.dirs.fonts_dir();
        let present = tokio::fs::try_exists(&fonts_dir).await.unwrap_or(false);
        if !present {
            tracing::warn!(
                path = %fonts_dir.display(),
                "Fonts directory not found; place the required fonts there before opening the layouts"
            );
        }
        present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConverterError;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingConverter {
        calls: Mutex<Vec<(PathBuf, PathBuf)>>,
        fail_on_call: Option<usize>,
    }

    #[async_trait]
    impl Converter for RecordingConverter {
        async fn convert(&self, source: &Path, destination: &Path) -> Result<()> {
            let mut calls = self.calls.lock().unwrap();
            calls.push((source.to_path_buf(), destination.to_path_buf()));
            if Some(calls.len()) == self.fail_on_call {
                return Err(ConverterError::Failed {
                    program: "mock".to_string(),
                    code: Some(1),
                    stderr: String::new(),
                }
                .into());
            }
            Ok(())
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    fn exporter(root: &Path, converter: Arc<RecordingConverter>, dry_run: bool) -> BatchExporter {
        let options = ExportOptions {
            layouts_root: root.to_string_lossy().to_string(),
            unmatched: UnmatchedPolicy::Truncate,
            dry_run,
        };
        BatchExporter::new(InputFolder::new("Demo").unwrap(), options, converter)
    }

    #[tokio::test]
    async fn test_ensure_output_dir_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("Demo")).unwrap();
        let exporter = exporter(root.path(), Arc::new(RecordingConverter::default()), false);

        assert!(exporter.ensure_output_dir().await.unwrap());
        assert!(!exporter.ensure_output_dir().await.unwrap());
        assert!(root.path().join("Demo").join("flyt").is_dir());
    }

    #[tokio::test]
    async fn test_ensure_output_dir_requires_input_folder() {
        let root = tempfile::tempdir().unwrap();
        let exporter = exporter(root.path(), Arc::new(RecordingConverter::default()), false);

        let err = exporter.ensure_output_dir().await.unwrap_err();
        assert!(matches!(err, ExportError::Layout(_)));
    }

    #[tokio::test]
    async fn test_dry_run_prints_without_side_effects() {
        let root = tempfile::tempdir().unwrap();
        let blyt = root.path().join("Demo").join("blyt");
        std::fs::create_dir_all(&blyt).unwrap();
        std::fs::write(blyt.join("Main.bflyt"), b"").unwrap();

        let converter = Arc::new(RecordingConverter::default());
        let exporter = exporter(root.path(), converter.clone(), true);

        let mut progress: Vec<u8> = Vec::new();
        let summary = exporter.execute_with_progress(&mut progress).await.unwrap();

        assert_eq!(
            String::from_utf8(progress).unwrap(),
            "Converting: Demo/blyt/Main.bflyt -> Demo/flyt/Main.flyt\n"
        );
        assert!(summary.dry_run);
        assert_eq!(summary.jobs_planned, 1);
        assert_eq!(summary.jobs_converted, 0);
        assert!(converter.calls.lock().unwrap().is_empty());
        assert!(!root.path().join("Demo").join("flyt").exists());
    }

    #[tokio::test]
    async fn test_failure_stops_batch() {
        let root = tempfile::tempdir().unwrap();
        let blyt = root.path().join("Demo").join("blyt");
        std::fs::create_dir_all(&blyt).unwrap();
        for name in ["A.bflyt", "B.bflyt", "C.bflyt"] {
            std::fs::write(blyt.join(name), b"").unwrap();
        }

        let converter = Arc::new(RecordingConverter {
            fail_on_call: Some(1),
            ..RecordingConverter::default()
        });
        let exporter = exporter(root.path(), converter.clone(), false);

        let mut progress: Vec<u8> = Vec::new();
        let err = exporter
            .execute_with_progress(&mut progress)
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Converter(_)));
        assert_eq!(converter.calls.lock().unwrap().len(), 1);
        assert_eq!(String::from_utf8(progress).unwrap().lines().count(), 1);
    }
}

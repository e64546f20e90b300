//! Export summary
//!
//! The summary is logged, never printed: a batch that finishes simply exits 0.

use std::time::Duration;

/// Summary of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Input folder as given on the command line
    pub input_folder: String,

    /// Entries found in the `blyt` directory
    pub total_entries: usize,

    /// Jobs derived from the listing
    pub jobs_planned: usize,

    /// Jobs whose converter run succeeded
    pub jobs_converted: usize,

    /// Entries left out because they lack the `.bflyt` suffix
    pub skipped: Vec<String>,

    /// Whether this run created the `flyt` directory
    pub output_dir_created: bool,

    /// Whether `flyt/Fonts` was present after the output directory was ensured
    pub fonts_present: bool,

    /// Dry run: jobs were printed but not executed
    pub dry_run: bool,

    /// Wall-clock duration of the batch
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty summary for `input_folder`
    pub fn new(input_folder: impl Into<String>) -> Self {
        Self {
            input_folder: input_folder.into(),
            ..Self::default()
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether every planned job ran to completion
    pub fn is_complete(&self) -> bool {
        self.dry_run || self.jobs_converted == self.jobs_planned
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::debug!(
            input_folder = %self.input_folder,
            total_entries = self.total_entries,
            planned = self.jobs_planned,
            converted = self.jobs_converted,
            skipped = self.skipped.len(),
            output_dir_created = self.output_dir_created,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            "Export summary"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary() {
        let summary = ExportSummary::new("Demo");
        assert_eq!(summary.input_folder, "Demo");
        assert_eq!(summary.jobs_planned, 0);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_incomplete_summary() {
        let mut summary = ExportSummary::new("Demo");
        summary.jobs_planned = 3;
        summary.jobs_converted = 2;
        assert!(!summary.is_complete());

        summary.dry_run = true;
        assert!(summary.is_complete());
    }

    #[test]
    fn test_with_duration() {
        let summary = ExportSummary::new("Demo").with_duration(Duration::from_millis(250));
        assert_eq!(summary.duration, Duration::from_millis(250));
        summary.log_summary();
    }
}

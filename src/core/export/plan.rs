//! Source enumeration and job planning
//!
//! Entries are taken in the order the operating system lists them; nothing
//! is sorted or deduplicated.

use crate::domain::{ConversionJob, ExportError, Result, UnmatchedPolicy};
use std::path::Path;

/// Jobs derived from one `blyt` listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPlan {
    /// Jobs in listing order
    pub jobs: Vec<ConversionJob>,

    /// Entry names left out under [`UnmatchedPolicy::Skip`]
    pub skipped: Vec<String>,
}

impl ExportPlan {
    /// Number of listed entries the plan accounts for
    pub fn total_entries(&self) -> usize {
        self.jobs.len() + self.skipped.len()
    }
}

/// Builds the job list for a sequence of entry names
pub fn plan_jobs<I, S>(names: I, policy: UnmatchedPolicy) -> ExportPlan
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut plan = ExportPlan::default();
    for name in names {
        let name = name.as_ref();
        match ConversionJob::from_entry_name(name, policy) {
            Some(job) => plan.jobs.push(job),
            None => {
                tracing::warn!(entry = %name, "Skipping entry without .bflyt extension");
                plan.skipped.push(name.to_string());
            }
        }
    }
    plan
}

/// Lists every entry name of `dir`
///
/// Subdirectories and files of any kind are included.
///
/// # Errors
///
/// Returns [`ExportError::Layout`] when `dir` cannot be listed or an entry
/// name is not valid UTF-8.
pub async fn read_entry_names(dir: &Path) -> Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        ExportError::Layout(format!("Cannot read directory {}: {}", dir.display(), e))
    })?;

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| {
        ExportError::Layout(format!("Cannot read directory {}: {}", dir.display(), e))
    })? {
        let name = entry.file_name().into_string().map_err(|raw| {
            ExportError::Layout(format!(
                "Entry name {} in {} is not valid UTF-8",
                raw.to_string_lossy(),
                dir.display()
            ))
        })?;
        names.push(name);
    }

    Ok(names)
}

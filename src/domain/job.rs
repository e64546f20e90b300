//! Conversion jobs and the fixed layout folder convention

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subfolder holding the binary layouts
pub const SOURCE_DIR: &str = "blyt";

/// Subfolder receiving the converted layouts
pub const OUTPUT_DIR: &str = "flyt";

/// Fonts folder the operator places inside the output folder
pub const FONTS_DIR: &str = "Fonts";

/// Extension of binary layouts
pub const SOURCE_EXTENSION: &str = ".bflyt";

/// Extension of converted layouts
pub const OUTPUT_EXTENSION: &str = ".flyt";

/// What to do with `blyt` entries that don't end in `.bflyt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Strip the last six characters regardless of the name
    #[default]
    Truncate,
    /// Leave the entry out of the batch
    Skip,
}

impl fmt::Display for UnmatchedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedPolicy::Truncate => write!(f, "truncate"),
            UnmatchedPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// A single source/destination pair, relative to the input folder
///
/// Paths use `/` separators so the progress line reads the same on every
/// platform; [`crate::domain::LayoutDirs::join_relative`] turns them into
/// real paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionJob {
    source: String,
    destination: String,
}

impl ConversionJob {
    /// Builds the job for a `blyt` entry name
    ///
    /// Returns `None` only when `policy` is [`UnmatchedPolicy::Skip`] and the
    /// name lacks the `.bflyt` suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use flyt_export::domain::{ConversionJob, UnmatchedPolicy};
    ///
    /// let job = ConversionJob::from_entry_name("Main.bflyt", UnmatchedPolicy::Truncate).unwrap();
    /// assert_eq!(job.source(), "blyt/Main.bflyt");
    /// assert_eq!(job.destination(), "flyt/Main.flyt");
    /// ```
    pub fn from_entry_name(name: &str, policy: UnmatchedPolicy) -> Option<Self> {
        let stem = match name.strip_suffix(SOURCE_EXTENSION) {
            Some(stem) => stem.to_string(),
            None => match policy {
                UnmatchedPolicy::Skip => return None,
                UnmatchedPolicy::Truncate => truncate_suffix(name),
            },
        };

        Some(Self {
            source: format!("{SOURCE_DIR}/{name}"),
            destination: format!("{OUTPUT_DIR}/{stem}{OUTPUT_EXTENSION}"),
        })
    }

    /// Source path relative to the input folder, e.g. `blyt/Main.bflyt`
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Destination path relative to the input folder, e.g. `flyt/Main.flyt`
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Progress line printed right before the converter runs
    pub fn progress_line(&self, folder: &str) -> String {
        format!(
            "Converting: {folder}/{} -> {folder}/{}",
            self.source, self.destination
        )
    }
}

// Drops as many trailing characters as the source extension has, whatever they are.
fn truncate_suffix(name: &str) -> String {
    let keep = name
        .chars()
        .count()
        .saturating_sub(SOURCE_EXTENSION.chars().count());
    name.chars().take(keep).collect()
}

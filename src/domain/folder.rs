//! Input folder newtype and layout directory resolution

use super::job::{FONTS_DIR, OUTPUT_DIR, SOURCE_DIR};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Input folder newtype wrapper
///
/// Names a directory expected to contain a `blyt` subdirectory. The value is
/// kept verbatim because it prefixes every progress line.
///
/// # Examples
///
/// ```
/// use flyt_export::domain::InputFolder;
/// use std::str::FromStr;
///
/// let folder = InputFolder::from_str("Demo").unwrap();
/// assert_eq!(folder.as_str(), "Demo");
/// assert!(InputFolder::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputFolder(String);

impl InputFolder {
    /// Creates a new InputFolder, rejecting empty or blank values
    pub fn new(folder: impl Into<String>) -> Result<Self, String> {
        let folder = folder.into();
        if folder.trim().is_empty() {
            return Err("Input folder cannot be empty".to_string());
        }
        Ok(Self(folder))
    }

    /// Returns the folder as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the folder against an optional layouts root
    ///
    /// An empty root leaves the folder as given, so `Demo` stays `Demo` and
    /// `Layouts` turns it into `Layouts/Demo`.
    pub fn resolve(&self, layouts_root: &str) -> LayoutDirs {
        let base = if layouts_root.is_empty() {
            PathBuf::from(&self.0)
        } else {
            Path::new(layouts_root).join(&self.0)
        };
        LayoutDirs { base }
    }
}

impl fmt::Display for InputFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InputFolder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for InputFolder {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// On-disk locations of one layout folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDirs {
    base: PathBuf,
}

impl LayoutDirs {
    /// The resolved input folder
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `<base>/blyt`
    pub fn source_dir(&self) -> PathBuf {
        self.base.join(SOURCE_DIR)
    }

    /// `<base>/flyt`
    pub fn output_dir(&self) -> PathBuf {
        self.base.join(OUTPUT_DIR)
    }

    /// `<base>/flyt/Fonts`
    pub fn fonts_dir(&self) -> PathBuf {
        self.output_dir().join(FONTS_DIR)
    }

    /// Joins a `/`-separated relative path such as `blyt/Main.bflyt` onto the base
    pub fn join_relative(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.base.clone(), |path, part| path.join(part))
    }
}

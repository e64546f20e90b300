//! Domain models and types for flyt-export.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Input folder** ([`InputFolder`]) and its resolved directories ([`LayoutDirs`])
//! - **Conversion jobs** ([`ConversionJob`]) derived from `blyt` entry names
//! - **Error types** ([`ExportError`], [`ConverterError`])
//! - **Result type alias** ([`Result`])
//!
//! # Layout convention
//!
//! ```text
//! <inputFolder>/
//!   anim/   .bflan files (read by the converter)
//!   blyt/   .bflyt files (enumerated here)
//!   timg/   .bflim files (read by the converter)
//!   flyt/   created if absent, receives .flyt files and a manually placed Fonts/
//! ```
//!
//! ```rust
//! use flyt_export::domain::{ConversionJob, InputFolder, UnmatchedPolicy};
//!
//! let folder = InputFolder::new("Demo").unwrap();
//! let job = ConversionJob::from_entry_name("Main.bflyt", UnmatchedPolicy::Truncate).unwrap();
//! assert_eq!(
//!     job.progress_line(folder.as_str()),
//!     "Converting: Demo/blyt/Main.bflyt -> Demo/flyt/Main.flyt"
//! );
//! ```

pub mod errors;
pub mod folder;
pub mod job;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ConverterError, ExportError};
pub use folder::{InputFolder, LayoutDirs};
pub use job::{ConversionJob, UnmatchedPolicy};
pub use result::Result;

//! Configuration management for flyt-export.
//!
//! The tool runs without any configuration file; a TOML file only changes
//! the defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [layout]
//! # Resolve input folders as Layouts/<folder>
//! root_dir = "Layouts"
//! # "truncate" (default) or "skip"
//! unmatched = "truncate"
//!
//! [converter]
//! program = "py"
//! args = ["${LAYOUT_EXPORTER_DIR}/main.py"]
//! suppress_warnings = true
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted before parsing, and
//! `FLYT_EXPORT_<SECTION>_<KEY>` variables override parsed values:
//!
//! ```bash
//! export FLYT_EXPORT_CONVERTER_PROGRAM="python3"
//! export FLYT_EXPORT_LAYOUT_UNMATCHED="skip"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{default_config, load_config};
pub use schema::{ApplicationConfig, ConverterConfig, ExporterConfig, LayoutConfig, LoggingConfig};

//! Core business logic for flyt-export.
//!
//! # Example
//!
//! ```rust,no_run
//! use flyt_export::adapters::converter::ProcessConverter;
//! use flyt_export::config::default_config;
//! use flyt_export::core::export::{BatchExporter, ExportOptions};
//! use flyt_export::domain::InputFolder;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = default_config()?;
//! let converter = Arc::new(ProcessConverter::from_config(&config.converter));
//! let folder = InputFolder::new("Demo")?;
//!
//! let exporter = BatchExporter::new(folder, ExportOptions::from_config(&config), converter);
//! let summary = exporter.execute().await?;
//! println!("Converted {} layouts", summary.jobs_converted);
//! # Ok(())
//! # }
//! ```

pub mod export;

//! Batch export orchestration
//!
//! This module provides:
//! - Source enumeration and job planning
//! - The sequential batch exporter
//! - Summary and reporting

pub mod coordinator;
pub mod plan;
pub mod summary;

pub use coordinator::{BatchExporter, ExportOptions};
pub use plan::{plan_jobs, read_entry_names, ExportPlan};
pub use summary::ExportSummary;

//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels, overridable through `RUST_LOG`
//! - Console output on stderr
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use flyt_export::logging::init_logging;
//! use flyt_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a single conversion
///
/// # Example
///
/// ```no_run
/// use flyt_export::log_job_start;
///
/// log_job_start!(1, 2, "blyt/Main.bflyt", "flyt/Main.flyt");
/// ```
#[macro_export]
macro_rules! log_job_start {
    ($index:expr, $total:expr, $source:expr, $destination:expr) => {
        tracing::debug!(
            job = $index,
            total = $total,
            source = %$source,
            destination = %$destination,
            "Starting conversion"
        );
    };
}

/// Log the completion of a batch
///
/// # Example
///
/// ```no_run
/// use flyt_export::log_batch_complete;
/// use std::time::Duration;
///
/// log_batch_complete!(12, Duration::from_secs(3));
/// ```
#[macro_export]
macro_rules! log_batch_complete {
    ($count:expr, $duration:expr) => {
        tracing::debug!(
            count = $count,
            duration_ms = $duration.as_millis(),
            "Batch completed"
        );
    };
}

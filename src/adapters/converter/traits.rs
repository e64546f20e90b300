//! Converter abstraction
//!
//! The exporter only needs to hand a source and destination path to
//! something that turns one layout into the other and reports success.

use crate::domain::Result;
use async_trait::async_trait;
use std::path::Path;

/// External bflyt to flyt converter
#[async_trait]
pub trait Converter: Send + Sync {
    /// Convert `source` into `destination`, returning once the conversion finished
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ExportError::Converter`] when the converter cannot
    /// be started or reports failure.
    async fn convert(&self, source: &Path, destination: &Path) -> Result<()>;

    /// Human-readable description used in logs, e.g. `py main.py`
    fn describe(&self) -> String;
}

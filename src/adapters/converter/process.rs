//! Converter backed by an external program

use super::traits::Converter;
use crate::config::ConverterConfig;
use crate::domain::{ConverterError, Result};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Interpreter flags that silence Python warnings
const SUPPRESS_WARNING_ARGS: [&str; 2] = ["-W", "ignore"];

/// Runs `program [args..] <source> <destination>` once per job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConverter {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ProcessConverter {
    /// Create a converter for `program` with leading `args`
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
        }
    }

    /// Create a converter from configuration
    ///
    /// With `suppress_warnings` the interpreter receives `-W ignore` ahead of
    /// the configured arguments.
    pub fn from_config(config: &ConverterConfig) -> Self {
        let mut args = Vec::with_capacity(config.args.len() + SUPPRESS_WARNING_ARGS.len());
        if config.suppress_warnings {
            args.extend(SUPPRESS_WARNING_ARGS.iter().map(|a| a.to_string()));
        }
        args.extend(config.args.iter().cloned());

        let converter = Self::new(config.program.clone(), args);
        match &config.working_dir {
            Some(dir) => converter.with_working_dir(dir),
            None => converter,
        }
    }

    /// Run the converter from `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Program name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list for one job
    pub fn command_args(&self, source: &Path, destination: &Path) -> Vec<OsString> {
        self.args
            .iter()
            .map(OsString::from)
            .chain([source.as_os_str().to_owned(), destination.as_os_str().to_owned()])
            .collect()
    }
}

#[async_trait]
impl Converter for ProcessConverter {
    async fn convert(&self, source: &Path, destination: &Path) -> Result<()> {
        let mut command = Command::new(&self.program);
        command
            .args(self.command_args(source, destination))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        tracing::trace!(
            program = %self.program,
            source = %source.display(),
            destination = %destination.display(),
            "Spawning converter"
        );

        let output = command
            .output()
            .await
            .map_err(|e| ConverterError::SpawnFailed {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !stdout.trim().is_empty() {
            tracing::debug!(output = %stdout.trim_end(), "Converter stdout");
        }

        if !output.status.success() {
            return Err(ConverterError::Failed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: stderr.into_owned(),
            }
            .into());
        }

        if !stderr.trim().is_empty() {
            tracing::debug!(output = %stderr.trim_end(), "Converter stderr");
        }

        Ok(())
    }

    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// flyt-export - BFLYT to FLYT batch exporter
// Copyright (c) 2025 flyt-export Contributors
// Licensed under the MIT License

//! # flyt-export
//!
//! Batch exporter that turns a folder of binary layouts (`.bflyt`) into
//! text layouts (`.flyt`) by running an external converter once per file.
//!
//! ## Overview
//!
//! Given an input folder laid out as
//!
//! ```text
//! <inputFolder>/
//!   anim/   (.bflan)
//!   blyt/   (.bflyt)
//!   timg/   (.bflim)
//! ```
//!
//! the exporter ensures `<inputFolder>/flyt` exists, lists `blyt/`, and for
//! every entry runs `converter <inputFolder>/blyt/N <inputFolder>/flyt/M.flyt`,
//! one after the other. The first failing conversion aborts the batch.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface, CLI overrides and exit codes
//! - [`core`] - Job planning and the sequential batch exporter
//! - [`adapters`] - The external converter process
//! - [`domain`] - Input folder, conversion jobs and error types
//! - [`config`] - TOML configuration with environment overrides
//! - [`logging`] - tracing subscriber setup
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error type is
//! [`domain::ExportError`]:
//!
//! ```rust,no_run
//! use flyt_export::domain::ExportError;
//!
//! fn example() -> Result<(), ExportError> {
//!     let config = flyt_export::config::load_config("flyt-export.toml")?;
//!     println!("converter: {}", config.converter.program);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

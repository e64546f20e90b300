// flyt-export - BFLYT to FLYT batch exporter
// Copyright (c) 2025 flyt-export Contributors
// Licensed under the MIT License

use clap::Parser;
use flyt_export::cli::{exit_code, Cli};
use flyt_export::config::{default_config, load_config};
use flyt_export::logging::init_logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() {
                exit_code::USAGE
            } else {
                exit_code::SUCCESS
            });
        }
    };

    // Nothing touches the filesystem before the folder is known
    let Some(folder) = cli.input_folder() else {
        eprintln!("{}", Cli::usage());
        eprintln!("Converts <INPUT_FOLDER>/blyt/*.bflyt into <INPUT_FOLDER>/flyt/*.flyt");
        process::exit(exit_code::USAGE);
    };

    let config = match &cli.config {
        Some(path) => load_config(path),
        None => default_config(),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(exit_code::CONFIG);
        }
    };

    cli.export.apply_overrides(&mut config);
    if let Some(level) = &cli.log_level {
        config.application.log_level = level.clone();
    }

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation failed: {e}");
        process::exit(exit_code::CONFIG);
    }

    let guard = match init_logging(&config.application.log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(exit_code::CONFIG);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        input_folder = %folder,
        "flyt-export starting"
    );

    let code = match cli.export.execute(folder, &config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::FATAL
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(code);
}

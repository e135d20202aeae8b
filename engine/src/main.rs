// gbind
// Main entry point for the gbind binary

use std::process::ExitCode;

use clap::Parser;
use gbind::cli::{Cli, Command};
use gbind::config::Config;
use gbind::handlers::{handle_probe, handle_symbols, OutputFormat};
use gbind::telemetry::init_telemetry_with_level;

fn main() -> anyhow::Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Determine output format
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    // Load configuration (or use custom path if provided)
    let config = if let Some(config_path) = &cli.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load_or_create()?
    };

    // --log wins over the configured level; RUST_LOG wins over both
    let log_level = cli.log.as_deref().unwrap_or(&config.core.log_level);
    init_telemetry_with_level(log_level);

    tracing::debug!("gbind v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Probe { modules } => {
            if handle_probe(&config, &modules, format)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }

        Command::Symbols { module } => {
            handle_symbols(&config, &module, format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

//! CLI interface for gbind
//!
//! This module provides the command-line interface using clap's derive API.
//! The binary is a diagnostic tool: it binds the toolkit modules the same way
//! an application would and reports what it found.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gbind toolkit binding probe
///
/// Locates the GLib/GTK 4 shared libraries at run time, resolves their symbol
/// tables and reports which modules and symbols are available.
#[derive(Parser, Debug)]
#[command(name = "gbind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log: Option<String>,

    /// Specify alternate configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize modules in load order and report what bound
    Probe {
        /// Modules to probe (default: all)
        modules: Vec<String>,
    },

    /// List a module's candidate libraries and declared symbols
    Symbols {
        /// Module name
        module: String,
    },
}

//! gbind Library
//!
//! Run-time binding of the GLib/GTK 4 shared libraries. Each toolkit library
//! is located by trying candidate names in order, its exported functions are
//! resolved into a typed table, and the handle is released again on close.
//! It is used by both the `gbind` binary and integration tests.

/// Shared error and report types, re-exported for `symbol_table!` expansions
pub use sdk;

/// Locating and opening shared libraries
pub mod loader;

/// Symbol tables and their resolution
pub mod binder;

/// Per-module lifecycle
pub mod module;

/// GLib/GTK 4 module tables
pub mod toolkit;

/// Configuration management module
pub mod config;

/// Telemetry and Observability
pub mod telemetry;

/// CLI interface module
pub mod cli;

/// Command handlers module
pub mod handlers;

//! Command handlers for CLI operations
//!
//! This module implements the handlers for all CLI commands:
//! - probe: Bind toolkit modules and report the result per module
//! - symbols: List a module's candidates and declared symbols

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::toolkit::{Toolkit, MODULE_NAMES};
use sdk::errors::BindErrorExt;
use sdk::types::Requirement;

/// Output format for command results
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for machine consumption
    Json,
}

/// Probe result for one module
#[derive(Debug, Serialize)]
pub struct ProbeRow {
    pub module: String,
    pub required: bool,
    pub status: String,
    pub library: Option<String>,
    pub resolved: usize,
    pub unresolved: Vec<String>,
    pub error: Option<String>,
    pub hint: Option<String>,
}

/// Probe every selected module and print a report
///
/// Unlike [`Toolkit::initialize`], probing does not stop at the first
/// failing required module: every selected module is attempted so the report
/// is complete. All modules are closed again before returning.
///
/// Returns `true` when every required module bound.
pub fn handle_probe(config: &Config, modules: &[String], format: OutputFormat) -> Result<bool> {
    let selected: Vec<&str> = if modules.is_empty() {
        MODULE_NAMES.to_vec()
    } else {
        modules.iter().map(String::as_str).collect()
    };
    if let Some(unknown) = selected.iter().find(|m| !MODULE_NAMES.contains(m)) {
        anyhow::bail!(
            "Unknown module '{}'. Must be one of: {}",
            unknown,
            MODULE_NAMES.join(", ")
        );
    }

    let mut toolkit = Toolkit::from_config(config)?;
    let rows = probe_modules(&mut toolkit, &selected);
    toolkit.close()?;

    let ok = rows
        .iter()
        .all(|row| !row.required || row.error.is_none());

    match format {
        OutputFormat::Text => {
            for row in &rows {
                print_probe_row(row);
            }
            println!();
            if ok {
                println!("✓ All required modules bound");
            } else {
                println!("✗ One or more required modules failed");
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "ok": ok,
                "modules": rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(ok)
}

fn probe_modules(toolkit: &mut Toolkit, selected: &[&str]) -> Vec<ProbeRow> {
    let mut rows = Vec::new();

    for module in toolkit.modules_mut() {
        if !selected.contains(&module.name()) {
            continue;
        }

        let result = module.initialize();
        let report = module.report();
        let (error, hint) = match &result {
            Ok(()) => (None, None),
            Err(e) => (Some(e.to_string()), Some(e.user_hint().to_string())),
        };

        rows.push(ProbeRow {
            module: module.name().to_string(),
            required: module.is_required(),
            status: module.status().to_string(),
            library: module.library_name().map(str::to_string),
            resolved: report.map(|r| r.resolved.len()).unwrap_or(0),
            unresolved: report.map(|r| r.unresolved.clone()).unwrap_or_default(),
            error,
            hint,
        });
    }

    rows
}

fn print_probe_row(row: &ProbeRow) {
    let mark = match (&row.error, row.required) {
        (None, _) => "✓",
        (Some(_), true) => "✗",
        (Some(_), false) => "-",
    };
    println!(
        "{} {:<13} {:<13} {}",
        mark,
        row.module,
        row.status,
        row.library.as_deref().unwrap_or("(not loaded)")
    );
    if !row.unresolved.is_empty() {
        println!(
            "    {} resolved, unresolved: {}",
            row.resolved,
            row.unresolved.join(", ")
        );
    }
    if let Some(error) = &row.error {
        println!("    {}", error);
    }
    if let Some(hint) = &row.hint {
        println!("    Hint: {}", hint);
    }
}

/// List a module's candidates and declared symbols
pub fn handle_symbols(config: &Config, module: &str, format: OutputFormat) -> Result<()> {
    let toolkit = Toolkit::from_config(config)?;
    let module = toolkit.module(module)?;

    match format {
        OutputFormat::Text => {
            println!("Module: {}", module.name());
            println!(
                "Required: {}",
                if module.is_required() { "yes" } else { "no" }
            );
            println!("Candidates:");
            for candidate in module.candidates() {
                println!("  {}", candidate);
            }
            println!("Symbols:");
            for symbol in module.symbols() {
                let tag = match symbol.requirement {
                    Requirement::Required => "required",
                    Requirement::Optional => "optional",
                };
                println!("  {:<40} {}", symbol.name, tag);
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "module": module.name(),
                "required": module.is_required(),
                "candidates": module.candidates(),
                "symbols": module.symbols(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_rejects_unknown_module() {
        let config = Config::default();
        let result = handle_probe(&config, &["qt".to_string()], OutputFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_probe_optional_missing_module_is_ok() {
        let config = Config::from_toml_str(
            r#"
[modules.gsk]
candidates = ["libgbind-missing-gsk.so"]
required = false
"#,
        )
        .unwrap();
        let ok = handle_probe(&config, &["gsk".to_string()], OutputFormat::Json).unwrap();
        assert!(ok);
    }

    #[test]
    fn test_probe_required_missing_module_fails() {
        let config = Config::from_toml_str(
            r#"
[modules.gio]
candidates = ["libgbind-missing-gio.so"]
"#,
        )
        .unwrap();
        let ok = handle_probe(&config, &["gio".to_string()], OutputFormat::Text).unwrap();
        assert!(!ok);
    }

    #[test]
    fn test_symbols_unknown_module() {
        let config = Config::default();
        assert!(handle_symbols(&config, "qt", OutputFormat::Text).is_err());
    }

    #[test]
    fn test_symbols_known_module() {
        let config = Config::default();
        assert!(handle_symbols(&config, "gmodule", OutputFormat::Json).is_ok());
    }
}

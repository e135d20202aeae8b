//! Configuration management
//!
//! This module handles loading, validation, and management of the gbind
//! configuration. Configuration is stored in TOML format at
//! ~/.gbind/config.toml.
//!
//! # Configuration Sections
//!
//! - **core**: Log level
//! - **binding**: Whether unbound required symbols reject a module
//! - **modules.<name>**: Per-module candidate names and whether the module is
//!   required
//!
//! Every section is optional; an empty file yields the defaults (every
//! toolkit module required, built-in candidate names, strict binding).
//!
//! # Examples
//!
//! ```
//! use gbind::config::Config;
//!
//! let config = Config::from_toml_str(r#"
//! [modules.girepository]
//! candidates = ["libgirepository-1.0.so.1"]
//! required = false
//! "#).unwrap();
//!
//! let gir = config.modules.get("girepository").unwrap();
//! assert!(!gir.required);
//! assert!(config.binding.strict);
//! ```

use crate::toolkit::MODULE_NAMES;
use sdk::errors::BindError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Core settings
    #[serde(default)]
    pub core: CoreConfig,

    /// Symbol binding policy
    #[serde(default)]
    pub binding: BindingConfig,

    /// Per-module overrides keyed by module name
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleConfig>,
}

/// Core configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Symbol binding configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Reject a module when any of its required symbols is unbound
    #[serde(default = "default_true")]
    pub strict: bool,
}

/// Per-module configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Candidate library names in preference order (built-in list if absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,

    /// Whether failing to load this module is fatal
    #[serde(default = "default_true")]
    pub required: bool,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl Config {
    /// Load configuration from the default location (~/.gbind/config.toml)
    ///
    /// If the configuration file doesn't exist, writes a default one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file cannot be read or written
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load_or_create() -> Result<Self, BindError> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Self::create_default(&config_path)
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load_from_path(path: &Path) -> Result<Self, BindError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BindError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, BindError> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| BindError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Create default configuration and save to path
    fn create_default(path: &Path) -> Result<Self, BindError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BindError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let config = Self::default();

        let toml_string = toml::to_string_pretty(&config)
            .map_err(|e| BindError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| BindError::Config(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Wrote default configuration to {}", path.display());
        Ok(config)
    }

    /// Get the default configuration file path (~/.gbind/config.toml)
    pub fn default_config_path() -> Result<PathBuf, BindError> {
        let home = dirs::home_dir()
            .ok_or_else(|| BindError::Config("Could not determine home directory".to_string()))?;

        Ok(home.join(".gbind").join("config.toml"))
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The log level is not recognized
    /// - A module section names an unknown module
    /// - A candidate list is empty or contains an empty name
    pub fn validate(&self) -> Result<(), BindError> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.core.log_level.as_str()) {
            return Err(BindError::Config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.core.log_level,
                valid_log_levels.join(", ")
            )));
        }

        for (name, module) in &self.modules {
            if !MODULE_NAMES.contains(&name.as_str()) {
                return Err(BindError::Config(format!(
                    "Unknown module '{}'. Must be one of: {}",
                    name,
                    MODULE_NAMES.join(", ")
                )));
            }

            if let Some(candidates) = &module.candidates {
                if candidates.is_empty() {
                    return Err(BindError::Config(format!(
                        "Module '{}' has an empty candidate list",
                        name
                    )));
                }
                if candidates.iter().any(|c| c.trim().is_empty()) {
                    return Err(BindError::Config(format!(
                        "Module '{}' has an empty candidate name",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.core.log_level, "info");
        assert!(config.binding.strict);
        assert!(config.modules.is_empty());
    }

    #[test]
    fn test_module_override_parsing() {
        let config = Config::from_toml_str(
            r#"
[core]
log_level = "debug"

[binding]
strict = false

[modules.gtk]
candidates = ["libgtk-4.so.1", "/opt/gtk/lib/libgtk-4.so"]

[modules.girepository]
required = false
"#,
        )
        .unwrap();

        assert_eq!(config.core.log_level, "debug");
        assert!(!config.binding.strict);

        let gtk = &config.modules["gtk"];
        assert!(gtk.required);
        assert_eq!(
            gtk.candidates.as_deref(),
            Some(&["libgtk-4.so.1".to_string(), "/opt/gtk/lib/libgtk-4.so".to_string()][..])
        );

        let gir = &config.modules["girepository"];
        assert!(!gir.required);
        assert!(gir.candidates.is_none());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = Config::from_toml_str("[core]\nlog_level = \"loud\"\n");
        assert!(matches!(result, Err(BindError::Config(msg)) if msg.contains("loud")));
    }

    #[test]
    fn test_unknown_module_rejected() {
        let result = Config::from_toml_str("[modules.qt]\nrequired = false\n");
        assert!(matches!(result, Err(BindError::Config(msg)) if msg.contains("qt")));
    }

    #[test]
    fn test_empty_candidate_list_rejected() {
        let result = Config::from_toml_str("[modules.glib]\ncandidates = []\n");
        assert!(matches!(result, Err(BindError::Config(msg)) if msg.contains("empty candidate list")));
    }

    #[test]
    fn test_blank_candidate_name_rejected() {
        let result = Config::from_toml_str("[modules.glib]\ncandidates = [\" \"]\n");
        assert!(matches!(result, Err(BindError::Config(msg)) if msg.contains("empty candidate name")));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = Config::from_toml_str("[core\nlog_level = ");
        assert!(matches!(result, Err(BindError::Config(msg)) if msg.contains("parse")));
    }
}

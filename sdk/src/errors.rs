//! Error types and handling
//!
//! This module provides the error types used throughout gbind. All errors
//! implement the `BindErrorExt` trait which provides user-friendly hints and
//! indicates whether errors are recoverable.
//!
//! Two kinds matter most to a consumer:
//!
//! - `LibraryNotFound`: none of a module's candidate names could be opened.
//!   Whether that is fatal is the caller's decision (a required toolkit
//!   module usually is, an optional helper library usually is not).
//! - `SymbolUnresolved`: the library opened but one or more *required*
//!   exports were missing. Optional exports never produce this error; they
//!   simply stay unbound in their slot.

use thiserror::Error;

/// Trait for gbind error extensions
///
/// This trait provides additional context for errors, including user-friendly
/// hints and recoverability information.
pub trait BindErrorExt {
    /// Returns a user-friendly hint for the error
    fn user_hint(&self) -> &str;

    /// Returns whether the error is recoverable
    ///
    /// Recoverable errors can be retried or worked around (for example by
    /// initializing the module again, or by calling a different slot).
    /// Non-recoverable errors need the environment fixed first, typically by
    /// installing the missing library.
    fn is_recoverable(&self) -> bool;
}

/// Main gbind error type
///
/// # Examples
///
/// ```
/// use sdk::errors::{BindError, BindErrorExt};
///
/// let error = BindError::LibraryNotFound {
///     module: "gtk".to_string(),
///     candidates: vec!["libgtk-4.so.1".to_string()],
/// };
/// println!("Hint: {}", error.user_hint());
/// assert!(!error.is_recoverable());
///
/// let unbound = BindError::SymbolUnbound {
///     module: "glib".to_string(),
///     symbol: "g_print".to_string(),
/// };
/// assert!(unbound.is_recoverable());
/// ```
#[derive(Debug, Error)]
pub enum BindError {
    // Loader errors
    #[error("Library not found for module '{module}' (tried: {})", .candidates.join(", "))]
    LibraryNotFound {
        module: String,
        candidates: Vec<String>,
    },

    // Binder errors
    #[error("Module '{module}' is missing required symbols: {}", .names.join(", "))]
    SymbolUnresolved { module: String, names: Vec<String> },

    #[error("Symbol '{symbol}' is not bound in module '{module}'")]
    SymbolUnbound { module: String, symbol: String },

    // Lifecycle errors
    #[error("Module '{0}' is not initialized")]
    NotInitialized(String),

    #[error("Module '{0}' is already initialized")]
    AlreadyInitialized(String),

    #[error("Failed to close library for module '{module}': {reason}")]
    CloseFailed { module: String, reason: String },

    #[error("Unknown module: {0}")]
    UnknownModule(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BindError {
    /// Name of the module the error belongs to, when there is one
    pub fn module(&self) -> Option<&str> {
        match self {
            Self::LibraryNotFound { module, .. }
            | Self::SymbolUnresolved { module, .. }
            | Self::SymbolUnbound { module, .. }
            | Self::CloseFailed { module, .. } => Some(module),
            Self::NotInitialized(module)
            | Self::AlreadyInitialized(module)
            | Self::UnknownModule(module) => Some(module),
            Self::Config(_) => None,
        }
    }
}

impl BindErrorExt for BindError {
    fn user_hint(&self) -> &str {
        match self {
            Self::LibraryNotFound { .. } => {
                "Required shared library is not installed. Install it or adjust the candidate names"
            }
            Self::SymbolUnresolved { .. } => {
                "Installed library is too old or incompatible. Upgrade it or relax strict binding"
            }
            Self::SymbolUnbound { .. } => "This feature is not available in the installed library",
            Self::NotInitialized(_) => "Initialize the module before using it",
            Self::AlreadyInitialized(_) => "Close the module before initializing it again",
            Self::CloseFailed { .. } => "The platform loader refused to unload the library",
            Self::UnknownModule(_) => "Check the module name. Run 'gbind probe' to list modules",
            Self::Config(_) => "Check your config.toml file for errors",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // Non-recoverable errors
            Self::LibraryNotFound { .. }
            | Self::SymbolUnresolved { .. }
            | Self::CloseFailed { .. } => false,

            // All other errors are potentially recoverable
            _ => true,
        }
    }
}

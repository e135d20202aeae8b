//! gbind SDK
//!
//! Shared types for gbind components: the error type returned by every
//! loading and binding operation, symbol list descriptions and the bind report
//! handed back to consumers.

/// Error types and handling
pub mod errors;

/// Symbol list and bind report types
pub mod types;

// Re-export commonly used types
pub use errors::{BindError, BindErrorExt};
pub use types::{BindPolicy, BindReport, ModuleStatus, Requirement, SymbolSpec};

//! Symbol list and bind report types

use crate::errors::BindError;
use serde::{Deserialize, Serialize};

/// Whether a symbol is load-bearing for its module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// Binding fails (under strict policy) when this symbol is missing
    Required,
    /// Missing symbol leaves its slot unbound and nothing else
    Optional,
}

impl Requirement {
    pub fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// One exported name a table wants resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SymbolSpec {
    pub name: &'static str,
    pub requirement: Requirement,
}

impl SymbolSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Required,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Optional,
        }
    }
}

/// What to do with a bind that left required symbols unbound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindPolicy {
    /// Reject the module when any required symbol is unbound
    pub strict: bool,
}

impl Default for BindPolicy {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Lifecycle state of a module wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    Uninitialized,
    Bound,
    Released,
}

impl std::fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Uninitialized => "uninitialized",
            Self::Bound => "bound",
            Self::Released => "released",
        };
        f.write_str(s)
    }
}

/// Outcome of resolving one module's symbol list
///
/// Produced once per bind. `resolved` and `unresolved` together always cover
/// every declared symbol exactly once, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindReport {
    /// Module the symbols belong to
    pub module: String,
    /// Candidate name the library was opened under
    pub library: String,
    /// Symbols that resolved to a non-null address
    pub resolved: Vec<String>,
    /// Symbols that did not resolve, required or not
    pub unresolved: Vec<String>,
    /// Subset of `unresolved` declared as required
    pub missing_required: Vec<String>,
}

impl BindReport {
    pub fn new(module: impl Into<String>, library: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            library: library.into(),
            ..Default::default()
        }
    }

    /// Record a resolution result for one symbol
    pub fn record(&mut self, spec: SymbolSpec, bound: bool) {
        if bound {
            self.resolved.push(spec.name.to_string());
        } else {
            self.unresolved.push(spec.name.to_string());
            if spec.requirement.is_required() {
                self.missing_required.push(spec.name.to_string());
            }
        }
    }

    /// Total number of declared symbols
    pub fn total(&self) -> usize {
        self.resolved.len() + self.unresolved.len()
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Apply a bind policy to this report
    ///
    /// # Errors
    ///
    /// Returns `BindError::SymbolUnresolved` listing every missing required
    /// symbol when the policy is strict and at least one is missing.
    pub fn check(&self, policy: BindPolicy) -> Result<(), BindError> {
        if policy.strict && !self.missing_required.is_empty() {
            return Err(BindError::SymbolUnresolved {
                module: self.module.clone(),
                names: self.missing_required.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BindReport {
        let mut report = BindReport::new("foo", "libfoo.so");
        report.record(SymbolSpec::required("foo_init"), true);
        report.record(SymbolSpec::optional("foo_extra"), false);
        report.record(SymbolSpec::required("foo_missing_fn"), false);
        report
    }

    #[test]
    fn test_record_splits_resolved_and_unresolved() {
        let report = sample_report();
        assert_eq!(report.resolved, vec!["foo_init"]);
        assert_eq!(report.unresolved, vec!["foo_extra", "foo_missing_fn"]);
        assert_eq!(report.missing_required, vec!["foo_missing_fn"]);
        assert_eq!(report.total(), 3);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_check_strict_rejects_missing_required() {
        let report = sample_report();
        match report.check(BindPolicy { strict: true }) {
            Err(BindError::SymbolUnresolved { module, names }) => {
                assert_eq!(module, "foo");
                assert_eq!(names, vec!["foo_missing_fn"]);
            }
            other => panic!("Expected SymbolUnresolved, got {:?}", other),
        }
    }

    #[test]
    fn test_check_lenient_accepts_missing_required() {
        assert!(sample_report().check(BindPolicy { strict: false }).is_ok());
    }

    #[test]
    fn test_check_ignores_missing_optional() {
        let mut report = BindReport::new("foo", "libfoo.so");
        report.record(SymbolSpec::optional("foo_extra"), false);
        assert!(report.check(BindPolicy::default()).is_ok());
    }

    #[test]
    fn test_module_status_display() {
        assert_eq!(ModuleStatus::Uninitialized.to_string(), "uninitialized");
        assert_eq!(ModuleStatus::Bound.to_string(), "bound");
        assert_eq!(ModuleStatus::Released.to_string(), "released");
    }
}

use super::Module;
use crate::binder::SymbolTable;
use sdk::errors::BindError;
use sdk::types::{BindPolicy, BindReport, ModuleStatus, SymbolSpec};

/// Type-erased view of a [`Module`]
///
/// Lets a set of modules with different table types be initialized, closed
/// and inspected in a fixed order without knowing each table's type.
pub trait ModuleLifecycle {
    /// Returns the name of the module
    fn name(&self) -> &'static str;

    fn status(&self) -> ModuleStatus;

    /// Whether a failed initialize should stop the application
    fn is_required(&self) -> bool;

    fn candidates(&self) -> &[String];

    fn symbols(&self) -> &'static [SymbolSpec];

    fn report(&self) -> Option<&BindReport>;

    fn library_name(&self) -> Option<&str>;

    /// Load and bind the module
    fn initialize(&mut self) -> Result<(), BindError>;

    /// Release the module
    fn close(&mut self) -> Result<(), BindError>;

    /// Apply configured candidates, requirement and bind policy
    fn configure(&mut self, candidates: Option<Vec<String>>, required: bool, policy: BindPolicy);
}

impl<T: SymbolTable> ModuleLifecycle for Module<T> {
    fn name(&self) -> &'static str {
        Module::name(self)
    }

    fn status(&self) -> ModuleStatus {
        Module::status(self)
    }

    fn is_required(&self) -> bool {
        Module::is_required(self)
    }

    fn candidates(&self) -> &[String] {
        Module::candidates(self)
    }

    fn symbols(&self) -> &'static [SymbolSpec] {
        Module::symbols(self)
    }

    fn report(&self) -> Option<&BindReport> {
        Module::report(self)
    }

    fn library_name(&self) -> Option<&str> {
        Module::library_name(self)
    }

    fn initialize(&mut self) -> Result<(), BindError> {
        Module::initialize(self).map(|_| ())
    }

    fn close(&mut self) -> Result<(), BindError> {
        Module::close(self)
    }

    fn configure(&mut self, candidates: Option<Vec<String>>, required: bool, policy: BindPolicy) {
        if let Some(candidates) = candidates {
            self.candidates = candidates;
        }
        self.required = required;
        self.policy = policy;
    }
}

//! Module lifecycle
//!
//! A module is one bound library: the handle returned by the loader and the
//! table produced by the binder, owned together.
//!
//! - [`BoundModule`] is the bound pair itself. It only exists while the handle
//!   is open, and `close` consumes it, so a table borrowed from it cannot
//!   outlive the library it points into.
//! - [`Module`] is the stateful wrapper applications keep around:
//!   `Uninitialized -> Bound -> Released`, with `initialize` allowed again
//!   after `close` (a fresh load and bind that may succeed or fail on its
//!   own).
//!
//! # Examples
//!
//! ```no_run
//! use gbind::module::Module;
//! use gbind::toolkit::GlibSyms;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut glib: Module<GlibSyms> = Module::new();
//! let table = glib.initialize()?;
//! let print = unsafe { table.print.get() }?;
//! unsafe { print(b"Hello\n\0".as_ptr().cast()) };
//! glib.close()?;
//! # Ok(())
//! # }
//! ```

mod lifecycle;

pub use lifecycle::ModuleLifecycle;

use crate::binder::{self, SymbolTable};
use crate::loader::{self, OpenedLibrary};
use sdk::errors::BindError;
use sdk::types::{BindPolicy, BindReport, ModuleStatus, SymbolSpec};
use std::fmt;

/// An open library together with its resolved table
pub struct BoundModule<T: SymbolTable> {
    table: T,
    report: BindReport,
    library: OpenedLibrary,
}

impl<T: SymbolTable> BoundModule<T> {
    /// Load and bind `T` from the first openable candidate
    ///
    /// # Errors
    ///
    /// Returns `BindError::LibraryNotFound` if no candidate opened, and
    /// `BindError::SymbolUnresolved` if `policy` is strict and a required
    /// symbol is missing. The library is released before either error is
    /// returned.
    pub fn bind<S: AsRef<str>>(candidates: &[S], policy: BindPolicy) -> Result<Self, BindError> {
        let library = loader::open_first(T::MODULE, candidates)?;

        // SAFETY: the table is stored next to the library and dropped no
        // later than it.
        let (table, report) = unsafe { binder::resolve_all::<T>(&library) };

        if let Err(e) = report.check(policy) {
            tracing::error!("Rejecting module '{}': {}", T::MODULE, e);
            drop(table);
            if let Err(close_err) = library.close() {
                tracing::warn!(
                    "Failed to release library for module '{}': {}",
                    T::MODULE,
                    close_err
                );
            }
            return Err(e);
        }

        Ok(Self {
            table,
            report,
            library,
        })
    }

    /// Load and bind `T` from its built-in candidate list
    pub fn bind_default(policy: BindPolicy) -> Result<Self, BindError> {
        Self::bind(T::CANDIDATES, policy)
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn report(&self) -> &BindReport {
        &self.report
    }

    /// Candidate name the library was opened under
    pub fn library_name(&self) -> &str {
        self.library.name()
    }

    /// Release the library and drop the table
    ///
    /// Consuming `self` ends every borrow of the table before the handle is
    /// released:
    ///
    /// ```compile_fail
    /// use gbind::module::BoundModule;
    /// use gbind::toolkit::GlibSyms;
    ///
    /// fn use_after_close(module: BoundModule<GlibSyms>) {
    ///     let table = module.table();
    ///     module.close().ok();
    ///     let _ = table.print.is_bound();
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `BindError::CloseFailed` if the platform refuses the unload.
    pub fn close(self) -> Result<(), BindError> {
        let Self { table, library, .. } = self;
        drop(table);

        let name = library.name().to_string();
        library.close().map_err(|e| {
            tracing::error!("Failed to close {} for module '{}': {}", name, T::MODULE, e);
            BindError::CloseFailed {
                module: T::MODULE.to_string(),
                reason: e.to_string(),
            }
        })?;

        tracing::info!("Module '{}' released {}", T::MODULE, name);
        Ok(())
    }
}

impl<T: SymbolTable> fmt::Debug for BoundModule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundModule")
            .field("module", &T::MODULE)
            .field("library", &self.library.name())
            .field("unresolved", &self.report.unresolved)
            .finish()
    }
}

enum State<T: SymbolTable> {
    Uninitialized,
    Bound(BoundModule<T>),
    Released,
}

/// Lifecycle wrapper for one bound library
///
/// Owns its candidate list, bind policy and, once initialized, the bound
/// library and table. The table is reached through [`Module::table`] and
/// handed to application code by reference.
///
/// `close` is idempotent and also runs on drop. `initialize` on a module that
/// is already bound is rejected with `BindError::AlreadyInitialized`.
pub struct Module<T: SymbolTable> {
    candidates: Vec<String>,
    required: bool,
    policy: BindPolicy,
    state: State<T>,
}

impl<T: SymbolTable> Module<T> {
    /// Create an uninitialized module with the table's default candidates
    ///
    /// Modules are required and strictly bound unless configured otherwise.
    pub fn new() -> Self {
        Self {
            candidates: T::CANDIDATES.iter().map(|c| c.to_string()).collect(),
            required: true,
            policy: BindPolicy::default(),
            state: State::Uninitialized,
        }
    }

    /// Replace the candidate library names
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Mark the module as required or optional for the application
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_policy(mut self, policy: BindPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &'static str {
        T::MODULE
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn status(&self) -> ModuleStatus {
        match self.state {
            State::Uninitialized => ModuleStatus::Uninitialized,
            State::Bound(_) => ModuleStatus::Bound,
            State::Released => ModuleStatus::Released,
        }
    }

    /// Load the library, bind the table and make it available
    ///
    /// On failure the module keeps its previous state.
    ///
    /// # Errors
    ///
    /// Returns `BindError::AlreadyInitialized` if the module is bound, or any
    /// error from [`BoundModule::bind`].
    pub fn initialize(&mut self) -> Result<&T, BindError> {
        if let State::Bound(_) = self.state {
            return Err(BindError::AlreadyInitialized(T::MODULE.to_string()));
        }

        tracing::debug!("Initializing module '{}'", T::MODULE);
        let bound = BoundModule::<T>::bind(&self.candidates, self.policy)?;
        self.state = State::Bound(bound);
        self.table()
    }

    /// Release the library and drop the table
    ///
    /// Closing a module that is not bound does nothing. After a successful
    /// close the module is `Released`; if the platform refuses the unload the
    /// module is still `Released` (the handle is gone) and the error is
    /// returned.
    pub fn close(&mut self) -> Result<(), BindError> {
        match std::mem::replace(&mut self.state, State::Released) {
            State::Bound(bound) => bound.close(),
            State::Uninitialized => {
                tracing::debug!("Module '{}' not initialized, nothing to close", T::MODULE);
                self.state = State::Uninitialized;
                Ok(())
            }
            State::Released => {
                tracing::debug!("Module '{}' already released", T::MODULE);
                Ok(())
            }
        }
    }

    /// The bound table
    ///
    /// # Errors
    ///
    /// Returns `BindError::NotInitialized` unless the module is bound.
    pub fn table(&self) -> Result<&T, BindError> {
        match &self.state {
            State::Bound(bound) => Ok(bound.table()),
            _ => Err(BindError::NotInitialized(T::MODULE.to_string())),
        }
    }

    /// Report of the current bind, if bound
    pub fn report(&self) -> Option<&BindReport> {
        match &self.state {
            State::Bound(bound) => Some(bound.report()),
            _ => None,
        }
    }

    /// Candidate name the library was opened under, if bound
    pub fn library_name(&self) -> Option<&str> {
        match &self.state {
            State::Bound(bound) => Some(bound.library_name()),
            _ => None,
        }
    }

    pub fn symbols(&self) -> &'static [SymbolSpec] {
        T::SYMBOLS
    }
}

impl<T: SymbolTable> Default for Module<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SymbolTable> fmt::Debug for Module<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("name", &T::MODULE)
            .field("status", &self.status())
            .field("required", &self.required)
            .field("candidates", &self.candidates)
            .finish()
    }
}

impl<T: SymbolTable> Drop for Module<T> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::error!("Error closing module '{}' on drop: {}", T::MODULE, e);
        }
    }
}

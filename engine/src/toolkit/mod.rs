//! GLib/GTK 4 toolkit modules
//!
//! The toolkit ships as several shared libraries that depend on each other.
//! Each one is bound by its own [`Module`], and [`Toolkit`] owns the whole set:
//! it initializes them in load order (core primitives first, widget toolkit
//! last) and closes them in reverse.
//!
//! Applications receive the toolkit by reference and reach each table through
//! its module:
//!
//! ```no_run
//! use gbind::toolkit::Toolkit;
//!
//! fn greet(toolkit: &Toolkit) -> Result<(), sdk::BindError> {
//!     let glib = toolkit.glib.table()?;
//!     let print = unsafe { glib.print.get() }?;
//!     unsafe { print(b"Hello\n\0".as_ptr().cast()) };
//!     Ok(())
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut toolkit = Toolkit::new();
//! toolkit.initialize()?;
//! greet(&toolkit)?;
//! toolkit.close()?;
//! # Ok(())
//! # }
//! ```

mod gio;
mod girepository;
mod glib;
mod gmodule;
mod gobject;
mod gtk;
pub mod types;

pub use gio::GioSyms;
pub use girepository::GirepositorySyms;
pub use glib::GlibSyms;
pub use gmodule::GmoduleSyms;
pub use gobject::GobjectSyms;
pub use gtk::{GdkSyms, GskSyms, GtkSyms};

use crate::config::Config;
use crate::module::{Module, ModuleLifecycle};
use sdk::errors::BindError;
use sdk::types::{BindPolicy, ModuleStatus};

/// Module names in load order
pub const MODULE_NAMES: [&str; 8] = [
    "glib",
    "gobject",
    "gio",
    "gmodule",
    "girepository",
    "gtk",
    "gdk",
    "gsk",
];

/// Outcome of initializing one module of the set
#[derive(Debug)]
pub struct ModuleOutcome {
    pub name: &'static str,
    pub required: bool,
    /// `None` when the module bound
    pub error: Option<BindError>,
}

impl ModuleOutcome {
    pub fn is_bound(&self) -> bool {
        self.error.is_none()
    }
}

/// The full set of toolkit modules
#[derive(Debug, Default)]
pub struct Toolkit {
    pub glib: Module<GlibSyms>,
    pub gobject: Module<GobjectSyms>,
    pub gio: Module<GioSyms>,
    pub gmodule: Module<GmoduleSyms>,
    pub girepository: Module<GirepositorySyms>,
    pub gtk: Module<GtkSyms>,
    pub gdk: Module<GdkSyms>,
    pub gsk: Module<GskSyms>,
}

impl Toolkit {
    /// Create the set with every module required and default candidates
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the set with candidates, requirements and policy from `config`
    ///
    /// # Errors
    ///
    /// Returns `BindError::UnknownModule` if the configuration names a module
    /// that is not part of the toolkit.
    pub fn from_config(config: &Config) -> Result<Self, BindError> {
        if let Some(unknown) = config
            .modules
            .keys()
            .find(|name| !MODULE_NAMES.contains(&name.as_str()))
        {
            return Err(BindError::UnknownModule(unknown.clone()));
        }

        let mut toolkit = Self::new();
        let policy = BindPolicy {
            strict: config.binding.strict,
        };
        for module in toolkit.modules_mut() {
            let settings = config.modules.get(module.name());
            let candidates = settings.and_then(|s| s.candidates.clone());
            let required = settings.map(|s| s.required).unwrap_or(true);
            module.configure(candidates, required, policy);
        }
        Ok(toolkit)
    }

    /// Every module in load order
    pub fn modules(&self) -> [&dyn ModuleLifecycle; 8] {
        [
            &self.glib,
            &self.gobject,
            &self.gio,
            &self.gmodule,
            &self.girepository,
            &self.gtk,
            &self.gdk,
            &self.gsk,
        ]
    }

    /// Every module in load order, mutably
    pub fn modules_mut(&mut self) -> [&mut dyn ModuleLifecycle; 8] {
        [
            &mut self.glib,
            &mut self.gobject,
            &mut self.gio,
            &mut self.gmodule,
            &mut self.girepository,
            &mut self.gtk,
            &mut self.gdk,
            &mut self.gsk,
        ]
    }

    /// Look up a module by name
    pub fn module(&self, name: &str) -> Result<&dyn ModuleLifecycle, BindError> {
        self.modules()
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| BindError::UnknownModule(name.to_string()))
    }

    /// Initialize every module in load order
    ///
    /// Optional modules that fail are logged and skipped. The first required
    /// module that fails stops initialization; the modules bound by this call
    /// are closed again before the error is returned.
    pub fn initialize(&mut self) -> Result<Vec<ModuleOutcome>, BindError> {
        self.initialize_only(&MODULE_NAMES)
    }

    /// Initialize the named modules, still in load order
    ///
    /// Nothing is touched if a name is unknown or a named module is already
    /// bound. Modules bound by earlier calls are never closed here.
    ///
    /// # Errors
    ///
    /// Returns `BindError::UnknownModule` for a name outside the toolkit,
    /// `BindError::AlreadyInitialized` for a named module that is bound, or
    /// the error of the first required module that failed.
    pub fn initialize_only<S: AsRef<str>>(
        &mut self,
        names: &[S],
    ) -> Result<Vec<ModuleOutcome>, BindError> {
        if let Some(unknown) = names
            .iter()
            .map(|n| n.as_ref())
            .find(|n| !MODULE_NAMES.contains(n))
        {
            return Err(BindError::UnknownModule(unknown.to_string()));
        }

        let selected = |name: &str| names.iter().any(|n| n.as_ref() == name);

        if let Some(bound) = self
            .modules()
            .into_iter()
            .find(|m| selected(m.name()) && m.status() == ModuleStatus::Bound)
        {
            return Err(BindError::AlreadyInitialized(bound.name().to_string()));
        }

        let mut outcomes = Vec::new();
        let mut bound_here = Vec::new();
        let mut fatal = None;

        for module in self.modules_mut() {
            if !selected(module.name()) {
                continue;
            }

            match module.initialize() {
                Ok(()) => {
                    bound_here.push(module.name());
                    outcomes.push(ModuleOutcome {
                        name: module.name(),
                        required: module.is_required(),
                        error: None,
                    });
                }
                Err(e) if !module.is_required() => {
                    tracing::warn!("Optional module '{}' unavailable: {}", module.name(), e);
                    outcomes.push(ModuleOutcome {
                        name: module.name(),
                        required: false,
                        error: Some(e),
                    });
                }
                Err(e) => {
                    tracing::error!("Required module '{}' failed: {}", module.name(), e);
                    fatal = Some(e);
                    break;
                }
            }
        }

        if let Some(e) = fatal {
            for module in self.modules_mut().into_iter().rev() {
                if !bound_here.contains(&module.name()) {
                    continue;
                }
                if let Err(close_err) = module.close() {
                    tracing::warn!(
                        "Error while unwinding module '{}': {}",
                        module.name(),
                        close_err
                    );
                }
            }
            return Err(e);
        }

        Ok(outcomes)
    }

    /// Close every module in reverse load order
    ///
    /// All modules are closed even if one fails; the first error is returned.
    pub fn close(&mut self) -> Result<(), BindError> {
        let mut first_error = None;
        for module in self.modules_mut().into_iter().rev() {
            if let Err(e) = module.close() {
                tracing::error!("Error closing module '{}': {}", module.name(), e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for Toolkit {
    /// Release modules in reverse load order rather than field order
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::error!("Error closing toolkit on drop: {}", e);
        }
    }
}

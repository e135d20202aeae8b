//! Symbol binder
//!
//! Resolves a module's fixed symbol list against an opened library and
//! produces a typed table with one [`Slot`] per export. A failed lookup never
//! aborts the bind: the slot stays unbound, a diagnostic names the symbol and
//! the remaining symbols are still resolved.
//!
//! Tables are declared with the [`symbol_table!`](crate::symbol_table) macro,
//! which generates the struct and its [`SymbolTable`] implementation from one
//! list of `(slot, exported name, requirement)` entries.
//!
//! Some dynamic linkers hand back a null address for a missing symbol rather
//! than an error. Addresses are read as raw pointers first and a null address
//! counts as unresolved, so a slot is never bound to null.

mod slot;

pub use slot::Slot;

use crate::loader::OpenedLibrary;
use sdk::types::{BindReport, SymbolSpec};
use std::ffi::c_void;
use std::mem;

/// A fixed-shape table of resolved exports
///
/// # Safety
///
/// Implementors assert that every slot's function pointer type is the exact
/// calling contract of the export it is bound to. Nothing checks this at run
/// time; a mismatched signature is undefined behavior on first call. Prefer
/// [`symbol_table!`](crate::symbol_table) over hand-written implementations;
/// its `unsafe struct` marker is where a declaration takes on this contract.
pub unsafe trait SymbolTable: Sized {
    /// Module name used in logs, errors and configuration
    const MODULE: &'static str;

    /// Default candidate library names in preference order
    const CANDIDATES: &'static [&'static str];

    /// Every export the table binds, in slot order
    const SYMBOLS: &'static [SymbolSpec];

    /// Build the table by requesting each slot from the binder
    fn bind(binder: &mut Binder<'_>) -> Self;
}

/// Resolves exports of one opened library and records the outcome
pub struct Binder<'lib> {
    module: &'static str,
    library: &'lib OpenedLibrary,
    report: BindReport,
}

impl<'lib> Binder<'lib> {
    pub(crate) fn new(module: &'static str, library: &'lib OpenedLibrary) -> Self {
        Self {
            module,
            library,
            report: BindReport::new(module, library.name()),
        }
    }

    /// Resolve one export into a slot
    ///
    /// `F` must be a function pointer type. Any other type leaves the slot
    /// unbound.
    pub fn slot<F: Copy>(&mut self, spec: SymbolSpec) -> Slot<F> {
        let func = match self.lookup::<F>(spec.name) {
            Ok(Some(func)) => Some(func),
            Ok(None) => {
                tracing::warn!(
                    "Unable to resolve symbol {} in module '{}': null address",
                    spec.name,
                    self.module
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    "Unable to resolve symbol {} in module '{}': {}",
                    spec.name,
                    self.module,
                    e
                );
                None
            }
        };

        self.report.record(spec, func.is_some());
        Slot::new(self.module, spec.name, func)
    }

    fn lookup<F: Copy>(&self, name: &str) -> Result<Option<F>, String> {
        if mem::size_of::<F>() != mem::size_of::<*mut c_void>() {
            return Err(format!(
                "slot type is {} bytes, expected a function pointer",
                mem::size_of::<F>()
            ));
        }

        // SAFETY: the symbol is only read as an address here. Reinterpreting
        // it as `F` is covered by the `SymbolTable` contract.
        unsafe {
            let symbol = self
                .library
                .library()
                .get::<*mut c_void>(name.as_bytes())
                .map_err(|e| e.to_string())?;
            let address: *mut c_void = *symbol;
            if address.is_null() {
                return Ok(None);
            }
            Ok(Some(mem::transmute_copy::<*mut c_void, F>(&address)))
        }
    }

    /// Finish binding and hand back the report
    pub(crate) fn finish(self) -> BindReport {
        self.report
    }
}

/// Resolve every symbol of `T` against `library`
///
/// Always returns a fully populated table: each slot is either bound or
/// explicitly unbound. Deciding whether unbound slots are acceptable is left
/// to the caller (see [`BindReport::check`]).
///
/// # Safety
///
/// The returned table holds raw addresses inside `library`. The caller must
/// not call through any slot once `library` has been closed or dropped.
/// [`BoundModule`](crate::module::BoundModule) upholds this by owning both.
pub unsafe fn resolve_all<T: SymbolTable>(library: &OpenedLibrary) -> (T, BindReport) {
    let mut binder = Binder::new(T::MODULE, library);
    let table = T::bind(&mut binder);
    let report = binder.finish();

    if report.is_complete() {
        tracing::info!(
            "Module '{}' bound all {} symbols from {}",
            T::MODULE,
            report.total(),
            library.name()
        );
    } else {
        tracing::warn!(
            "Module '{}' bound {}/{} symbols from {} ({} unresolved, {} required)",
            T::MODULE,
            report.resolved.len(),
            report.total(),
            library.name(),
            report.unresolved.len(),
            report.missing_required.len()
        );
    }

    (table, report)
}

/// Declare a symbol table
///
/// Each entry names the slot, its function pointer type, the exported symbol
/// and whether the symbol is `required` or `optional`.
///
/// The declaration must be marked `unsafe`: writing it asserts the
/// [`SymbolTable`] contract, that every slot type is the exact signature of
/// its export. Slot types should be `unsafe extern "C" fn` so that every call
/// through a slot also sits in an `unsafe` block.
///
/// # Examples
///
/// ```
/// use std::ffi::c_double;
///
/// gbind::symbol_table! {
///     /// libm entry points
///     pub unsafe struct MathSyms for "math" in ["libm.so.6", "libm.so"] {
///         required cos: unsafe extern "C" fn(c_double) -> c_double = "cos",
///         optional exp10: unsafe extern "C" fn(c_double) -> c_double = "exp10",
///     }
/// }
///
/// use gbind::binder::SymbolTable;
/// assert_eq!(MathSyms::MODULE, "math");
/// assert_eq!(MathSyms::SYMBOLS.len(), 2);
/// ```
///
/// Without `unsafe` the declaration is rejected:
///
/// ```compile_fail
/// use std::ffi::c_double;
///
/// gbind::symbol_table! {
///     pub struct MathSyms for "math" in ["libm.so.6"] {
///         required cos: extern "C" fn(c_double) -> c_double = "cos",
///     }
/// }
/// ```
#[macro_export]
macro_rules! symbol_table {
    (@spec required $symbol:literal) => {
        $crate::sdk::types::SymbolSpec::required($symbol)
    };
    (@spec optional $symbol:literal) => {
        $crate::sdk::types::SymbolSpec::optional($symbol)
    };
    (
        $(#[$meta:meta])*
        $vis:vis unsafe struct $name:ident for $module:literal in [$($candidate:literal),* $(,)?] {
            $(
                $(#[$field_meta:meta])*
                $requirement:ident $field:ident : $ty:ty = $symbol:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $crate::binder::Slot<$ty>,
            )*
        }

        unsafe impl $crate::binder::SymbolTable for $name {
            const MODULE: &'static str = $module;
            const CANDIDATES: &'static [&'static str] = &[$($candidate),*];
            const SYMBOLS: &'static [$crate::sdk::types::SymbolSpec] = &[
                $($crate::symbol_table!(@spec $requirement $symbol)),*
            ];

            fn bind(binder: &mut $crate::binder::Binder<'_>) -> Self {
                Self {
                    $(
                        $field: binder.slot($crate::symbol_table!(@spec $requirement $symbol)),
                    )*
                }
            }
        }
    };
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use crate::loader::open_first;
    use std::ffi::{c_double, c_int};

    crate::symbol_table! {
        unsafe struct LibmSyms for "libm-test" in ["libm.so.6"] {
            required cos: unsafe extern "C" fn(c_double) -> c_double = "cos",
            required sqrt: unsafe extern "C" fn(c_double) -> c_double = "sqrt",
            optional missing: unsafe extern "C" fn() -> c_int = "gbind_test_missing_fn",
        }
    }

    #[test]
    fn test_resolve_all_populates_every_slot() {
        let library = open_first(LibmSyms::MODULE, LibmSyms::CANDIDATES).expect("open libm");
        let (table, report) = unsafe { resolve_all::<LibmSyms>(&library) };

        assert!(table.cos.is_bound());
        assert!(table.sqrt.is_bound());
        assert!(!table.missing.is_bound());
        assert_eq!(report.total(), LibmSyms::SYMBOLS.len());
        assert_eq!(report.unresolved, vec!["gbind_test_missing_fn"]);
        assert!(report.missing_required.is_empty());
        assert_eq!(report.library, "libm.so.6");
    }

    #[test]
    fn test_bound_slot_is_callable() {
        let library = open_first(LibmSyms::MODULE, LibmSyms::CANDIDATES).expect("open libm");
        let (table, _) = unsafe { resolve_all::<LibmSyms>(&library) };

        let sqrt = unsafe { table.sqrt.get() }.expect("sqrt bound");
        assert_eq!(unsafe { sqrt(16.0) }, 4.0);
    }

    #[test]
    fn test_non_pointer_slot_type_stays_unbound() {
        let library = open_first(LibmSyms::MODULE, LibmSyms::CANDIDATES).expect("open libm");
        let mut binder = Binder::new("libm-test", &library);
        let slot: Slot<[usize; 2]> = binder.slot(SymbolSpec::required("cos"));
        assert!(!slot.is_bound());
        assert_eq!(binder.finish().missing_required, vec!["cos"]);
    }
}

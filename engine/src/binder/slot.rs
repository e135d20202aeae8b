use sdk::errors::BindError;
use std::fmt;

/// One entry of a symbol table
///
/// Holds the resolved function pointer, or nothing when the export was not
/// found. A slot is neither `Clone` nor `Copy`: it stays inside its table and
/// is only reachable through a borrow of the module that owns the library.
///
/// ```compile_fail
/// use gbind::module::Module;
/// use gbind::toolkit::GlibSyms;
///
/// fn escape(module: &mut Module<GlibSyms>) -> Result<(), gbind::sdk::BindError> {
///     let slot = module.table()?.get_prgname;
///     module.close()?;
///     let get_prgname = unsafe { slot.get() }?;
///     let _ = unsafe { get_prgname() };
///     Ok(())
/// }
/// ```
pub struct Slot<F> {
    module: &'static str,
    name: &'static str,
    func: Option<F>,
}

impl<F: Copy> Slot<F> {
    pub(crate) fn new(module: &'static str, name: &'static str, func: Option<F>) -> Self {
        Self { module, name, func }
    }

    /// Exported symbol name this slot was bound from
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_bound(&self) -> bool {
        self.func.is_some()
    }

    /// The function pointer, or an error naming the unbound symbol
    ///
    /// # Safety
    ///
    /// The pointer addresses code inside the owning module's library. It must
    /// not be called, or kept for later calls, once that module is closed or
    /// dropped. The caller also relies on the slot type declared in the
    /// table matching the export's real signature.
    ///
    /// # Errors
    ///
    /// Returns `BindError::SymbolUnbound` when the export was not resolved.
    pub unsafe fn get(&self) -> Result<F, BindError> {
        self.func.ok_or_else(|| BindError::SymbolUnbound {
            module: self.module.to_string(),
            symbol: self.name.to_string(),
        })
    }

    /// The function pointer if bound
    ///
    /// # Safety
    ///
    /// Same contract as [`Slot::get`].
    pub unsafe fn as_option(&self) -> Option<F> {
        self.func
    }
}

impl<F> fmt::Debug for Slot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("module", &self.module)
            .field("name", &self.name)
            .field("bound", &self.func.is_some())
            .finish()
    }
}

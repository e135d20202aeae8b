use super::types::*;

crate::symbol_table! {
    /// GModule portable loading of extension modules
    pub unsafe struct GmoduleSyms for "gmodule" in ["libgmodule-2.0.so.0", "libgmodule-2.0.so"] {
        required module_supported: unsafe extern "C" fn() -> gboolean = "g_module_supported",
        required module_open: unsafe extern "C" fn(*const gchar, GModuleFlags) -> *mut GModule = "g_module_open",
        /// Since GLib 2.76
        optional module_open_full: unsafe extern "C" fn(
            *const gchar,
            GModuleFlags,
            *mut *mut GError,
        ) -> *mut GModule = "g_module_open_full",
        required module_close: unsafe extern "C" fn(*mut GModule) -> gboolean = "g_module_close",
        required module_make_resident: unsafe extern "C" fn(*mut GModule) = "g_module_make_resident",
        required module_error: unsafe extern "C" fn() -> *const gchar = "g_module_error",
        required module_symbol: unsafe extern "C" fn(*mut GModule, *const gchar, *mut gpointer) -> gboolean = "g_module_symbol",
        required module_name: unsafe extern "C" fn(*mut GModule) -> *const gchar = "g_module_name",
        /// Deprecated since GLib 2.76
        optional module_build_path: unsafe extern "C" fn(*const gchar, *const gchar) -> *mut gchar = "g_module_build_path",
        required module_error_quark: unsafe extern "C" fn() -> GQuark = "g_module_error_quark",
    }
}

use super::types::*;

crate::symbol_table! {
    /// GLib core primitives: memory, strings, main loop and sources
    pub unsafe struct GlibSyms for "glib" in ["libglib-2.0.so.0", "libglib-2.0.so"] {
        required print: unsafe extern "C" fn(*const gchar, ...) = "g_print",
        required printerr: unsafe extern "C" fn(*const gchar, ...) = "g_printerr",
        required malloc: unsafe extern "C" fn(gsize) -> gpointer = "g_malloc",
        required free: unsafe extern "C" fn(gpointer) = "g_free",
        required strdup: unsafe extern "C" fn(*const gchar) -> *mut gchar = "g_strdup",
        required error_free: unsafe extern "C" fn(*mut GError) = "g_error_free",
        required quark_from_string: unsafe extern "C" fn(*const gchar) -> GQuark = "g_quark_from_string",
        required main_loop_new: unsafe extern "C" fn(*mut GMainContext, gboolean) -> *mut GMainLoop = "g_main_loop_new",
        required main_loop_run: unsafe extern "C" fn(*mut GMainLoop) = "g_main_loop_run",
        required main_loop_quit: unsafe extern "C" fn(*mut GMainLoop) = "g_main_loop_quit",
        required main_loop_unref: unsafe extern "C" fn(*mut GMainLoop) = "g_main_loop_unref",
        required idle_add: unsafe extern "C" fn(GSourceFunc, gpointer) -> guint = "g_idle_add",
        required timeout_add: unsafe extern "C" fn(guint, GSourceFunc, gpointer) -> guint = "g_timeout_add",
        required source_remove: unsafe extern "C" fn(guint) -> gboolean = "g_source_remove",
        required get_prgname: unsafe extern "C" fn() -> *const gchar = "g_get_prgname",
        required set_prgname: unsafe extern "C" fn(*const gchar) = "g_set_prgname",
        required check_version: unsafe extern "C" fn(guint, guint, guint) -> *const gchar = "glib_check_version",
        /// Since GLib 2.64
        optional get_os_info: unsafe extern "C" fn(*const gchar) -> *mut gchar = "g_get_os_info",
    }
}

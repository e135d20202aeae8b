use super::types::*;
use std::ffi::{c_char, c_int};

crate::symbol_table! {
    /// GIO applications, files and cancellation
    pub unsafe struct GioSyms for "gio" in ["libgio-2.0.so.0", "libgio-2.0.so"] {
        required application_run: unsafe extern "C" fn(*mut GApplication, c_int, *mut *mut c_char) -> c_int = "g_application_run",
        required application_quit: unsafe extern "C" fn(*mut GApplication) = "g_application_quit",
        required application_register: unsafe extern "C" fn(
            *mut GApplication,
            *mut GCancellable,
            *mut *mut GError,
        ) -> gboolean = "g_application_register",
        required application_get_application_id: unsafe extern "C" fn(*mut GApplication) -> *const gchar = "g_application_get_application_id",
        required application_id_is_valid: unsafe extern "C" fn(*const gchar) -> gboolean = "g_application_id_is_valid",
        required file_new_for_path: unsafe extern "C" fn(*const c_char) -> *mut GFile = "g_file_new_for_path",
        required file_get_path: unsafe extern "C" fn(*mut GFile) -> *mut c_char = "g_file_get_path",
        required cancellable_new: unsafe extern "C" fn() -> *mut GCancellable = "g_cancellable_new",
        required cancellable_cancel: unsafe extern "C" fn(*mut GCancellable) = "g_cancellable_cancel",
        optional settings_new: unsafe extern "C" fn(*const gchar) -> *mut GSettings = "g_settings_new",
    }
}

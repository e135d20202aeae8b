use super::types::*;
use std::ffi::c_char;

crate::symbol_table! {
    /// GObject Introspection repository
    pub unsafe struct GirepositorySyms for "girepository" in ["libgirepository-1.0.so.1", "libgirepository-1.0.so"] {
        required get_default: unsafe extern "C" fn() -> *mut GIRepository = "g_irepository_get_default",
        required require: unsafe extern "C" fn(
            *mut GIRepository,
            *const gchar,
            *const gchar,
            GIRepositoryLoadFlags,
            *mut *mut GError,
        ) -> *mut GITypelib = "g_irepository_require",
        required find_by_name: unsafe extern "C" fn(*mut GIRepository, *const gchar, *const gchar) -> *mut GIBaseInfo = "g_irepository_find_by_name",
        required get_n_infos: unsafe extern "C" fn(*mut GIRepository, *const gchar) -> gint = "g_irepository_get_n_infos",
        required get_version: unsafe extern "C" fn(*mut GIRepository, *const gchar) -> *const gchar = "g_irepository_get_version",
        required get_loaded_namespaces: unsafe extern "C" fn(*mut GIRepository) -> *mut *mut gchar = "g_irepository_get_loaded_namespaces",
        required base_info_get_name: unsafe extern "C" fn(*mut GIBaseInfo) -> *const gchar = "g_base_info_get_name",
        required base_info_unref: unsafe extern "C" fn(*mut GIBaseInfo) = "g_base_info_unref",
        optional prepend_search_path: unsafe extern "C" fn(*const c_char) = "g_irepository_prepend_search_path",
    }
}

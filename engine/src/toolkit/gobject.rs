use super::types::*;

crate::symbol_table! {
    /// GObject type and signal system
    pub unsafe struct GobjectSyms for "gobject" in ["libgobject-2.0.so.0", "libgobject-2.0.so"] {
        required signal_connect_data: unsafe extern "C" fn(
            gpointer,
            *const gchar,
            GCallback,
            gpointer,
            GClosureNotify,
            GConnectFlags,
        ) -> gulong = "g_signal_connect_data",
        required signal_handler_disconnect: unsafe extern "C" fn(gpointer, gulong) = "g_signal_handler_disconnect",
        required signal_emit_by_name: unsafe extern "C" fn(gpointer, *const gchar, ...) = "g_signal_emit_by_name",
        required object_ref: unsafe extern "C" fn(gpointer) -> gpointer = "g_object_ref",
        required object_ref_sink: unsafe extern "C" fn(gpointer) -> gpointer = "g_object_ref_sink",
        required object_unref: unsafe extern "C" fn(gpointer) = "g_object_unref",
        required object_set: unsafe extern "C" fn(gpointer, *const gchar, ...) = "g_object_set",
        required object_set_data: unsafe extern "C" fn(*mut GObject, *const gchar, gpointer) = "g_object_set_data",
        required object_get_data: unsafe extern "C" fn(*mut GObject, *const gchar) -> gpointer = "g_object_get_data",
        required type_name: unsafe extern "C" fn(GType) -> *const gchar = "g_type_name",
        required type_from_name: unsafe extern "C" fn(*const gchar) -> GType = "g_type_from_name",
        /// Since GLib 2.70
        optional object_take_ref: unsafe extern "C" fn(gpointer) -> gpointer = "g_object_take_ref",
    }
}

//! GTK 4 tables
//!
//! libgtk-4 also carries the GDK and GSK entry points. They are bound as
//! separate modules from the same candidates, each with its own handle.

use super::types::*;
use std::ffi::{c_char, c_int};

crate::symbol_table! {
    /// GTK 4 widget toolkit
    pub unsafe struct GtkSyms for "gtk" in ["libgtk-4.so.1", "libgtk-4.so"] {
        required init: unsafe extern "C" fn() = "gtk_init",
        required get_major_version: unsafe extern "C" fn() -> guint = "gtk_get_major_version",
        required get_minor_version: unsafe extern "C" fn() -> guint = "gtk_get_minor_version",
        required get_micro_version: unsafe extern "C" fn() -> guint = "gtk_get_micro_version",
        required check_version: unsafe extern "C" fn(guint, guint, guint) -> *const c_char = "gtk_check_version",
        required application_new: unsafe extern "C" fn(*const c_char, GApplicationFlags) -> *mut GtkApplication = "gtk_application_new",
        required application_window_new: unsafe extern "C" fn(*mut GtkApplication) -> *mut GtkWidget = "gtk_application_window_new",
        required window_set_title: unsafe extern "C" fn(*mut GtkWindow, *const c_char) = "gtk_window_set_title",
        required window_set_default_size: unsafe extern "C" fn(*mut GtkWindow, c_int, c_int) = "gtk_window_set_default_size",
        required window_set_child: unsafe extern "C" fn(*mut GtkWindow, *mut GtkWidget) = "gtk_window_set_child",
        required window_present: unsafe extern "C" fn(*mut GtkWindow) = "gtk_window_present",
        required window_destroy: unsafe extern "C" fn(*mut GtkWindow) = "gtk_window_destroy",
        required button_new_with_label: unsafe extern "C" fn(*const c_char) -> *mut GtkWidget = "gtk_button_new_with_label",
        required label_new: unsafe extern "C" fn(*const c_char) -> *mut GtkWidget = "gtk_label_new",
        required box_new: unsafe extern "C" fn(GtkOrientation, c_int) -> *mut GtkWidget = "gtk_box_new",
        required box_append: unsafe extern "C" fn(*mut GtkBox, *mut GtkWidget) = "gtk_box_append",
        required widget_set_halign: unsafe extern "C" fn(*mut GtkWidget, GtkAlign) = "gtk_widget_set_halign",
        required widget_set_valign: unsafe extern "C" fn(*mut GtkWidget, GtkAlign) = "gtk_widget_set_valign",
        required widget_add_css_class: unsafe extern "C" fn(*mut GtkWidget, *const c_char) = "gtk_widget_add_css_class",
        /// Since GTK 4.10
        optional alert_dialog_new: unsafe extern "C" fn(*const c_char, ...) -> *mut GtkAlertDialog = "gtk_alert_dialog_new",
    }
}

crate::symbol_table! {
    /// GDK display and clipboard access
    pub unsafe struct GdkSyms for "gdk" in ["libgtk-4.so.1", "libgtk-4.so"] {
        required display_get_default: unsafe extern "C" fn() -> *mut GdkDisplay = "gdk_display_get_default",
        required display_get_name: unsafe extern "C" fn(*mut GdkDisplay) -> *const c_char = "gdk_display_get_name",
        required display_beep: unsafe extern "C" fn(*mut GdkDisplay) = "gdk_display_beep",
        required display_get_clipboard: unsafe extern "C" fn(*mut GdkDisplay) -> *mut GdkClipboard = "gdk_display_get_clipboard",
        required clipboard_set_text: unsafe extern "C" fn(*mut GdkClipboard, *const c_char) = "gdk_clipboard_set_text",
        required rgba_parse: unsafe extern "C" fn(*mut GdkRGBA, *const c_char) -> gboolean = "gdk_rgba_parse",
        /// Since GTK 4.6
        optional texture_new_from_filename: unsafe extern "C" fn(*const c_char, *mut *mut GError) -> *mut GdkTexture = "gdk_texture_new_from_filename",
    }
}

crate::symbol_table! {
    /// GSK render nodes and renderers
    pub unsafe struct GskSyms for "gsk" in ["libgtk-4.so.1", "libgtk-4.so"] {
        required renderer_get_type: unsafe extern "C" fn() -> GType = "gsk_renderer_get_type",
        required renderer_is_realized: unsafe extern "C" fn(*mut GskRenderer) -> gboolean = "gsk_renderer_is_realized",
        required render_node_get_node_type: unsafe extern "C" fn(*const GskRenderNode) -> GskRenderNodeType = "gsk_render_node_get_node_type",
        required render_node_ref: unsafe extern "C" fn(*mut GskRenderNode) -> *mut GskRenderNode = "gsk_render_node_ref",
        required render_node_unref: unsafe extern "C" fn(*mut GskRenderNode) = "gsk_render_node_unref",
        required color_node_new: unsafe extern "C" fn(*const GdkRGBA, *const graphene_rect_t) -> *mut GskRenderNode = "gsk_color_node_new",
        /// Since GTK 4.2
        optional gl_renderer_new: unsafe extern "C" fn() -> *mut GskRenderer = "gsk_gl_renderer_new",
    }
}

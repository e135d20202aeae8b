//! C types shared by the toolkit tables
//!
//! Only what the bound signatures need. Object types are opaque: they are
//! only ever handled through pointers returned by the libraries themselves.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_int, c_uint, c_ulong, c_void};

pub type gboolean = c_int;
pub type gchar = c_char;
pub type gint = c_int;
pub type guint = c_uint;
pub type gulong = c_ulong;
pub type gsize = usize;
pub type gpointer = *mut c_void;
pub type gconstpointer = *const c_void;
pub type GQuark = u32;
pub type GType = usize;

pub type GCallback = Option<unsafe extern "C" fn()>;
pub type GSourceFunc = Option<unsafe extern "C" fn(gpointer) -> gboolean>;
pub type GClosureNotify = Option<unsafe extern "C" fn(gpointer, *mut GClosure)>;

pub type GConnectFlags = c_uint;
pub const G_CONNECT_DEFAULT: GConnectFlags = 0;
pub const G_CONNECT_AFTER: GConnectFlags = 1 << 0;
pub const G_CONNECT_SWAPPED: GConnectFlags = 1 << 1;

pub type GApplicationFlags = c_uint;
pub const G_APPLICATION_DEFAULT_FLAGS: GApplicationFlags = 0;

pub type GModuleFlags = c_uint;
pub const G_MODULE_BIND_LAZY: GModuleFlags = 1 << 0;
pub const G_MODULE_BIND_LOCAL: GModuleFlags = 1 << 1;

pub type GIRepositoryLoadFlags = c_uint;

pub type GtkAlign = c_int;
pub const GTK_ALIGN_FILL: GtkAlign = 0;
pub const GTK_ALIGN_START: GtkAlign = 1;
pub const GTK_ALIGN_END: GtkAlign = 2;
pub const GTK_ALIGN_CENTER: GtkAlign = 3;

pub type GtkOrientation = c_int;
pub const GTK_ORIENTATION_HORIZONTAL: GtkOrientation = 0;
pub const GTK_ORIENTATION_VERTICAL: GtkOrientation = 1;

pub type GskRenderNodeType = c_int;

#[repr(C)]
pub struct GError {
    pub domain: GQuark,
    pub code: gint,
    pub message: *mut gchar,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GdkRGBA {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct graphene_point_t {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct graphene_size_t {
    pub width: f32,
    pub height: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct graphene_rect_t {
    pub origin: graphene_point_t,
    pub size: graphene_size_t,
}

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque!(
    GMainContext,
    GMainLoop,
    GClosure,
    GObject,
    GApplication,
    GCancellable,
    GFile,
    GSettings,
    GModule,
    GIRepository,
    GITypelib,
    GIBaseInfo,
    GtkApplication,
    GtkWidget,
    GtkWindow,
    GtkBox,
    GtkAlertDialog,
    GdkDisplay,
    GdkClipboard,
    GdkTexture,
    GskRenderer,
    GskRenderNode,
);

//! Type aliases and compile-time constants of the wrapped API.
//!
//! Every alias resolves to exactly the bit width and signedness of the
//! native platform equivalent. Width and byte-order constants are resolved
//! at compile time, never probed at runtime.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_int, c_long, c_uint, c_void};

pub type gboolean = c_int;
pub type gchar = c_char;
pub type gint = c_int;
pub type gint16 = i16;
pub type gint32 = i32;
pub type gint64 = i64;
pub type glong = c_long;
pub type gpointer = *mut c_void;
pub type gsize = usize;
pub type gssize = isize;
pub type guint = c_uint;
pub type guint16 = u16;
pub type guint32 = u32;
pub type guint64 = u64;

pub type GPid = *mut c_void;
pub type GSpawnFlags = *mut c_void;
pub type GSpawnChildSetupFunc = *mut c_void;
/// The string-builder handle is the bare character buffer.
pub type GString = gchar;
pub type GStrv = *mut *mut gchar;

/// Debug-flag key accepted (and ignored) by `g_parse_debug_string`.
#[repr(C)]
pub struct GDebugKey {
    pub key: [gchar; 32],
    pub val: gint,
}

/// Opaque error handle. Never populated; always treated as absent.
#[repr(C)]
pub struct GError {
    pub message: [gchar; 1],
}

/// Random-generator placeholder. Allocated on creation, released on
/// destruction, carries no generator state.
#[repr(C)]
pub struct GRand {
    pub dummy: u8,
}

pub const G_LITTLE_ENDIAN: gint = 1234;
pub const G_BIG_ENDIAN: gint = 4321;
pub const G_PDP_ENDIAN: gint = 3412;

/// Target byte order; little-endian is assumed wherever detection cannot
/// say otherwise.
pub const G_BYTE_ORDER: gint = if cfg!(target_endian = "big") {
    G_BIG_ENDIAN
} else {
    G_LITTLE_ENDIAN
};

pub const G_OS_UNIX: bool = cfg!(unix);
pub const G_OS_WIN32: bool = cfg!(windows);

pub const GLIB_SIZEOF_VOID_P: usize = size_of::<*const c_void>();
pub const GLIB_SIZEOF_LONG: usize = size_of::<c_long>();
pub const GLIB_SIZEOF_SIZE_T: usize = size_of::<usize>();
pub const GLIB_SIZEOF_SSIZE_T: usize = size_of::<isize>();

/// Spawn flag accepted by the stubbed spawn entry point.
pub const G_SPAWN_SEARCH_PATH: gint = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_matches_target() {
        if cfg!(target_endian = "big") {
            assert_eq!(G_BYTE_ORDER, G_BIG_ENDIAN);
        } else {
            assert_eq!(G_BYTE_ORDER, G_LITTLE_ENDIAN);
        }
    }

    #[test]
    fn widths_match_native() {
        assert_eq!(GLIB_SIZEOF_VOID_P, size_of::<gpointer>());
        assert_eq!(GLIB_SIZEOF_SIZE_T, size_of::<gsize>());
        assert_eq!(GLIB_SIZEOF_SSIZE_T, size_of::<gssize>());
        assert_eq!(size_of::<gint16>(), 2);
        assert_eq!(size_of::<guint64>(), 8);
    }

    #[test]
    fn placeholders_are_minimal() {
        assert_eq!(size_of::<GRand>(), 1);
        assert_eq!(size_of::<GError>(), 1);
    }
}

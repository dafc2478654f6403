//! String-builder construction alias.
//!
//! The builder handle is the bare character buffer: construction hands the
//! caller a fixed-size scratch allocation, destruction either releases it
//! or surrenders it. Growth and length tracking are not provided; the
//! consumer only builds short strings.

use std::ffi::c_char;
use std::ptr;

use core::ffi::VaList;

use crate::types::{GString, gboolean, gchar, gint};

/// Scratch capacity handed out by `g_string_new`. Callers never exceed it.
const STRING_SCRATCH_BYTES: usize = 4096;

unsafe extern "C" {
    #[link_name = "vsprintf"]
    fn native_vsprintf(s: *mut c_char, format: *const c_char, ap: VaList) -> gint;
}

/// `g_string_new` — allocates the scratch buffer and copies `base` into it
/// when non-NULL. Ownership passes to the caller; release goes through
/// `g_string_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_string_new(base: *const gchar) -> *mut GString {
    // SAFETY: direct call to the platform allocator.
    let buf = unsafe { libc::malloc(STRING_SCRATCH_BYTES) }.cast::<gchar>();
    if buf.is_null() {
        return ptr::null_mut();
    }

    if base.is_null() {
        // SAFETY: `buf` is a live allocation of STRING_SCRATCH_BYTES.
        unsafe { *buf = 0 };
    } else {
        // SAFETY: `base` is NUL-terminated per the caller's contract and
        // fits the scratch capacity.
        unsafe { libc::strcpy(buf, base) };
    }
    buf
}

/// `g_string_free` — releases the buffer and returns NULL when
/// `free_segment` is set; otherwise surrenders the buffer to the caller.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_string_free(string: *mut GString, free_segment: gboolean) -> *mut gchar {
    if free_segment != 0 {
        // SAFETY: `string` is NULL or a live buffer from `g_string_new`.
        unsafe { libc::free(string.cast()) };
        return ptr::null_mut();
    }
    string
}

/// `g_string_append_printf` — formats into the buffer. Formats from the
/// start rather than appending; the one consuming component does not rely
/// on append semantics.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_string_append_printf(
    string: *mut GString,
    format: *const gchar,
    mut args: ...
) {
    if string.is_null() || format.is_null() {
        return;
    }
    // SAFETY: `string` has STRING_SCRATCH_BYTES capacity; the va_list is
    // this call's own.
    unsafe {
        native_vsprintf(string, format, args);
    }
}

//! ABI layer for the string subset.
//!
//! `g_strstr_len` and `g_strv_length` are the two custom implementations;
//! everything else forwards to the identical libc primitive. The byte-level
//! search lives in `frankenglib-core`; this layer owns raw-window
//! construction and the negative-length delegation to native `strstr`.

use std::ffi::{CStr, c_char, c_void};
use std::ptr;

use core::ffi::VaList;

use frankenglib_core::string;

use crate::types::{gchar, gint, gsize, gssize, guint};

unsafe extern "C" {
    #[link_name = "vsnprintf"]
    fn native_vsnprintf(s: *mut c_char, n: usize, format: *const c_char, ap: VaList) -> gint;
}

/// `g_strstr_len` — bounded substring search.
///
/// A negative `haystack_len` means classic NUL-terminated search; a
/// non-negative one bounds the scan window, with an embedded NUL still
/// stopping the scan early. Returns a pointer to the first occurrence or
/// NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_strstr_len(
    haystack: *const gchar,
    haystack_len: gssize,
    needle: *const gchar,
) -> *mut gchar {
    if haystack.is_null() || needle.is_null() {
        return ptr::null_mut();
    }

    if haystack_len < 0 {
        // SAFETY: caller guarantees a NUL-terminated haystack in unbounded
        // mode; result semantics are exactly the native primitive's.
        return unsafe { libc::strstr(haystack, needle) };
    }

    // SAFETY: caller guarantees `haystack_len` readable bytes in bounded
    // mode; the needle is NUL-terminated.
    let needle_bytes = unsafe { CStr::from_ptr(needle) }.to_bytes();
    let window = unsafe { std::slice::from_raw_parts(haystack.cast::<u8>(), haystack_len as usize) };

    match string::strstr_len(window, needle_bytes) {
        // SAFETY: `offset` is within the validated window.
        Some(offset) => unsafe { haystack.add(offset).cast_mut() },
        None => ptr::null_mut(),
    }
}

/// `g_strv_length` — entry count of a NULL-terminated pointer array.
///
/// Termination is the caller's precondition; there is no bound argument.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_strv_length(str_array: *mut *mut gchar) -> guint {
    if str_array.is_null() {
        return 0;
    }

    let mut count: guint = 0;
    // SAFETY: caller guarantees a NULL-terminated array; entries are only
    // compared against NULL, never dereferenced.
    unsafe {
        let mut cursor = str_array;
        while !(*cursor).is_null() {
            count += 1;
            cursor = cursor.add(1);
        }
    }
    count
}

/// `g_strdup` — forwards to the platform string duplicator. Caller owns
/// the result and releases it via `g_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_strdup(str_: *const gchar) -> *mut gchar {
    if str_.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: `str_` is a valid NUL-terminated string per the caller's
    // contract.
    unsafe { libc::strdup(str_) }
}

/// `g_strfreev` — releases a string vector. The vector is freed as one
/// block; the entries are owned by that block.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_strfreev(str_array: *mut *mut gchar) {
    // SAFETY: NULL or a live block from this allocator.
    unsafe { libc::free(str_array.cast::<c_void>()) }
}

/// `g_strerror` — forwards to the platform error-string primitive.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_strerror(errnum: gint) -> *const gchar {
    // SAFETY: direct call to the platform primitive.
    unsafe { libc::strerror(errnum) }
}

/// `g_snprintf` — forwards to the platform bounded formatter.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_snprintf(
    string: *mut gchar,
    n: gsize,
    format: *const gchar,
    mut args: ...
) -> gint {
    // SAFETY: buffer, bound, and format travel straight to the native
    // formatter; the va_list is this call's own.
    unsafe { native_vsnprintf(string, n, format, args) }
}

/// `g_vsnprintf` — forwards to the platform bounded formatter.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_vsnprintf(
    string: *mut gchar,
    n: gsize,
    format: *const gchar,
    args: VaList,
) -> gint {
    // SAFETY: pass-through of the caller's va_list.
    unsafe { native_vsnprintf(string, n, format, args) }
}

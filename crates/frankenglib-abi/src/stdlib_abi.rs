//! Environment, debug-flag, and random-wrapper entry points.

use std::ptr;

use frankenglib_core::rand;

use crate::config;
use crate::types::{GDebugKey, GRand, gchar, gint, gint32, guint};

/// `g_getenv` — forwards to the platform environment lookup. The result
/// points into the host environment and must not be freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_getenv(variable: *const gchar) -> *const gchar {
    if variable.is_null() {
        return ptr::null();
    }
    // SAFETY: direct call to the platform primitive.
    unsafe { libc::getenv(variable) }
}

/// `g_parse_debug_string` — debug-flag sentinel.
///
/// Key matching is not implemented: with the debug toggle on, all flags
/// are reported set (`-1`); otherwise none are.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_parse_debug_string(
    _string: *const gchar,
    _keys: *const GDebugKey,
    _nkeys: guint,
) -> gint {
    if config::debug_enabled() { -1 } else { 0 }
}

/// `g_rand_new` — allocates the generator placeholder. Carries no state;
/// released via `g_rand_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_rand_new() -> *mut GRand {
    // SAFETY: direct call to the platform allocator.
    unsafe { libc::calloc(1, size_of::<GRand>()).cast::<GRand>() }
}

/// `g_rand_free` — releases the generator placeholder.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_rand_free(rand_: *mut GRand) {
    // SAFETY: NULL or a live placeholder from `g_rand_new`.
    unsafe { libc::free(rand_.cast()) }
}

/// `g_rand_int_range` — samples the platform PRNG and folds it into
/// `[begin, end]`. The generator handle is not consulted.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_rand_int_range(
    _rand: *mut GRand,
    begin: gint32,
    end: gint32,
) -> gint32 {
    // SAFETY: direct call to the platform PRNG.
    let raw = unsafe { libc::rand() };
    rand::int_range(raw, begin, end)
}

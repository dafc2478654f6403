#![feature(c_variadic)]
// ABI exports accept raw pointers from C callers; the caller carries the C
// contract for pointer validity, so per-function safety docs would be
// redundant boilerplate.
#![allow(clippy::missing_safety_doc)]
//! # frankenglib-abi
//!
//! ABI-compatible extern "C" boundary exposing the GLib subset an embedded
//! networking component links against.
//!
//! Each symbol resolves to exactly one strategy, fixed at compile time:
//!
//! - **forwarder**: thin wrapper over the identical libc primitive
//!   (`g_malloc`, `g_free`, `g_strdup`, `g_getenv`, ...)
//! - **custom**: the two operations whose contract no primitive matches
//!   (`g_strstr_len`, `g_strv_length`), delegating the byte-level work to
//!   `frankenglib-core`
//! - **stub**: link-compatible no-op returning a fixed sentinel
//!   (`g_spawn_async_with_fds`, `g_shell_parse_argv`)
//!
//! The assert/warn/debug macro layer routes through [`logging`], which the
//! host application can point at its own facility via
//! `frankenglib_set_log_handler` / `frankenglib_set_fatal_handler`.
//!
//! Enabling the `system-glib` feature compiles out every `g_*` export so
//! the genuine GLib can be linked in place of this adapter. That choice is
//! made at build time; there is no runtime dispatch.

pub mod config;
pub mod logging;
pub mod macros;
pub mod types;

#[cfg(not(feature = "system-glib"))]
pub mod gstring_abi;
#[cfg(not(feature = "system-glib"))]
pub mod malloc_abi;
#[cfg(not(feature = "system-glib"))]
pub mod spawn_abi;
#[cfg(not(feature = "system-glib"))]
pub mod stdlib_abi;
#[cfg(not(feature = "system-glib"))]
pub mod string_abi;

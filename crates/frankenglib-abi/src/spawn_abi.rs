//! Stub entry points: process spawning, shell tokenization, error release.
//!
//! These exist for link compatibility only. The consuming component never
//! takes the code paths that would exercise the real behavior; each stub
//! performs nothing and reports a fixed sentinel. A future consumer that
//! does exercise them needs real semantics designed from the wrapped
//! library's documented contract.

use crate::types::{GError, GPid, GSpawnChildSetupFunc, GSpawnFlags, gboolean, gchar, gint, gpointer};

/// `g_spawn_async_with_fds` — accepts the full wrapped-library signature,
/// performs no action, reports the sentinel result. `child_pid` and
/// `error` are left untouched.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_spawn_async_with_fds(
    _working_directory: *const gchar,
    _argv: *mut *mut gchar,
    _envp: *mut *mut gchar,
    _flags: GSpawnFlags,
    _child_setup: GSpawnChildSetupFunc,
    _user_data: gpointer,
    _child_pid: *mut GPid,
    _stdin_fd: gint,
    _stdout_fd: gint,
    _stderr_fd: gint,
    _error: *mut *mut GError,
) -> gboolean {
    0
}

/// `g_shell_parse_argv` — no tokenization; reports success without
/// populating the out-parameters.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_shell_parse_argv(
    _command_line: *const gchar,
    _argcp: *mut gint,
    _argvp: *mut *mut *mut gchar,
    _error: *mut *mut GError,
) -> gboolean {
    1
}

/// `g_error_free` — the error handle is never truly allocated with real
/// content; releasing it is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn g_error_free(_error: *mut GError) {}

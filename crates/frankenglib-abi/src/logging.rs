//! Host-routed logging.
//!
//! The assert/warn/debug macro layer lands here. Messages carry the adapter
//! tag and the originating macro name (`frankenglib g_warning(): ...`) and
//! go to the host application's registered callback, or to stderr when no
//! callback is installed. The fatal path invokes the host's fatal hook and
//! then terminates the process; it never returns control to the caller.

use std::ffi::{CString, c_char, c_int};
use std::io::Write;

use parking_lot::RwLock;

/// Severity passed to the host log callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Severity {
    Debug = 0,
    Warning = 1,
    Error = 2,
    Critical = 3,
}

/// Host log callback: `(severity, NUL-terminated message)`.
pub type HostLogFunc = unsafe extern "C" fn(severity: c_int, message: *const c_char);

/// Host fatal hook, invoked with the final message before the process is
/// terminated. Returning from the hook does not avert termination.
pub type HostFatalFunc = unsafe extern "C" fn(message: *const c_char);

static HOST_LOG: RwLock<Option<HostLogFunc>> = RwLock::new(None);
static HOST_FATAL: RwLock<Option<HostFatalFunc>> = RwLock::new(None);

const TAG: &str = "frankenglib";

fn format_line(origin: &str, text: &str) -> String {
    format!("{TAG} {origin}(): {text}")
}

fn dispatch(severity: Severity, line: &str) {
    let handler = *HOST_LOG.read();
    match handler {
        Some(func) => match CString::new(line.replace('\0', "\\0")) {
            // SAFETY: host-registered callback; message outlives the call.
            Ok(c_line) => unsafe { func(severity as c_int, c_line.as_ptr()) },
            Err(_) => {
                let _ = writeln!(std::io::stderr(), "{line}");
            }
        },
        None => {
            let _ = writeln!(std::io::stderr(), "{line}");
        }
    }
}

/// Routes one message to the host facility (or stderr).
pub fn log_message(severity: Severity, origin: &str, text: &str) {
    dispatch(severity, &format_line(origin, text));
}

/// Logs at critical severity, invokes the host fatal hook, and aborts.
pub fn fatal(origin: &str, text: &str) -> ! {
    let line = format_line(origin, text);
    dispatch(Severity::Critical, &line);

    let hook = *HOST_FATAL.read();
    if let Some(func) = hook {
        if let Ok(c_line) = CString::new(line.replace('\0', "\\0")) {
            // SAFETY: host-registered hook; message outlives the call.
            unsafe { func(c_line.as_ptr()) };
        }
    }
    std::process::abort();
}

/// Registers the host application's log callback. NULL restores the
/// default stderr sink.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn frankenglib_set_log_handler(handler: Option<HostLogFunc>) {
    *HOST_LOG.write() = handler;
}

/// Registers the host application's fatal hook. NULL removes it; the
/// process still aborts after a failed critical assertion either way.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn frankenglib_set_fatal_handler(handler: Option<HostFatalFunc>) {
    *HOST_FATAL.write() = handler;
}

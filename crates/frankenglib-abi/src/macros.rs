//! The assert/warn/debug macro layer of the wrapped API.
//!
//! These exist at compile time only; there is no exported symbol behind
//! them. Conditions route through [`crate::logging`]: `g_assert!` and
//! `g_critical!` are fatal, the warn family logs and continues, and
//! `g_debug!` is gated by the runtime debug toggle.

/// Fatal assertion. A false condition terminates the process; control
/// never returns to the caller.
#[macro_export]
macro_rules! g_assert {
    ($cond:expr) => {
        if !($cond) {
            $crate::logging::fatal("g_assert", ::core::stringify!($cond));
        }
    };
}

/// Marks a branch the author considered unreachable; reaching it is fatal.
#[macro_export]
macro_rules! g_assert_not_reached {
    () => {
        $crate::logging::fatal("g_assert_not_reached", "control reached")
    };
}

/// Fatal diagnostic with a formatted message.
#[macro_export]
macro_rules! g_critical {
    ($($arg:tt)*) => {
        $crate::logging::fatal("g_critical", &::std::format!($($arg)*))
    };
}

/// Error-severity diagnostic. Logs and continues.
#[macro_export]
macro_rules! g_error {
    ($($arg:tt)*) => {
        $crate::logging::log_message(
            $crate::logging::Severity::Error,
            "g_error",
            &::std::format!($($arg)*),
        )
    };
}

/// Warning diagnostic. Logs and continues.
#[macro_export]
macro_rules! g_warning {
    ($($arg:tt)*) => {
        $crate::logging::log_message(
            $crate::logging::Severity::Warning,
            "g_warning",
            &::std::format!($($arg)*),
        )
    };
}

/// Debug diagnostic; emitted only when the debug toggle is on.
#[macro_export]
macro_rules! g_debug {
    ($($arg:tt)*) => {
        if $crate::config::debug_enabled() {
            $crate::logging::log_message(
                $crate::logging::Severity::Debug,
                "g_debug",
                &::std::format!($($arg)*),
            );
        }
    };
}

/// Soft assertion: a false condition logs a warning and continues.
#[macro_export]
macro_rules! g_warn_if_fail {
    ($cond:expr) => {
        if !($cond) {
            $crate::logging::log_message(
                $crate::logging::Severity::Warning,
                "g_warn_if_fail",
                ::core::stringify!($cond),
            );
        }
    };
}

/// Warns that a branch considered unreachable was taken. Non-fatal.
#[macro_export]
macro_rules! g_warn_if_reached {
    () => {
        $crate::logging::log_message(
            $crate::logging::Severity::Warning,
            "g_warn_if_reached",
            "control reached",
        )
    };
}

/// Guard clause: returns `$val` from the enclosing function when the
/// condition fails. Silent, matching the wrapped contract.
#[macro_export]
macro_rules! g_return_val_if_fail {
    ($cond:expr, $val:expr) => {
        if !($cond) {
            return $val;
        }
    };
}

/// Typed allocation of `$n` elements. Must be called in an unsafe context;
/// the caller owns the result and releases it via `g_free`.
#[macro_export]
macro_rules! g_new {
    ($t:ty, $n:expr) => {
        $crate::malloc_abi::g_malloc(::core::mem::size_of::<$t>() * $n) as *mut $t
    };
}

/// Zeroed typed allocation of `$n` elements.
#[macro_export]
macro_rules! g_new0 {
    ($t:ty, $n:expr) => {
        $crate::malloc_abi::g_malloc0(::core::mem::size_of::<$t>() * $n) as *mut $t
    };
}

/// Element count of a fixed-size array.
#[macro_export]
macro_rules! g_n_elements {
    ($arr:expr) => {
        $arr.len()
    };
}

/// Compile-time assertion.
#[macro_export]
macro_rules! g_static_assert {
    ($e:expr) => {
        const _: () = assert!($e);
    };
}

/// Branch-prediction hint in the wrapped API; evaluates its argument.
#[macro_export]
macro_rules! g_unlikely {
    ($e:expr) => {
        ($e)
    };
}

/// Version gate of the wrapped library; this adapter always satisfies it.
#[macro_export]
macro_rules! glib_check_version {
    ($major:expr, $minor:expr, $micro:expr) => {
        true
    };
}

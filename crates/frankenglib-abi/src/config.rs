//! Debug-log configuration.
//!
//! Debug output is off unless the `FRANKENGLIB_DEBUG` environment variable
//! enables it (`1`, `true`, `on`, `debug`). The variable is read once and
//! cached in an atomic so the `g_debug!` fast path is a single relaxed
//! load.

use std::sync::atomic::{AtomicU8, Ordering};

// Atomic cache: 0=unresolved, 1=off, 2=on, 255=resolving. A non-blocking
// state machine rather than OnceLock, so a reentrant call arriving while
// std::env::var runs gets the safe default instead of deadlocking.
static CACHED_DEBUG: AtomicU8 = AtomicU8::new(0);

const DEBUG_UNRESOLVED: u8 = 0;
const DEBUG_OFF: u8 = 1;
const DEBUG_ON: u8 = 2;
const DEBUG_RESOLVING: u8 = 255;

fn parse_debug_env(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "debug"
    )
}

/// Whether debug logging is enabled (reads the env var on first call,
/// caches thereafter). Reentrant callers during resolution see `false`.
#[must_use]
pub fn debug_enabled() -> bool {
    let cached = CACHED_DEBUG.load(Ordering::Relaxed);

    if cached == DEBUG_ON {
        return true;
    }
    if cached == DEBUG_OFF {
        return false;
    }
    if cached == DEBUG_RESOLVING {
        return false;
    }

    if CACHED_DEBUG
        .compare_exchange(
            DEBUG_UNRESOLVED,
            DEBUG_RESOLVING,
            Ordering::SeqCst,
            Ordering::Relaxed,
        )
        .is_err()
    {
        return CACHED_DEBUG.load(Ordering::Relaxed) == DEBUG_ON;
    }

    let enabled = std::env::var("FRANKENGLIB_DEBUG")
        .map(|v| parse_debug_env(&v))
        .unwrap_or(false);
    CACHED_DEBUG.store(
        if enabled { DEBUG_ON } else { DEBUG_OFF },
        Ordering::Release,
    );
    enabled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_common_spellings() {
        assert!(parse_debug_env("1"));
        assert!(parse_debug_env("true"));
        assert!(parse_debug_env("TRUE"));
        assert!(parse_debug_env("on"));
        assert!(parse_debug_env("debug"));
        assert!(!parse_debug_env("0"));
        assert!(!parse_debug_env("off"));
        assert!(!parse_debug_env("bogus"));
    }

    // One test body: the cache is process-global state.
    #[test]
    fn cache_states_resolve_as_expected() {
        let previous = CACHED_DEBUG.swap(DEBUG_ON, Ordering::SeqCst);
        assert!(debug_enabled());
        assert!(debug_enabled());

        CACHED_DEBUG.store(DEBUG_OFF, Ordering::SeqCst);
        assert!(!debug_enabled());

        // Reentrant callers during resolution get the quiet default.
        CACHED_DEBUG.store(DEBUG_RESOLVING, Ordering::SeqCst);
        assert!(!debug_enabled());

        CACHED_DEBUG.store(previous, Ordering::SeqCst);
    }
}

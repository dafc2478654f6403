//! Scenario replay over the safe core implementation.
//!
//! The built-in table covers the documented contracts: bounded and
//! unbounded substring search (including the embedded-NUL stop and the
//! bound-shorter-than-needle fast fail), sentinel-terminated array
//! counting, and the range fold behind the random wrapper.

use std::ptr::NonNull;

use frankenglib_core::{rand, string, strv};

/// Result of one replayed scenario.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl ScenarioOutcome {
    fn check(
        name: &'static str,
        expected: impl std::fmt::Debug,
        actual: impl std::fmt::Debug,
    ) -> Self {
        let expected = format!("{expected:?}");
        let actual = format!("{actual:?}");
        let passed = expected == actual;
        let detail = if passed {
            format!("= {actual}")
        } else {
            format!("expected {expected}, got {actual}")
        };
        Self {
            name,
            passed,
            detail,
        }
    }
}

struct SearchCase {
    name: &'static str,
    window: &'static [u8],
    needle: &'static [u8],
    expected: Option<usize>,
}

const BOUNDED_CASES: &[SearchCase] = &[
    SearchCase {
        name: "bounded/suffix_within_bound",
        window: b"hello world",
        needle: b"world",
        expected: Some(6),
    },
    SearchCase {
        name: "bounded/bound_excludes_match",
        window: b"hello",
        needle: b"world",
        expected: None,
    },
    SearchCase {
        name: "bounded/empty_needle",
        window: b"hello world",
        needle: b"",
        expected: Some(0),
    },
    SearchCase {
        name: "bounded/nul_halts_scan",
        window: b"ab\0cd",
        needle: b"cd",
        expected: None,
    },
    SearchCase {
        name: "bounded/match_before_nul",
        window: b"ab\0cd",
        needle: b"ab",
        expected: Some(0),
    },
    SearchCase {
        name: "bounded/needle_longer_than_bound",
        window: b"worl",
        needle: b"world",
        expected: None,
    },
];

const UNBOUNDED_CASES: &[SearchCase] = &[
    SearchCase {
        name: "unbounded/suffix_hit",
        window: b"hello world\0",
        needle: b"world\0",
        expected: Some(6),
    },
    SearchCase {
        name: "unbounded/absent_needle",
        window: b"hello world\0",
        needle: b"xyz\0",
        expected: None,
    },
    SearchCase {
        name: "unbounded/empty_needle_returns_start",
        window: b"hello\0",
        needle: b"\0",
        expected: Some(0),
    },
];

/// Replays the built-in scenario table.
pub struct ScenarioRunner;

impl ScenarioRunner {
    /// Run every scenario; outcomes arrive in table order.
    #[must_use]
    pub fn run_all() -> Vec<ScenarioOutcome> {
        let mut outcomes = Vec::new();
        outcomes.extend(Self::search_scenarios());
        outcomes.extend(Self::strv_scenarios());
        outcomes.extend(Self::range_scenarios());
        outcomes
    }

    fn search_scenarios() -> Vec<ScenarioOutcome> {
        let mut outcomes = Vec::new();

        for case in BOUNDED_CASES {
            outcomes.push(ScenarioOutcome::check(
                case.name,
                case.expected,
                string::strstr_len(case.window, case.needle),
            ));
        }
        for case in UNBOUNDED_CASES {
            outcomes.push(ScenarioOutcome::check(
                case.name,
                case.expected,
                string::strstr(case.window, case.needle),
            ));
        }

        // Purity: identical arguments, identical result.
        let first = string::strstr_len(b"needle in a haystack", b"hay");
        let second = string::strstr_len(b"needle in a haystack", b"hay");
        outcomes.push(ScenarioOutcome::check("bounded/idempotent", first, second));

        outcomes
    }

    fn strv_scenarios() -> Vec<ScenarioOutcome> {
        // Entries are only compared against NULL; dangling non-null
        // pointers stand in for real strings.
        let entry = NonNull::<u8>::dangling().as_ptr().cast_const();

        let three = [entry, entry, entry, std::ptr::null()];
        let none: [*const u8; 1] = [std::ptr::null()];

        vec![
            ScenarioOutcome::check("strv/three_entries", 3usize, strv::length(&three)),
            ScenarioOutcome::check("strv/empty_vector", 0usize, strv::length(&none)),
        ]
    }

    fn range_scenarios() -> Vec<ScenarioOutcome> {
        let all_in_range = (0..256).all(|raw| {
            let v = rand::int_range(raw, 3, 9);
            (3..=9).contains(&v)
        });
        vec![
            ScenarioOutcome::check("range/folds_into_bounds", true, all_in_range),
            ScenarioOutcome::check("range/degenerate", 5, rand::int_range(1234, 5, 5)),
        ]
    }
}

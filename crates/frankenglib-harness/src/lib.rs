//! Conformance harness for frankenglib.
//!
//! This crate provides:
//! - Scenario replay: run the documented search/count/range contracts
//!   against the safe core implementation
//! - Fixture loading: externally captured cases as JSON reference data
//! - Structured logging: JSONL evidence for each scenario outcome

#![forbid(unsafe_code)]

pub mod fixtures;
pub mod runner;
pub mod structured_log;

pub use fixtures::{FixtureCase, FixtureError, FixtureSet};
pub use runner::{ScenarioOutcome, ScenarioRunner};

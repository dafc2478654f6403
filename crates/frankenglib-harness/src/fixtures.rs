//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported fixture schema version.
pub const SCHEMA_VERSION: &str = "1";

/// Errors raised while loading or checking fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("fixture schema: {0}")]
    Schema(String),
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Operation being exercised (`strstr_len`, `strv_length`, `int_range`).
    pub function: String,
    /// Input parameters (serialized).
    pub inputs: serde_json::Value,
    /// Expected output, serialized as a string for comparison.
    pub expected_output: String,
}

/// A collection of fixture cases for one operation family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Operation family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize a fixture set to pretty JSON.
    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check schema version and per-case integrity.
    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.version != SCHEMA_VERSION {
            return Err(FixtureError::Schema(format!(
                "unsupported version {:?}, expected {SCHEMA_VERSION:?}",
                self.version
            )));
        }
        for case in &self.cases {
            if case.name.is_empty() {
                return Err(FixtureError::Schema("case with empty name".into()));
            }
            if case.function.is_empty() {
                return Err(FixtureError::Schema(format!(
                    "case {:?} names no function",
                    case.name
                )));
            }
        }
        Ok(())
    }
}

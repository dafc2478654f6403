//! Structured logging for harness runs.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record
//! - [`LogEmitter`]: writes JSONL lines to a file or stdout
//! - [`validate_log_line`]: validates a single JSONL line against the schema

use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Scenario outcome recorded alongside an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `level`, `event`. The optional fields
/// carry scenario context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl LogEntry {
    /// Entry for one scenario outcome, stamped now.
    #[must_use]
    pub fn scenario(name: &str, passed: bool, detail: &str) -> Self {
        Self {
            timestamp: epoch_timestamp(),
            level: if passed { LogLevel::Info } else { LogLevel::Error },
            event: "scenario".into(),
            scenario: Some(name.into()),
            outcome: Some(if passed { Outcome::Pass } else { Outcome::Fail }),
            detail: Some(detail.into()),
        }
    }

    /// Free-form entry, stamped now.
    #[must_use]
    pub fn event(level: LogLevel, event: &str) -> Self {
        Self {
            timestamp: epoch_timestamp(),
            level,
            event: event.into(),
            scenario: None,
            outcome: None,
            detail: None,
        }
    }
}

/// Seconds since the UNIX epoch, as a string field.
#[must_use]
pub fn epoch_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".into())
}

/// Writes JSONL lines to an arbitrary sink.
pub struct LogEmitter {
    writer: Box<dyn Write>,
}

impl LogEmitter {
    /// Emitter writing to stdout.
    #[must_use]
    pub fn to_stdout() -> Self {
        Self {
            writer: Box::new(std::io::stdout()),
        }
    }

    /// Emitter appending to a file, created if absent.
    pub fn to_file(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            writer: Box::new(file),
        })
    }

    /// Write one entry as a JSONL line.
    pub fn emit(&mut self, entry: &LogEntry) -> std::io::Result<()> {
        let line = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")
    }
}

/// Parse and validate a single JSONL line.
pub fn validate_log_line(line: &str) -> Result<LogEntry, serde_json::Error> {
    serde_json::from_str(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_entry_round_trips() {
        let entry = LogEntry::scenario("bounded/suffix_within_bound", true, "= Some(6)");
        let line = serde_json::to_string(&entry).unwrap();
        let parsed = validate_log_line(&line).unwrap();
        assert_eq!(parsed.level, LogLevel::Info);
        assert_eq!(parsed.outcome, Some(Outcome::Pass));
        assert_eq!(parsed.scenario.as_deref(), Some("bounded/suffix_within_bound"));
    }

    #[test]
    fn failure_maps_to_error_level() {
        let entry = LogEntry::scenario("x", false, "expected 1, got 2");
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.outcome, Some(Outcome::Fail));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let entry = LogEntry::event(LogLevel::Info, "run_start");
        let line = serde_json::to_string(&entry).unwrap();
        assert!(!line.contains("scenario"));
        assert!(!line.contains("outcome"));
    }

    #[test]
    fn invalid_line_is_rejected() {
        assert!(validate_log_line("{\"level\": \"nope\"}").is_err());
    }
}

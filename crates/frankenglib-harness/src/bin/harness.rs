//! Conformance harness binary.
//!
//! `harness run` replays the built-in scenario table and emits JSONL
//! evidence; `harness validate` checks a fixture file against the schema.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use frankenglib_harness::fixtures::FixtureSet;
use frankenglib_harness::runner::ScenarioRunner;
use frankenglib_harness::structured_log::{LogEmitter, LogEntry, LogLevel};

#[derive(Parser)]
#[command(name = "harness", about = "frankenglib conformance harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the built-in conformance scenarios and emit JSONL evidence.
    Run {
        /// Append evidence to this file instead of stdout.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Validate a fixture file against the schema.
    Validate {
        /// Fixture JSON file.
        path: PathBuf,
    },
}

fn run(log: Option<PathBuf>) -> ExitCode {
    let mut emitter = match log {
        Some(path) => match LogEmitter::to_file(&path) {
            Ok(emitter) => emitter,
            Err(err) => {
                eprintln!("harness: cannot open log {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => LogEmitter::to_stdout(),
    };

    if let Err(err) = emitter.emit(&LogEntry::event(LogLevel::Info, "run_start")) {
        eprintln!("harness: log write failed: {err}");
        return ExitCode::FAILURE;
    }

    let outcomes = ScenarioRunner::run_all();
    let mut failures = 0usize;
    for outcome in &outcomes {
        if !outcome.passed {
            failures += 1;
        }
        let entry = LogEntry::scenario(outcome.name, outcome.passed, &outcome.detail);
        if let Err(err) = emitter.emit(&entry) {
            eprintln!("harness: log write failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    eprintln!(
        "harness: {} scenarios, {} failed",
        outcomes.len(),
        failures
    );
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn validate(path: PathBuf) -> ExitCode {
    match FixtureSet::from_file(&path).and_then(|set| {
        set.validate()?;
        Ok(set)
    }) {
        Ok(set) => {
            eprintln!(
                "harness: {} is valid ({} cases, family {})",
                path.display(),
                set.cases.len(),
                set.family
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("harness: {}: {err}", path.display());
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { log } => run(log),
        Command::Validate { path } => validate(path),
    }
}

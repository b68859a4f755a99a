//! # exerun UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Turns run outcomes into the text exerun prints on stdout. Rendering is
//! kept apart from printing so the exact output can be unit-tested.
//!
//! The full report (`exerun run`) looks like:
//!
//! ```text
//! Status Code: 1
//! Standard Output:
//! a
//!
//! Standard Error:
//! b
//!
//! ```
//!
//! Captured streams are printed verbatim, including any trailing newline the
//! child wrote, so an empty stream shows up as an empty line after its label.
//!
//! `emit` writes rendered text to stdout. A reader that has gone away
//! (`exerun run x | head -0`) is not an error: the report is dropped and the
//! exit status stays `0`.
//!
use crate::common::process::ExecutionResult;
use crate::core::error::RunError;
use std::io::{self, Write};

/// Renders the full report: exit code, then both streams, each labeled.
pub fn render_report(result: &ExecutionResult) -> String {
    format!(
        "Status Code: {}\nStandard Output:\n{}\nStandard Error:\n{}\n",
        result.exit_code, result.stdout, result.stderr
    )
}

/// Renders only the exit code.
pub fn render_status(result: &ExecutionResult) -> String {
    format!("Exit code: {}\n", result.exit_code)
}

/// Renders a failed run as a single user-facing line.
pub fn render_failure(err: &RunError) -> String {
    match err {
        RunError::NotFound { .. } => format!("Error: {}\n", err),
        RunError::Execution { .. } => format!("An error occurred: {}\n", err),
    }
}

/// Writes `text` to stdout, treating a closed pipe as success.
pub fn emit(text: &str) -> io::Result<()> {
    emit_to(&mut io::stdout().lock(), text)
}

fn emit_to<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

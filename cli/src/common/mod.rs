//! # exerun Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from the
//! command-specific logic in `commands::` and the infrastructure in `core::`.
//!
//! - **`process`**: Runs an executable to completion and captures its exit code and output.
//! - **`ui`**: Renders run results and failures as the text printed to stdout.
//!

/// Utilities for executing external processes and capturing their output.
pub mod process;
/// Rendering of reports and failure messages.
pub mod ui;

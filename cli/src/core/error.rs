//! # exerun Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout exerun. There are two
//! families, and keeping them apart is what lets the CLI exit `0` for every
//! outcome of the child process while still failing loudly when the wrapper
//! itself is misused:
//!
//! - `RunError`: the outcome of a failed run of the target executable. These
//!   are *reported* (printed to stdout) by the command handlers and never
//!   propagated to `main`.
//! - `ExerunError`: failures of the wrapper itself (bad configuration, no
//!   executable path given). These propagate to `main` and end the process
//!   with a non-zero status.
//!
//! `Result<T>` is an alias for `anyhow::Result<T>` for handler-level code.
//!
//! ## Examples
//!
//! ```rust
//! match process::run(&path).await {
//!     Ok(result) => println!("{}", ui::render_report(&result)),
//!     Err(RunError::NotFound { path }) => println!("missing: {}", path),
//!     Err(e) => println!("{}", e),
//! }
//! ```
//!
use std::io;
use thiserror::Error;

/// Failure of a single run of the target executable.
///
/// A non-zero exit code is *not* a `RunError`; the child ran and its status is
/// part of a successful `ExecutionResult`.
#[derive(Error, Debug)]
pub enum RunError {
    /// The executable could not be located.
    #[error("The file '{path}' was not found.")]
    NotFound { path: String },

    /// Any other failure while spawning, waiting on, or reading from the child.
    #[error("{source}")]
    Execution {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    /// Classifies an I/O error raised while running `path`.
    pub fn from_io(path: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => RunError::NotFound {
                path: path.to_string(),
            },
            _ => RunError::Execution {
                path: path.to_string(),
                source,
            },
        }
    }

    /// The executable path this error refers to.
    pub fn path(&self) -> &str {
        match self {
            RunError::NotFound { path } | RunError::Execution { path, .. } => path,
        }
    }
}

/// Custom error type for failures of the exerun wrapper itself.
#[derive(Error, Debug)]
pub enum ExerunError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "No executable given. Pass a PATH argument, set EXERUN_EXECUTABLE, \
         or set runner.default_executable in .exerun.toml."
    )]
    MissingExecutable,
}

/// Type alias for Result using anyhow::Error for handler-level code.
pub type Result<T> = anyhow::Result<T>;

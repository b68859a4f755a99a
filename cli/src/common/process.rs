//! # exerun Process Execution (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs an external executable to completion and collects its outcome. This is
//! the only place in exerun that touches the OS process table.
//!
//! ## Architecture
//!
//! `run` spawns the executable with no arguments, the caller's stdin, and piped
//! stdout/stderr, then awaits `tokio::process::Command::output`, which drains
//! both pipes concurrently while waiting for the child to exit. The caller is
//! suspended until the child terminates; there is no timeout.
//!
//! Every call has exactly one of three outcomes:
//! - `Ok(ExecutionResult)`: the child ran and exited, whatever its exit code.
//! - `Err(RunError::NotFound)`: the executable could not be located.
//! - `Err(RunError::Execution)`: any other spawn, wait, or read failure.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let result = process::run("./print.exe").await?;
//! println!("exit code {}", result.exit_code);
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::RunError;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info};

/// Outcome of a child process that ran to completion.
///
/// Built once by `run` after the child has exited. Output is decoded as UTF-8;
/// invalid sequences are replaced with U+FFFD rather than failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit status of the child. On Unix a child killed by a signal reports
    /// the negated signal number (e.g. `-9` for SIGKILL).
    pub exit_code: i32,
    /// Everything the child wrote to standard output.
    pub stdout: String,
    /// Everything the child wrote to standard error.
    pub stderr: String,
}

impl ExecutionResult {
    /// `true` when the child exited with code `0`.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// # Run Executable (`run`)
///
/// Spawns `path` as a child process with no arguments, waits for it to exit,
/// and returns its exit code together with the full text of both output
/// streams.
///
/// `path` is handed to the OS unchanged: a value containing a path separator
/// is resolved against the current working directory, a bare name is looked
/// up on `PATH`.
///
/// ## Returns
///
/// * `Ok(ExecutionResult)` - The child ran; a non-zero exit code is still `Ok`.
/// * `Err(RunError::NotFound)` - Nothing executable exists at `path`.
/// * `Err(RunError::Execution)` - Any other failure (permission denied, I/O error).
pub async fn run(path: &str) -> Result<ExecutionResult, RunError> {
    info!("Running executable '{}'", path);

    let output = Command::new(path)
        .stdin(Stdio::inherit()) // `output()` would otherwise default to null
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| {
            debug!("Running '{}' failed: {:?}", path, e);
            RunError::from_io(path, e)
        })?;

    let result = ExecutionResult {
        exit_code: exit_code(output.status),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    debug!(
        "'{}' exited with {} ({} bytes stdout, {} bytes stderr)",
        path,
        result.exit_code,
        output.stdout.len(),
        output.stderr.len()
    );
    Ok(result)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| -sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_run_bare_name_not_on_path_is_not_found() {
        let err = run("exerun-no-such-program").await.unwrap_err();
        match err {
            RunError::NotFound { path } => assert_eq!(path, "exerun-no-such-program"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_missing_executable_is_not_found() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("print.exe");
        let missing = missing.to_string_lossy().into_owned();

        let err = run(&missing).await.unwrap_err();
        match err {
            RunError::NotFound { path } => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::{Path, PathBuf};
        use tempfile::tempdir;

        /// Writes an executable `/bin/sh` script into `dir`.
        fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
            let path = dir.join(name);
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn as_arg(path: &Path) -> String {
            path.to_string_lossy().into_owned()
        }

        #[tokio::test]
        async fn test_run_captures_stdout_and_zero_exit() {
            let temp_dir = tempdir().unwrap();
            let script = write_script(temp_dir.path(), "hello.sh", "echo hello");

            let result = run(&as_arg(&script)).await.unwrap();
            assert_eq!(result.exit_code, 0);
            assert_eq!(result.stdout, "hello\n");
            assert_eq!(result.stderr, "");
            assert!(result.success());
        }

        #[tokio::test]
        async fn test_run_bare_name_is_looked_up_on_path() {
            let result = run("true").await.unwrap();
            assert_eq!(result.exit_code, 0);
            assert_eq!(result.stdout, "");

            let result = run("false").await.unwrap();
            assert_ne!(result.exit_code, 0);
        }

        #[tokio::test]
        async fn test_run_nonzero_exit_is_still_ok() {
            let temp_dir = tempdir().unwrap();
            let script = write_script(temp_dir.path(), "fail.sh", "exit 42");

            let result = run(&as_arg(&script)).await.unwrap();
            assert_eq!(result.exit_code, 42);
            assert!(!result.success());
        }

        #[tokio::test]
        async fn test_run_keeps_streams_separate() {
            let temp_dir = tempdir().unwrap();
            let script = write_script(
                temp_dir.path(),
                "both.sh",
                "echo out-line\necho err-line 1>&2\necho out-again",
            );

            let result = run(&as_arg(&script)).await.unwrap();
            assert_eq!(result.stdout, "out-line\nout-again\n");
            assert_eq!(result.stderr, "err-line\n");
        }

        #[tokio::test]
        async fn test_run_captures_large_output_without_truncation() {
            let temp_dir = tempdir().unwrap();
            // Enough to overflow a pipe buffer on both streams.
            let script = write_script(
                temp_dir.path(),
                "big.sh",
                "i=0\nwhile [ $i -lt 20000 ]; do echo \"line $i\"; echo \"err $i\" 1>&2; i=$((i+1)); done",
            );

            let result = run(&as_arg(&script)).await.unwrap();
            assert_eq!(result.exit_code, 0);
            assert_eq!(result.stdout.lines().count(), 20000);
            assert_eq!(result.stderr.lines().count(), 20000);
            assert_eq!(result.stdout.lines().last(), Some("line 19999"));
        }

        #[tokio::test]
        async fn test_run_twice_gives_independent_results() {
            let temp_dir = tempdir().unwrap();
            let counter = temp_dir.path().join("count");
            let script = write_script(
                temp_dir.path(),
                "count.sh",
                &format!("echo x >> '{}'\nwc -l < '{}'", counter.display(), counter.display()),
            );
            let path = as_arg(&script);

            let first = run(&path).await.unwrap();
            let second = run(&path).await.unwrap();
            assert_eq!(first.stdout.trim(), "1");
            assert_eq!(second.stdout.trim(), "2");
            assert_ne!(first, second);
        }

        #[tokio::test]
        async fn test_run_signal_death_reports_negative_code() {
            let temp_dir = tempdir().unwrap();
            let script = write_script(temp_dir.path(), "killed.sh", "kill -9 $$");

            let result = run(&as_arg(&script)).await.unwrap();
            assert_eq!(result.exit_code, -9);
        }

        #[tokio::test]
        async fn test_run_non_executable_file_is_execution_error() {
            let temp_dir = tempdir().unwrap();
            let path = temp_dir.path().join("plain.txt");
            fs::write(&path, "not a program").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

            let err = run(&as_arg(&path)).await.unwrap_err();
            assert!(matches!(err, RunError::Execution { .. }), "got {:?}", err);
            assert_eq!(err.path(), as_arg(&path));
        }

        #[tokio::test]
        async fn test_run_directory_is_execution_error() {
            let temp_dir = tempdir().unwrap();
            let err = run(&as_arg(temp_dir.path())).await.unwrap_err();
            assert!(matches!(err, RunError::Execution { .. }), "got {:?}", err);
        }

        #[tokio::test]
        async fn test_run_decodes_invalid_utf8_lossily() {
            let temp_dir = tempdir().unwrap();
            let script = write_script(temp_dir.path(), "bytes.sh", "printf 'a\\377b'");

            let result = run(&as_arg(&script)).await.unwrap();
            assert_eq!(result.stdout, "a\u{FFFD}b");
        }
    }
}

//! # exerun CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`: a constructor for
//! the compiled `exerun` binary and fixture executables written as small
//! `/bin/sh` scripts.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// # Get exerun Command (`exerun_cmd`)
///
/// Returns an `assert_cmd::Command` for the compiled `exerun` binary, isolated
/// from the caller's environment: `EXERUN_EXECUTABLE` and `RUST_LOG` are
/// removed so each test controls them explicitly.
///
/// ## Panics
/// Panics if the `exerun` binary cannot be found via `Command::cargo_bin`.
pub fn exerun_cmd() -> Command {
    let mut cmd = Command::cargo_bin("exerun").expect("Failed to find exerun binary for testing");
    cmd.env_remove("EXERUN_EXECUTABLE").env_remove("RUST_LOG");
    cmd
}

/// Writes an executable `/bin/sh` script named `name` into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write fixture script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fixture script");
    path
}

/// Points the user config directory lookups at `dir` so a developer's own
/// configuration cannot leak into a test.
pub fn isolate_user_config(cmd: &mut Command, dir: &Path) {
    cmd.env("HOME", dir).env("XDG_CONFIG_HOME", dir.join(".config"));
}

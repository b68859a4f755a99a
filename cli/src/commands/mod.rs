//! # exerun Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the exerun CLI and the
//! pieces they share.
//!
//! ## Command Groups
//!
//! - `run`: Run an executable and print its exit code, stdout, and stderr
//! - `status`: Run an executable and print only its exit code
//!
//! Both commands accept the same target arguments (`TargetArgs`) and resolve
//! the executable path the same way:
//! 1. The positional `PATH` argument
//! 2. The `EXERUN_EXECUTABLE` environment variable
//! 3. `runner.default_executable` from the configuration files
//!
use crate::core::{
    config::{self, Config},
    error::{ExerunError, Result},
};
use anyhow::Context;
use clap::Args;
use tracing::debug;

/// Implements `exerun run` (full report).
pub mod run;
/// Implements `exerun status` (exit code only).
pub mod status;

/// Target selection shared by every command that runs an executable.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Path to the executable to run. A value containing a path separator is
    /// resolved against the current directory; a bare name is looked up on PATH.
    #[arg(value_name = "PATH", env = "EXERUN_EXECUTABLE")]
    pub path: Option<String>,
}

/// # Resolve Target Executable (`resolve_executable`)
///
/// Returns the executable path to run. Configuration is only loaded when no
/// path was given on the command line or in the environment.
///
/// ## Returns
///
/// * `Ok(String)` - The path to hand to the runner.
/// * `Err` - Configuration could not be loaded, or no path is configured anywhere.
pub fn resolve_executable(target: &TargetArgs) -> Result<String> {
    if let Some(path) = &target.path {
        debug!("Using executable from arguments: {}", path);
        return Ok(path.clone());
    }
    let cfg = config::load_config().context("Failed to load exerun configuration")?;
    executable_from_config(&cfg)
}

fn executable_from_config(cfg: &Config) -> Result<String> {
    match &cfg.runner.default_executable {
        Some(path) => {
            debug!("Using executable from configuration: {}", path);
            Ok(path.clone())
        }
        None => Err(ExerunError::MissingExecutable.into()),
    }
}

//! # exerun Run Handler
//!
//! File: cli/src/commands/run.rs
//!
//! ## Overview
//!
//! Implements `exerun run`: run the target executable and print a labeled
//! report of its exit code, standard output, and standard error.
//!
//! A run that fails (executable missing, permission denied, I/O error) is
//! reported as a printed message and the command still succeeds, so exerun
//! exits `0` whatever happened to the child.
//!
//! ## Usage
//!
//! ```bash
//! exerun run ./print.exe
//! EXERUN_EXECUTABLE=./print.exe exerun run
//! ```
//!
use crate::{
    commands::{self, TargetArgs},
    common::{process, ui},
    core::error::Result,
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

/// # Run Arguments (`RunArgs`)
#[derive(Parser, Debug)]
#[command(about = "Run an executable and print its exit code, stdout, and stderr")]
pub struct RunArgs {
    #[command(flatten)]
    target: TargetArgs,
}

/// # Handle Run Command (`handle_run`)
///
/// Resolves the target, runs it, and prints either the full report or the
/// failure message. Only wrapper errors (no target, bad configuration) are
/// returned as `Err`.
pub async fn handle_run(args: RunArgs) -> Result<()> {
    info!("Handling run command...");
    debug!("Run args: {:?}", args);

    let path = commands::resolve_executable(&args.target)?;

    match process::run(&path).await {
        Ok(result) => {
            if !result.success() {
                info!("'{}' exited with non-zero code {}", path, result.exit_code);
            }
            ui::emit(&ui::render_report(&result)).context("Failed to write report")?;
        }
        Err(e) => {
            warn!("Run of '{}' failed: {}", e.path(), e);
            ui::emit(&ui::render_failure(&e)).context("Failed to write report")?;
        }
    }
    Ok(())
}

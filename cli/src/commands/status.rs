//! # exerun Status Handler
//!
//! File: cli/src/commands/status.rs
//!
//! ## Overview
//!
//! Implements `exerun status`: run the target executable, discard its output,
//! and print only `Exit code: <N>`. Failures are reported the same way as
//! `exerun run` does.
//!
use crate::{
    commands::{self, TargetArgs},
    common::{process, ui},
    core::error::Result,
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

/// # Status Arguments (`StatusArgs`)
#[derive(Parser, Debug)]
#[command(about = "Run an executable and print only its exit code")]
pub struct StatusArgs {
    #[command(flatten)]
    target: TargetArgs,
}

pub async fn handle_status(args: StatusArgs) -> Result<()> {
    info!("Handling status command...");
    debug!("Status args: {:?}", args);

    let path = commands::resolve_executable(&args.target)?;

    match process::run(&path).await {
        Ok(result) => {
            ui::emit(&ui::render_status(&result)).context("Failed to write report")?
        }
        Err(e) => {
            warn!("Run of '{}' failed: {}", e.path(), e);
            ui::emit(&ui::render_failure(&e)).context("Failed to write report")?;
        }
    }
    Ok(())
}

//! # exerun Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional configuration that supplies a default
//! executable path, so `exerun run` can be invoked without arguments inside
//! a project that always runs the same program.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.exerun.toml` in current directory or ancestors
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `<config dir>/exerun/config.toml`
//! 3. Default values defined in the code
//!
//! Paths are expanded (`~` to home directory) and the merged result is
//! validated before use. Command-line arguments and `EXERUN_EXECUTABLE`
//! override anything loaded here; that precedence is applied by the command
//! handlers.
//!
//! ## Examples
//!
//! ```toml
//! # .exerun.toml
//! [runner]
//! default_executable = "./print.exe"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! if let Some(path) = cfg.runner.default_executable.as_deref() {
//!     println!("default target: {}", path);
//! }
//! ```
//!
use crate::core::error::{ExerunError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Settings for the process runner (`exerun run`, `exerun status`).
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Executable to run when no PATH argument or EXERUN_EXECUTABLE is given.
    /// May use `~`; it is expanded after loading.
    pub default_executable: Option<String>,
}

const PROJECT_CONFIG_FILENAME: &str = ".exerun.toml";

/// Loads, merges, expands, and validates the configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "exerun", "exerun") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.exerun.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.exerun.toml`.
/// Stops early at a repository root (a directory holding `.git`).
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        runner: RunnerConfig {
            default_executable: project_cfg
                .runner
                .default_executable
                .or(user.runner.default_executable),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(exe) = config.runner.default_executable.as_mut() {
        *exe = shellexpand::tilde(exe.as_str()).into_owned();
        debug!("Expanded default executable: {}", exe);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(exe) = &config.runner.default_executable {
        if exe.trim().is_empty() {
            return Err(anyhow!(ExerunError::Config(
                "runner.default_executable cannot be empty.".to_string()
            )));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

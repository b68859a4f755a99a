//! # exerun Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the command
//! handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types for runs and for the wrapper itself
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ExerunError, Result, RunError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;

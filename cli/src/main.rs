//! # exerun Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the exerun CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Exit Status
//!
//! The outcome of the executed program (its exit code, or a failure to run
//! it at all) is reported as text on stdout and never changes exerun's own
//! exit status. exerun exits non-zero only when it cannot do its job: invalid
//! usage (clap, status `2`), or no executable configured / an unreadable
//! configuration file (status `1`).
//!
//! ## Examples
//!
//! ```bash
//! # Full report
//! exerun run ./print.exe
//!
//! # Exit code only, with debug logging on stderr
//! exerun -vv status ./output.exe
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (run, status)
mod common; // Process execution and report rendering
mod core; // Errors and configuration

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "exerun",
    about = "Run an executable and report its exit code and output",
    long_about = "Runs an executable to completion, capturing its exit code, standard output,\n\
                  and standard error, and prints them as a labeled report.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "r")]
    Run(commands::run::RunArgs),
    #[command(alias = "s")]
    Status(commands::status::StatusArgs),
}

/// Maps the `-v` count to a default log level. `RUST_LOG`, when set, wins.
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose)));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args).await,
        Commands::Status(args) => commands::status::handle_status(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

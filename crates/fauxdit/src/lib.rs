//! # fauxdit
//!
//! **CLI Binary**
//!
//! Entry point for the `fauxdit` command-line application. Parses arguments,
//! dispatches to command handlers, and owns error formatting and exit codes.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

pub mod commands;

use anyhow::{Error, Result};
use clap::{Parser, Subcommand};

/// `fauxdit` — synthetic code-analysis reports for pipelines that need one.
///
/// Produces a structurally complete security/quality report for any path
/// without running a real analysis backend.
#[derive(Parser, Debug)]
#[command(name = "fauxdit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the analysis pipeline against a source tree.
    Analyze(commands::analyze::AnalyzeArgs),
}

/// Entry point used by the `fauxdit` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => commands::analyze::handle(args),
    }
}

pub fn format_error(err: &Error) -> String {
    format!("Error: {err:#}")
}

//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: command handlers and their results
//! - `exit_status`: process exit codes
//! - `report`: cargo-style output

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{CommandSummary, InitSummary};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    let status = match result.summary {
        CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
        _ => ExitStatus::from_error_count(result.error_count),
    };
    Ok(status.into())
}

use std::path::Path;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init},
};

/// Dispatch to the command handler. `serve` is handled in `main`.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(Path::new(".")),
        Some(Command::Serve) => bail!("Serve command should be handled before run()"),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

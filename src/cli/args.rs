//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report negative arbitrary value class names
//! - `init`: Write a default `.twcheckrc.json`
//! - `serve`: Start the MCP server on stdio

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Print help and return `None` when no command was given.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rule options; each one overrides the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct RuleArgs {
    /// Function whose arguments are checked (repeatable, replaces `callees`)
    #[arg(long = "callee", value_name = "NAME")]
    pub callees: Vec<String>,

    /// Template tag whose body is checked (repeatable, replaces `tags`)
    #[arg(long = "tag", value_name = "NAME")]
    pub tags: Vec<String>,

    /// Variant separator (replaces the separator from `config`)
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Do not check class attributes, only callees and tags
    #[arg(long)]
    pub skip_class_attribute: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub rules: RuleArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for negative arbitrary value class names such as `-top-[1px]`
    Check(CheckCommand),
    /// Initialize a new .twcheckrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}

//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing through `out`.
    fn execute(&self, out: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &Output) -> Result<CommandResult> {
        match &cli.command {
            Commands::Harvest(args) => {
                let cmd = super::harvest::HarvestCommand::new(args.clone());
                cmd.execute(out)
            }
            Commands::Stats(args) => {
                let cmd = super::stats::StatsCommand::new(args.clone());
                cmd.execute(out)
            }
            Commands::Tags(args) => {
                let cmd = super::tags::TagsCommand::new(args.clone());
                cmd.execute(out)
            }
        }
    }
}

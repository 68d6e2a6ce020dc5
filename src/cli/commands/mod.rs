//! Subcommand implementations.

pub mod dispatcher;
pub mod harvest;
pub mod stats;
pub mod tags;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

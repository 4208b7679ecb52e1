//! Command-line interface for compat-gate.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, DetectArgs, PolicyArgs};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};

//! Command-line interface for snapredact.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ScanArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, ScanCommand, ScanSettings};

//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`]; scanning is the default when no
//! subcommand is given.

pub mod completions;
pub mod dispatcher;
pub mod scan;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use scan::{ScanCommand, ScanSettings};

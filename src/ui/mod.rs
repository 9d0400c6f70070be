//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing the report to stdout and diagnostics to stderr
//! - [`MockUI`] capturing output for tests
//!
//! Report lines go through [`UserInterface::message`] unstyled so scripts
//! can parse them.

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, RedactTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain line on standard output.
    fn message(&mut self, msg: &str);

    /// Display an error.
    fn error(&mut self, msg: &str);
}

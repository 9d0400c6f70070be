//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, RedactTheme, UserInterface};

/// Terminal UI implementation.
///
/// Messages go to stdout; errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: RedactTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            RedactTheme::new()
        } else {
            RedactTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

//! Visual theme and styling.

use console::Style;

/// Styles for diagnostics.
#[derive(Debug, Clone)]
pub struct RedactTheme {
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for RedactTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RedactTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled for diagnostics.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

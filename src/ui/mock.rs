//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use snapredact::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("files_scanned=0");
//! ui.error("boom");
//!
//! assert_eq!(ui.messages(), ["files_scanned=0"]);
//! assert!(ui.has_error("boom"));
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if any captured message contains `text`.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// Check if any captured error contains `text`.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

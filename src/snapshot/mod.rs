//! Snapshot documents: locating environment entries and redacting them.
//!
//! - [`locator`] - Finds `spec.template.spec.containers[*].env[*]` entries
//! - [`redact`] - Masks qualifying entries in memory
//! - [`io`] - Reads and writes snapshot files

pub mod io;
pub mod locator;
pub mod redact;

pub use io::{load_document, render_document, save_document};
pub use locator::{env_entries, env_entries_mut};
pub use redact::{canonical_string, redact_document, scan_document, Hit, RedactionOutcome};

//! snapredact - Mask sensitive environment values in service snapshots.
//!
//! snapredact walks a tree of captured Cloud Run `describe` snapshots
//! (`<root>/<date>/run/<service>/describes/*.json`) and replaces the values
//! of sensitive environment variables with `"REDACTED"`, so the snapshots
//! can be committed or shared.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.snapredact.yml` configuration
//! - [`error`] - Error types and result aliases
//! - [`scan`] - File discovery, the scan loop and its report
//! - [`secrets`] - Sensitive-name policy and value masking
//! - [`snapshot`] - Environment entry lookup and in-memory redaction
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use serde_json::json;
//! use snapredact::secrets::SensitivityPolicy;
//! use snapredact::snapshot::redact_document;
//!
//! let mut doc = json!({"spec": {"template": {"spec": {"containers": [{"env": [
//!     {"name": "API_KEY", "value": "xyz"},
//!     {"name": "PORT", "value": "8080"},
//!     {"name": "AUTHOR", "value": "jdoe"},
//! ]}]}}}});
//!
//! let outcome = redact_document(&mut doc, Path::new("api.json"), &SensitivityPolicy::default());
//! let names: Vec<_> = outcome.hits.iter().map(|h| h.name.as_str()).collect();
//! assert_eq!(names, ["API_KEY", "AUTHOR"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod scan;
pub mod secrets;
pub mod snapshot;
pub mod ui;

pub use error::{RedactError, Result};

//! Secret detection and masking.
//!
//! This module decides which environment entries are sensitive and masks
//! their values:
//!
//! - [`SensitivityPolicy`] - Classifies entries by name and value
//! - [`SENSITIVE_TOKENS`] - Substrings that mark a name as sensitive
//! - [`DEFAULT_EXPLICIT`] - Names that are always redacted
//! - [`REDACTED`] - The sentinel written over masked values
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use snapredact::secrets::{mask_entry, SensitivityPolicy, REDACTED};
//!
//! let policy = SensitivityPolicy::with_builtins();
//! let mut entry = json!({"name": "OPENAI_API_KEY", "value": "sk-live"});
//! let entry = entry.as_object_mut().unwrap();
//!
//! assert!(policy.qualifies(entry));
//! mask_entry(entry);
//! assert_eq!(entry["value"], REDACTED);
//! assert!(!policy.qualifies(entry));
//! ```

pub mod mask;
pub mod pattern;

pub use mask::{mask_entry, needs_masking, REDACTED};
pub use pattern::{
    entry_name, parse_explicit_list, SensitivityPolicy, DEFAULT_EXPLICIT, SENSITIVE_TOKENS,
};

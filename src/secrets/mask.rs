//! Value masking for environment entries.

use serde_json::{Map, Value};

/// The string written in place of a redacted value.
pub const REDACTED: &str = "REDACTED";

/// Check whether a value still holds something worth masking.
///
/// `null`, the empty string and the sentinel itself are left alone so that
/// repeated runs neither rewrite nor re-count them.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use snapredact::secrets::needs_masking;
///
/// assert!(needs_masking(&json!("hunter2")));
/// assert!(needs_masking(&json!(1234)));
/// assert!(!needs_masking(&json!("REDACTED")));
/// assert!(!needs_masking(&json!("")));
/// assert!(!needs_masking(&json!(null)));
/// ```
pub fn needs_masking(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty() && s != REDACTED,
        _ => true,
    }
}

/// Replace the entry's `value` with [`REDACTED`].
///
/// Returns `true` if the stored value actually changed. Entries without a
/// `value` key are not touched.
pub fn mask_entry(entry: &mut Map<String, Value>) -> bool {
    match entry.get_mut("value") {
        Some(value) if value.as_str() != Some(REDACTED) => {
            *value = Value::String(REDACTED.to_string());
            true
        }
        _ => false,
    }
}

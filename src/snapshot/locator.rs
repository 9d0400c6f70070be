//! Environment entry lookup.
//!
//! Snapshots come from heterogeneous captures, so every step of the path
//! `spec.template.spec.containers[*].env[*]` is checked for shape. Any
//! mismatch yields no entries instead of an error.

use serde_json::{Map, Value};

fn containers(doc: &Value) -> Option<&Vec<Value>> {
    doc.get("spec")?
        .get("template")?
        .get("spec")?
        .get("containers")?
        .as_array()
}

fn containers_mut(doc: &mut Value) -> Option<&mut Vec<Value>> {
    doc.get_mut("spec")?
        .get_mut("template")?
        .get_mut("spec")?
        .get_mut("containers")?
        .as_array_mut()
}

/// All environment entries of all containers, in document order.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use snapredact::snapshot::env_entries;
///
/// let doc = json!({
///     "spec": {"template": {"spec": {"containers": [
///         {"env": [{"name": "PORT", "value": "8080"}, "stray"]},
///         {"image": "gcr.io/app"},
///     ]}}}
/// });
///
/// let entries = env_entries(&doc);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0]["name"], "PORT");
///
/// assert!(env_entries(&json!({"kind": "Service"})).is_empty());
/// ```
pub fn env_entries(doc: &Value) -> Vec<&Map<String, Value>> {
    let Some(containers) = containers(doc) else {
        return Vec::new();
    };

    containers
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|container| container.get("env")?.as_array())
        .flatten()
        .filter_map(Value::as_object)
        .collect()
}

/// Mutable counterpart of [`env_entries`].
pub fn env_entries_mut(doc: &mut Value) -> Vec<&mut Map<String, Value>> {
    let Some(containers) = containers_mut(doc) else {
        return Vec::new();
    };

    containers
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .filter_map(|container| container.get_mut("env")?.as_array_mut())
        .flatten()
        .filter_map(Value::as_object_mut)
        .collect()
}

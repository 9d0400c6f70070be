//! In-memory redaction of a snapshot document.
//!
//! Nothing here touches the filesystem; callers load and persist documents
//! through [`crate::snapshot::io`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::secrets::{mask_entry, SensitivityPolicy};

use super::locator::{env_entries, env_entries_mut};

/// One redacted (or, in a dry run, redactable) variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    /// Snapshot the variable was found in.
    #[serde(rename = "path")]
    pub source: PathBuf,
    /// Variable name.
    pub name: String,
}

impl Hit {
    /// Create a hit for `name` found in `source`.
    pub fn new(source: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
        }
    }
}

/// Result of [`redact_document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionOutcome {
    /// Whether the document differs from its original content.
    pub changed: bool,
    /// Redacted variables in traversal order. Empty when `changed` is false.
    pub hits: Vec<Hit>,
}

/// Report the variables [`redact_document`] would mask, without mutating.
pub fn scan_document(doc: &Value, source: &Path, policy: &SensitivityPolicy) -> Vec<Hit> {
    env_entries(doc)
        .into_iter()
        .filter_map(|entry| policy.qualifying_name(entry))
        .map(|name| Hit::new(source, name))
        .collect()
}

/// Mask every qualifying environment value in `doc`.
///
/// The document only counts as changed if its canonical form differs
/// before and after masking.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use serde_json::json;
/// use snapredact::secrets::SensitivityPolicy;
/// use snapredact::snapshot::redact_document;
///
/// let mut doc = json!({"spec": {"template": {"spec": {"containers": [
///     {"env": [{"name": "API_KEY", "value": "xyz"}, {"name": "PORT", "value": "8080"}]}
/// ]}}}});
/// let policy = SensitivityPolicy::with_builtins();
///
/// let first = redact_document(&mut doc, Path::new("svc.json"), &policy);
/// assert!(first.changed);
/// assert_eq!(first.hits.len(), 1);
///
/// let second = redact_document(&mut doc, Path::new("svc.json"), &policy);
/// assert!(!second.changed);
/// assert!(second.hits.is_empty());
/// ```
pub fn redact_document(
    doc: &mut Value,
    source: &Path,
    policy: &SensitivityPolicy,
) -> RedactionOutcome {
    let before = canonical_string(doc);

    let mut hits = Vec::new();
    for entry in env_entries_mut(doc) {
        if let Some(name) = policy.qualifying_name(entry) {
            mask_entry(entry);
            hits.push(Hit::new(source, name));
        }
    }

    if hits.is_empty() || canonical_string(doc) == before {
        return RedactionOutcome::default();
    }

    RedactionOutcome {
        changed: true,
        hits,
    }
}

/// Serialize with object keys sorted at every level.
pub fn canonical_string(value: &Value) -> String {
    canonicalize(value).to_string()
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), canonicalize(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service(env: Value) -> Value {
        json!({
            "kind": "Service",
            "metadata": {"name": "api", "labels": {"team": "platform"}},
            "spec": {"template": {"spec": {"containers": [
                {"image": "gcr.io/acme/api:1.2.3", "env": env}
            ]}}}
        })
    }

    fn env_value(doc: &Value, index: usize) -> &Value {
        &doc["spec"]["template"]["spec"]["containers"][0]["env"][index]["value"]
    }

    fn source() -> &'static Path {
        Path::new("ops/snapshots/2026-01-18/run/api/describes/api.json")
    }

    #[test]
    fn redacts_pattern_and_explicit_names_only() {
        let mut doc = service(json!([
            {"name": "API_KEY", "value": "xyz"},
            {"name": "PORT", "value": "8080"},
            {"name": "AUTHOR", "value": "jdoe"}
        ]));
        let policy = SensitivityPolicy::with_builtins();

        let outcome = redact_document(&mut doc, source(), &policy);

        assert!(outcome.changed);
        assert_eq!(
            outcome.hits,
            vec![Hit::new(source(), "API_KEY"), Hit::new(source(), "AUTHOR")]
        );
        assert_eq!(env_value(&doc, 0), &json!("REDACTED"));
        assert_eq!(env_value(&doc, 1), &json!("8080"));
        assert_eq!(env_value(&doc, 2), &json!("REDACTED"));
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let mut doc = service(json!([
            {"name": "DB_PASSWORD", "value": "pw"},
            {"name": "LOG_LEVEL", "value": "info"}
        ]));
        let policy = SensitivityPolicy::with_builtins();

        redact_document(&mut doc, source(), &policy);
        let after_first = doc.clone();
        let second = redact_document(&mut doc, source(), &policy);

        assert_eq!(second, RedactionOutcome::default());
        assert_eq!(doc, after_first);
    }

    #[test]
    fn leaves_secret_references_alone() {
        let env = json!([
            {"name": "API_KEY", "valueFrom": {"secretKeyRef": {"key": "latest", "name": "api-key"}}}
        ]);
        let mut doc = service(env.clone());

        let outcome = redact_document(&mut doc, source(), &SensitivityPolicy::with_builtins());

        assert!(!outcome.changed);
        assert_eq!(doc, service(env));
    }

    #[test]
    fn already_scrubbed_document_is_unchanged() {
        let mut doc = service(json!([
            {"name": "API_KEY", "value": "REDACTED"},
            {"name": "SECRET_SALT", "value": ""},
            {"name": "TOKEN", "value": null}
        ]));
        let original = doc.clone();

        let outcome = redact_document(&mut doc, source(), &SensitivityPolicy::with_builtins());

        assert!(!outcome.changed);
        assert!(outcome.hits.is_empty());
        assert_eq!(doc, original);
    }

    #[test]
    fn custom_explicit_name_is_redacted() {
        let mut doc = service(json!([{"name": "DATABASE_URL", "value": "postgres://u:p@db/app"}]));
        let policy = SensitivityPolicy::with_builtins_and_custom(&["DATABASE_URL".to_string()]);

        let outcome = redact_document(&mut doc, source(), &policy);

        assert!(outcome.changed);
        assert_eq!(env_value(&doc, 0), &json!("REDACTED"));
    }

    #[test]
    fn unrelated_fields_are_preserved() {
        let mut doc = service(json!([{"name": "API_KEY", "value": "xyz"}]));

        redact_document(&mut doc, source(), &SensitivityPolicy::with_builtins());

        assert_eq!(doc["metadata"]["labels"]["team"], json!("platform"));
        assert_eq!(
            doc["spec"]["template"]["spec"]["containers"][0]["image"],
            json!("gcr.io/acme/api:1.2.3")
        );
        assert_eq!(
            doc["spec"]["template"]["spec"]["containers"][0]["env"][0]["name"],
            json!("API_KEY")
        );
    }

    #[test]
    fn scan_matches_redaction_hits_without_mutating() {
        let doc = service(json!([
            {"name": "API_KEY", "value": "xyz"},
            {"name": "PORT", "value": "8080"},
            {"name": "AUTHOR", "value": "jdoe"}
        ]));
        let policy = SensitivityPolicy::with_builtins();

        let scanned = scan_document(&doc, source(), &policy);
        let mut copy = doc.clone();
        let redacted = redact_document(&mut copy, source(), &policy);

        assert_eq!(scanned, redacted.hits);
        assert_eq!(env_value(&doc, 0), &json!("xyz"));
    }

    #[test]
    fn canonical_string_ignores_key_order() {
        let a: Value = serde_json::from_str(r#"{"b": 1, "a": {"d": 2, "c": [ {"y": 1, "x": 2} ]}}"#)
            .unwrap();
        let b: Value = serde_json::from_str(r#"{"a": {"c": [ {"x": 2, "y": 1} ], "d": 2}, "b": 1}"#)
            .unwrap();

        assert_eq!(canonical_string(&a), canonical_string(&b));
        assert_eq!(
            canonical_string(&a),
            r#"{"a":{"c":[{"x":2,"y":1}],"d":2},"b":1}"#
        );
    }

    #[test]
    fn hit_serializes_source_as_path() {
        let hit = Hit::new("a.json", "API_KEY");
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(json, json!({"path": "a.json", "name": "API_KEY"}));
    }
}

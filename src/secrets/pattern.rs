//! Sensitive-name classification.
//!
//! This module decides which environment entries carry secrets, by matching
//! their names against an explicit allow-list and a substring pattern.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::mask::needs_masking;

/// Tokens that mark an environment variable name as sensitive.
///
/// Matching is case-insensitive and unanchored, so `AUTHOR` matches via
/// `AUTH` and `monkey_bars` matches via `KEY`.
pub const SENSITIVE_TOKENS: &[&str] = &[
    "KEY", "TOKEN", "SECRET", "PASSWORD", "PRIVATE", "BEARER", "AUTH",
];

/// Names that are always redacted, even if they match no token.
pub const DEFAULT_EXPLICIT: &[&str] = &[
    "API_KEY",
    "API_PROXY_TOKEN",
    "FIREBASE_WEB_API_KEY",
    "ADMIN_API_KEY",
    "GOOGLE_API_KEY",
    "API_TOKEN",
    "FIREBASE_CONFIG",
    "ANTHROPIC_API_KEY",
    "OPENAI_API_KEY",
    "MISTRAL_API_KEY",
];

static SENSITIVE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)({})", SENSITIVE_TOKENS.join("|")))
        .expect("sensitive token alternation is a valid regex")
});

/// Decides whether an environment entry should be redacted.
///
/// The policy is the union of the built-in explicit names, any
/// caller-supplied names, and the [`SENSITIVE_TOKENS`] pattern.
///
/// # Example
///
/// ```
/// use snapredact::secrets::SensitivityPolicy;
///
/// let policy = SensitivityPolicy::with_builtins();
///
/// assert!(policy.is_sensitive_name("API_KEY"));
/// assert!(policy.is_sensitive_name("db_password"));
/// assert!(policy.is_sensitive_name("AUTHOR"));
///
/// assert!(!policy.is_sensitive_name("PORT"));
/// assert!(!policy.is_sensitive_name(""));
/// ```
#[derive(Debug, Clone)]
pub struct SensitivityPolicy {
    explicit: BTreeSet<String>,
    pattern: Regex,
}

impl SensitivityPolicy {
    /// Create a policy with the built-in explicit names and the token pattern.
    pub fn with_builtins() -> Self {
        Self::new(DEFAULT_EXPLICIT.iter().copied())
    }

    /// Create a policy with the token pattern and only the given explicit names.
    pub fn new(explicit: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            explicit: explicit.into_iter().map(Into::into).collect(),
            pattern: SENSITIVE_NAME_RE.clone(),
        }
    }

    /// Create a policy with built-in names plus custom exact matches.
    ///
    /// # Example
    ///
    /// ```
    /// use snapredact::secrets::SensitivityPolicy;
    ///
    /// let custom = vec!["DATABASE_URL".to_string()];
    /// let policy = SensitivityPolicy::with_builtins_and_custom(&custom);
    ///
    /// assert!(policy.is_sensitive_name("DATABASE_URL"));
    /// assert!(policy.is_sensitive_name("API_KEY"));
    /// ```
    pub fn with_builtins_and_custom(custom_names: &[String]) -> Self {
        let mut policy = Self::with_builtins();
        policy.add_explicit_names(custom_names.iter().cloned());
        policy
    }

    /// Add one explicit name. Blank names are ignored.
    pub fn add_explicit(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.explicit.insert(name);
        }
    }

    /// Add several explicit names.
    pub fn add_explicit_names(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        for name in names {
            self.add_explicit(name);
        }
    }

    /// Case-sensitive membership in the explicit set.
    pub fn is_explicit(&self, name: &str) -> bool {
        self.explicit.contains(name)
    }

    /// Explicit names in sorted order.
    pub fn explicit_names(&self) -> impl Iterator<Item = &str> {
        self.explicit.iter().map(String::as_str)
    }

    /// Check whether a variable name is sensitive, ignoring its value.
    pub fn is_sensitive_name(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.is_explicit(name) || self.pattern.is_match(name)
    }

    /// Return the entry's name if the entry should be redacted.
    ///
    /// An entry qualifies only when it has a non-empty name, a `value` key,
    /// and a value that is not `null`, `""` or already the sentinel.
    pub fn qualifying_name(&self, entry: &Map<String, Value>) -> Option<String> {
        let name = entry_name(entry);
        if name.is_empty() {
            return None;
        }
        let value = entry.get("value")?;
        if !needs_masking(value) {
            return None;
        }
        self.is_sensitive_name(&name).then_some(name)
    }

    /// Check whether an environment entry should be redacted.
    pub fn qualifies(&self, entry: &Map<String, Value>) -> bool {
        self.qualifying_name(entry).is_some()
    }
}

impl Default for SensitivityPolicy {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// The entry's name as text.
///
/// Falsy names (`null`, `false`, zero, empty containers) read as empty.
/// Other non-string names read as their compact JSON text.
pub fn entry_name(entry: &Map<String, Value>) -> String {
    match entry.get("name") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Array(items)) if items.is_empty() => String::new(),
        Some(Value::Object(map)) if map.is_empty() => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Split a comma-separated list of names, trimming each and dropping blanks.
///
/// # Example
///
/// ```
/// use snapredact::secrets::parse_explicit_list;
///
/// assert_eq!(
///     parse_explicit_list(" DATABASE_URL, ,SENTRY_DSN "),
///     vec!["DATABASE_URL".to_string(), "SENTRY_DSN".to_string()]
/// );
/// ```
pub fn parse_explicit_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

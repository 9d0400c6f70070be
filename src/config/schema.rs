//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Contents of a `.snapredact.yml` file.
///
/// Every field is optional; command-line flags take precedence.
///
/// # Example
///
/// ```
/// use snapredact::config::SnapredactConfig;
///
/// let yaml = r#"
/// root: captures/snapshots
/// explicit:
///   - DATABASE_URL
///   - SENTRY_DSN
/// sample_limit: 50
/// "#;
///
/// let config: SnapredactConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.explicit.len(), 2);
/// assert_eq!(config.sample_limit, Some(50));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapredactConfig {
    /// Folder containing dated snapshot folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Extra variable names that are always redacted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub explicit: Vec<String>,

    /// Maximum number of sample lines in the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_limit: Option<usize>,
}

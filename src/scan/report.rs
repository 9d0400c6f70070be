//! Scan totals and their rendering.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::snapshot::Hit;

/// Default number of `(path, name)` samples kept in a report.
pub const DEFAULT_SAMPLE_LIMIT: usize = 200;

/// Totals for one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Files matched by discovery, including ones that failed to parse.
    pub files_scanned: usize,
    /// Files rewritten on disk. Always zero in a dry run.
    pub files_changed: usize,
    /// Values masked (or that would be masked, in a dry run).
    pub redacted_values: usize,
    /// Whether files were left untouched.
    pub dry_run: bool,
    /// First hits in processing order, capped at the sample limit.
    pub samples: Vec<Hit>,
    /// Files that needed redaction but could not be written.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files_failed: Vec<PathBuf>,
    #[serde(skip)]
    sample_limit: usize,
}

impl ScanReport {
    /// Create an empty report.
    pub fn new(dry_run: bool, sample_limit: usize) -> Self {
        Self {
            files_scanned: 0,
            files_changed: 0,
            redacted_values: 0,
            dry_run,
            samples: Vec::new(),
            files_failed: Vec::new(),
            sample_limit,
        }
    }

    /// Count hits and keep as many as fit under the sample limit.
    pub fn record_hits(&mut self, hits: Vec<Hit>) {
        self.redacted_values += hits.len();
        let room = self.sample_limit.saturating_sub(self.samples.len());
        self.samples.extend(hits.into_iter().take(room));
    }

    /// Whether any file could not be written.
    pub fn has_failures(&self) -> bool {
        !self.files_failed.is_empty()
    }

    /// Line-oriented report with stable prefixes.
    ///
    /// # Example
    ///
    /// ```
    /// use snapredact::scan::ScanReport;
    /// use snapredact::snapshot::Hit;
    ///
    /// let mut report = ScanReport::new(true, 200);
    /// report.files_scanned = 3;
    /// report.record_hits(vec![Hit::new("a.json", "API_KEY")]);
    ///
    /// assert_eq!(
    ///     report.render_lines(),
    ///     vec![
    ///         "files_scanned=3",
    ///         "files_changed=0 (dry-run)",
    ///         "redacted_values=1",
    ///         "a.json\tAPI_KEY",
    ///     ]
    /// );
    /// ```
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3 + self.samples.len());
        lines.push(format!("files_scanned={}", self.files_scanned));
        if self.dry_run {
            lines.push("files_changed=0 (dry-run)".to_string());
        } else {
            lines.push(format!("files_changed={}", self.files_changed));
        }
        lines.push(format!("redacted_values={}", self.redacted_values));
        for hit in &self.samples {
            lines.push(format!("{}\t{}", hit.source.display(), hit.name));
        }
        lines
    }

    /// Pretty JSON rendering of the report.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ScanReport {
    fn default() -> Self {
        Self::new(false, DEFAULT_SAMPLE_LIMIT)
    }
}

//! The scan loop: discover, redact, report.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::secrets::SensitivityPolicy;
use crate::snapshot::{load_document, redact_document, save_document, scan_document};

use super::discovery::{discover, ensure_root_readable, snapshot_pattern, DEFAULT_ROOT};
use super::report::{ScanReport, DEFAULT_SAMPLE_LIMIT};

/// Options for a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Folder containing dated snapshot folders.
    pub root: PathBuf,
    /// Restrict the scan to one snapshot folder.
    pub snapshot: Option<String>,
    /// Report without writing.
    pub dry_run: bool,
    /// Maximum number of sample hits kept in the report.
    pub sample_limit: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            snapshot: None,
            dry_run: false,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

/// How a scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The discovery pattern matched nothing.
    NoFiles { pattern: String },
    /// At least one file was processed.
    Completed(ScanReport),
}

/// Runs the redaction policy over a snapshot tree.
///
/// # Example
///
/// ```no_run
/// use snapredact::scan::{ScanOptions, ScanOutcome, Scanner};
/// use snapredact::secrets::SensitivityPolicy;
///
/// let scanner = Scanner::new(SensitivityPolicy::with_builtins());
/// let options = ScanOptions { dry_run: true, ..Default::default() };
///
/// if let ScanOutcome::Completed(report) = scanner.run(&options)? {
///     println!("{} values would be redacted", report.redacted_values);
/// }
/// # Ok::<(), snapredact::RedactError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    policy: SensitivityPolicy,
}

impl Scanner {
    /// Create a scanner applying `policy`.
    pub fn new(policy: SensitivityPolicy) -> Self {
        Self { policy }
    }

    /// The policy this scanner applies.
    pub fn policy(&self) -> &SensitivityPolicy {
        &self.policy
    }

    /// Discover snapshot files under `options.root` and process them.
    pub fn run(&self, options: &ScanOptions) -> Result<ScanOutcome> {
        ensure_root_readable(&options.root)?;

        let pattern = snapshot_pattern(&options.root, options.snapshot.as_deref());
        let files = discover(&pattern)?;
        debug!("Pattern {} matched {} files", pattern, files.len());

        if files.is_empty() {
            return Ok(ScanOutcome::NoFiles { pattern });
        }

        Ok(ScanOutcome::Completed(self.process_files(&files, options)))
    }

    /// Process an explicit list of files in the given order.
    ///
    /// Unreadable, malformed and non-object files are counted as scanned
    /// and otherwise skipped. A failed write is recorded and the loop
    /// continues with the next file.
    pub fn process_files(&self, files: &[PathBuf], options: &ScanOptions) -> ScanReport {
        let mut report = ScanReport::new(options.dry_run, options.sample_limit);

        for path in files {
            report.files_scanned += 1;

            let Some(mut doc) = load_object(path) else {
                continue;
            };

            if options.dry_run {
                report.record_hits(scan_document(&doc, path, &self.policy));
                continue;
            }

            let outcome = redact_document(&mut doc, path, &self.policy);
            if !outcome.changed {
                continue;
            }

            match save_document(path, &doc) {
                Ok(()) => {
                    debug!("Redacted {} values in {}", outcome.hits.len(), path.display());
                    report.files_changed += 1;
                    report.record_hits(outcome.hits);
                }
                Err(e) => {
                    error!("{}", e);
                    report.files_failed.push(path.clone());
                }
            }
        }

        info!(
            "Scanned {} files, changed {}, redacted {} values",
            report.files_scanned, report.files_changed, report.redacted_values
        );
        report
    }
}

fn load_object(path: &Path) -> Option<Value> {
    match load_document(path) {
        Ok(doc) if doc.is_object() => Some(doc),
        Ok(_) => {
            debug!("Skipping {}: top-level value is not an object", path.display());
            None
        }
        Err(e) => {
            debug!("Skipping {}: {}", path.display(), e);
            None
        }
    }
}

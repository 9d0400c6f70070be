//! Snapshot tree scanning.
//!
//! - [`discovery`] - Builds the glob and lists snapshot files
//! - [`scanner`] - Loads, redacts and persists each file
//! - [`report`] - Totals and samples for the run

pub mod discovery;
pub mod report;
pub mod scanner;

pub use discovery::{discover, ensure_root_readable, snapshot_pattern, DEFAULT_ROOT};
pub use report::{ScanReport, DEFAULT_SAMPLE_LIMIT};
pub use scanner::{ScanOptions, ScanOutcome, Scanner};

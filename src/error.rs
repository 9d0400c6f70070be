//! Error types for snapredact operations.
//!
//! This module defines [`RedactError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Malformed snapshots are not errors: the scanner skips them and moves on
//! - Use `RedactError` for conditions that stop a run or need a non-zero exit
//! - Use `anyhow::Error` (via `RedactError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for snapredact operations.
#[derive(Debug, Error)]
pub enum RedactError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The snapshot root exists but cannot be listed.
    #[error("Cannot read snapshot root {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The discovery pattern is not a valid glob.
    #[error("Invalid snapshot pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A redacted snapshot could not be written back.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for snapredact operations.
pub type Result<T> = std::result::Result<T, RedactError>;

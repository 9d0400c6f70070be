//! Loading and saving snapshot files.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{RedactError, Result};

/// Read and parse a snapshot file.
///
/// Any JSON value is returned; callers decide whether a non-object top
/// level is acceptable.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Render a document the way snapshots are stored on disk.
///
/// Two-space indentation, non-ASCII left unescaped, exactly one trailing
/// newline. Key order follows the document.
pub fn render_document(doc: &Value) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(doc)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Overwrite `path` with the rendered document.
pub fn save_document(path: &Path, doc: &Value) -> Result<()> {
    let rendered = render_document(doc)?;
    fs::write(path, rendered).map_err(|source| RedactError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

//! Configuration file discovery and loading.

use crate::config::schema::SnapredactConfig;
use crate::error::{RedactError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".snapredact.yml";

/// Find `.snapredact.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<SnapredactConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RedactError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RedactError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config. Blank content is the default config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<SnapredactConfig> {
    if content.trim().is_empty() {
        return Ok(SnapredactConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| RedactError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit `config_override` must exist. Otherwise `.snapredact.yml`
/// in `working_dir` is used if present, and defaults apply if not.
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<SnapredactConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match find_config(working_dir) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(SnapredactConfig::default()),
    }
}

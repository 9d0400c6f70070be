//! Configuration loading.
//!
//! An optional `.snapredact.yml` in the working directory (or a file given
//! with `--config`) supplies defaults for the snapshot root, extra explicit
//! names and the report sample limit.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::SnapredactConfig;

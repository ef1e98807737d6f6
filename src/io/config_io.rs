use std::fs;
use std::io;
use std::path::Path;

use crate::model::WorkspaceConfig;

/// Workspace config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "taskdeck.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load taskdeck.toml from `dir`. A missing file is not an error — defaults
/// apply; a malformed file is.
pub fn load_config(dir: &Path) -> Result<WorkspaceConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(WorkspaceConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

//! Config loading from disk.

use std::path::Path;

use tracing::info;
use wincache_common::ConfigError;

use super::paths::{create_default_config, default_config_path};
use crate::schema::WincacheConfig;

/// Load config from a specific TOML file path.
///
/// Missing fields are filled from serde defaults. Validation is left to
/// the caller.
pub fn load_from_path(path: &Path) -> Result<WincacheConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: WincacheConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/wincache/config.toml`
/// On Linux: `~/.config/wincache/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<WincacheConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(WincacheConfig::default());
    }

    load_from_path(&path)
}

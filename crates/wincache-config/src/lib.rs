//! wincache configuration.
//!
//! TOML config declaring the registry's close policy, logging, and the
//! windows to create at startup. All sections use serde defaults so partial
//! configs work.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LogLevel, LoggingConfig, RegistryConfig, WincacheConfig, WindowSpec};

use std::path::Path;

use wincache_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<WincacheConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<WincacheConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

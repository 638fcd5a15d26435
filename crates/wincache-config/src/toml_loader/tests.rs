//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

use wincache_common::{CloseBehavior, ConfigError};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_wincache_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[registry]
close_behavior = "close"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.registry.close_behavior, CloseBehavior::Close);
    // Defaults preserved
    assert_eq!(config.windows.len(), 1);
    assert_eq!(config.windows[0].name, "main");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wincache").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.registry.close_behavior, CloseBehavior::Hide);
    assert_eq!(config.windows.len(), 1);
    assert!(config.windows[0].triggers_app_quit);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_wincache() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("wincache/config.toml"));
    }
}

//! Configuration schema types for wincache.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod registry;
mod windows;

pub use logging::*;
pub use registry::*;
pub use windows::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WincacheConfig {
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
    /// Windows created at startup, in order.
    pub windows: Vec<WindowSpec>,
}

impl Default for WincacheConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            logging: LoggingConfig::default(),
            windows: vec![WindowSpec::main()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wincache_common::CloseBehavior;

    #[test]
    fn default_config_has_main_window() {
        let config = WincacheConfig::default();
        assert_eq!(config.windows.len(), 1);
        assert_eq!(config.windows[0].name, "main");
        assert!(config.windows[0].triggers_app_quit);
        assert_eq!(config.registry.close_behavior, CloseBehavior::Hide);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: WincacheConfig = toml::from_str("").unwrap();
        assert_eq!(config.windows.len(), 1);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_overrides_sections() {
        let toml_str = r#"
[registry]
close_behavior = "close"

[[windows]]
name = "prefs"
title = "Preferences"
width = 480
visible = false
"#;
        let config: WincacheConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.registry.close_behavior, CloseBehavior::Close);
        assert_eq!(config.windows.len(), 1);

        let prefs = &config.windows[0];
        assert_eq!(prefs.name, "prefs");
        assert_eq!(prefs.options.title, "Preferences");
        assert_eq!(prefs.options.width, 480);
        assert!(!prefs.options.visible);
        // Defaults preserved
        assert_eq!(prefs.options.height, 600);
        assert!(!prefs.triggers_app_quit);
        assert!(prefs.url.is_none());
    }
}

//! Startup window declarations.

use serde::{Deserialize, Serialize};
use wincache_common::WindowOptions;

/// A window the host creates and registers at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Registry key.
    pub name: String,
    /// Page to load once the window exists.
    #[serde(default)]
    pub url: Option<String>,
    /// Closing this window quits the application.
    #[serde(default)]
    pub triggers_app_quit: bool,
    #[serde(flatten)]
    pub options: WindowOptions,
}

impl WindowSpec {
    /// The default main window: closing it quits.
    pub fn main() -> Self {
        Self {
            name: "main".into(),
            url: None,
            triggers_app_quit: true,
            options: WindowOptions::with_title("wincache"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_spec_requires_name() {
        let result: Result<WindowSpec, _> = toml::from_str(r#"title = "Nameless""#);
        assert!(result.is_err());
    }

    #[test]
    fn window_spec_flattens_options() {
        let spec: WindowSpec = toml::from_str(
            r#"
name = "about"
url = "https://example.com/about"
width = 320
height = 240
resizable = false
"#,
        )
        .unwrap();
        assert_eq!(spec.name, "about");
        assert_eq!(spec.url.as_deref(), Some("https://example.com/about"));
        assert_eq!(spec.options.width, 320);
        assert_eq!(spec.options.height, 240);
        assert!(!spec.options.resizable);
        assert!(spec.options.visible);
    }
}

//! Core value types shared by the registry, config, and host crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happens when the user closes a managed window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum CloseBehavior {
    /// Cancel the close and hide the window, keeping its state.
    #[default]
    Hide,
    /// Let the window be destroyed.
    Close,
}

impl CloseBehavior {
    /// Every recognized option, in config spelling.
    pub const ALL: [CloseBehavior; 2] = [CloseBehavior::Hide, CloseBehavior::Close];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hide => "hide",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for CloseBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloseBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| format!("unknown close behavior: {s}"))
    }
}

/// Lifecycle state of a managed window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WindowStatus {
    Open,
    Closed,
}

/// Opaque id of a native window, stable for the window's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleId(pub u64);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options handed to the host when creating a native window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowOptions {
    pub title: String,
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
    /// Show the window as soon as it is created.
    pub visible: bool,
    pub resizable: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "wincache".into(),
            width: 800,
            height: 600,
            visible: true,
            resizable: true,
        }
    }
}

impl WindowOptions {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_behavior_default_is_hide() {
        assert_eq!(CloseBehavior::default(), CloseBehavior::Hide);
    }

    #[test]
    fn close_behavior_parses_known_options() {
        assert_eq!("hide".parse::<CloseBehavior>(), Ok(CloseBehavior::Hide));
        assert_eq!("close".parse::<CloseBehavior>(), Ok(CloseBehavior::Close));
    }

    #[test]
    fn close_behavior_rejects_unknown_options() {
        assert!("minimize".parse::<CloseBehavior>().is_err());
        assert!("Hide".parse::<CloseBehavior>().is_err());
        assert!("".parse::<CloseBehavior>().is_err());
    }

    #[test]
    fn close_behavior_serialization() {
        let json = serde_json::to_string(&CloseBehavior::Close).unwrap();
        assert_eq!(json, "\"close\"");
        let parsed: CloseBehavior = serde_json::from_str("\"hide\"").unwrap();
        assert_eq!(parsed, CloseBehavior::Hide);
    }

    #[test]
    fn window_options_defaults() {
        let opts = WindowOptions::default();
        assert_eq!(opts.width, 800);
        assert_eq!(opts.height, 600);
        assert!(opts.visible);
        assert!(opts.resizable);
    }

    #[test]
    fn window_options_partial_json_keeps_defaults() {
        let opts: WindowOptions = serde_json::from_str(r#"{"title":"Prefs","width":400}"#).unwrap();
        assert_eq!(opts.title, "Prefs");
        assert_eq!(opts.width, 400);
        assert_eq!(opts.height, 600);
    }

    #[test]
    fn handle_id_display() {
        assert_eq!(HandleId(42).to_string(), "42");
    }
}

//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoped to the wincache crates.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Trace => "wincache=trace",
            Self::Debug => "wincache=debug",
            Self::Info => "wincache=info",
            Self::Warn => "wincache=warn",
            Self::Error => "wincache=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::Info.directive(), "wincache=info");
        assert_eq!(LogLevel::Trace.directive(), "wincache=trace");
    }

    #[test]
    fn log_level_from_toml() {
        let config: LoggingConfig = toml::from_str(r#"level = "debug""#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
    }
}

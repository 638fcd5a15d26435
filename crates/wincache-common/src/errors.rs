use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("window already exists: {0}")]
    AlreadyExists(String),

    #[error("window creation failed: {0}")]
    CreateFailed(String),

    #[error("failed to load url: {0}")]
    LoadFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WincacheError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("duplicate window name 'main'".into());
        assert_eq!(
            err.to_string(),
            "config validation error: duplicate window name 'main'"
        );
    }

    #[test]
    fn registry_error_display() {
        let err = RegistryError::AlreadyExists("settings".into());
        assert_eq!(err.to_string(), "window already exists: settings");

        let err = RegistryError::CreateFailed("no display".into());
        assert_eq!(err.to_string(), "window creation failed: no display");

        let err = RegistryError::LoadFailed("bad scheme".into());
        assert_eq!(err.to_string(), "failed to load url: bad scheme");
    }

    #[test]
    fn wincache_error_from_registry() {
        let err: WincacheError = RegistryError::AlreadyExists("main".into()).into();
        assert!(matches!(err, WincacheError::Registry(_)));
        assert!(err.to_string().contains("main"));
    }

    #[test]
    fn wincache_error_from_config() {
        let err: WincacheError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, WincacheError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn wincache_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WincacheError = io_err.into();
        assert!(matches!(err, WincacheError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}

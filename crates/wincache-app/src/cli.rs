use std::path::PathBuf;

use clap::Parser;

/// wincache: named native windows that hide instead of closing.
#[derive(Parser, Debug)]
#[command(name = "wincache", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Close behavior override ("hide" or "close").
    #[arg(long)]
    pub close_behavior: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "wincache",
            "--config",
            "/tmp/wincache.toml",
            "--log-level",
            "debug",
            "--close-behavior",
            "close",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/wincache.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.close_behavior.as_deref(), Some("close"));
    }

    #[test]
    fn all_flags_optional() {
        let args = Args::parse_from(["wincache"]);
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.close_behavior.is_none());
    }
}

//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};
use crate::{FORMAT_ENV, LEVEL_ENV};

impl Config {
    /// Create configuration from environment variables
    ///
    /// An unrecognized `RUNVAL_LOG_FORMAT` falls back to compact output.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // RUNVAL_LOG or RUST_LOG
        if let Some(level) = var(LEVEL_ENV).or_else(|| var("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = var(FORMAT_ENV) {
            config.format = format.parse().unwrap_or_default();
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Test configuration (no colors, no timestamps)
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_empty_environment_is_default() {
        assert_eq!(Config::from_vars(vars(&[])), Config::default());
    }

    #[test]
    fn test_runval_log_wins_over_rust_log() {
        let config = Config::from_vars(vars(&[
            ("RUNVAL_LOG", "runval_validator=trace"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.level, "runval_validator=trace");

        let config = Config::from_vars(vars(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn test_format_from_environment() {
        let config = Config::from_vars(vars(&[("RUNVAL_LOG_FORMAT", "json")]));
        assert_eq!(config.format, Format::Json);

        let config = Config::from_vars(vars(&[("RUNVAL_LOG_FORMAT", "xml")]));
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn test_presets() {
        let dev = Config::development();
        assert_eq!((dev.level.as_str(), dev.format), ("debug", Format::Pretty));
        assert!(dev.display.source);

        let prod = Config::production();
        assert_eq!((prod.level.as_str(), prod.format), ("info", Format::Json));
        assert!(!prod.display.colors);

        assert!(!Config::test().display.time);
    }
}

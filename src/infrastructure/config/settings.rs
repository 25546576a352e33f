//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from an optional TOML file; the bot token comes
//! from the environment only.
//!
//! # Example
//!
//! ```no_run
//! use kursbot::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::resolve(None)?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::telegram::{TelegramSettings, MAX_POLL_TIMEOUT_SECS};
use crate::error::{ConfigError, Result};

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Telegram update listener settings.
    #[serde(default)]
    pub telegram: TelegramSettings,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load an explicit path, or [`DEFAULT_CONFIG_PATH`] if it exists, or
    /// fall back to built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path cannot be loaded, or the default
    /// file exists but is invalid.
    #[allow(clippy::result_large_err)]
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Initialize the tracing subscriber from the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        if self.telegram.poll_timeout_secs == 0
            || self.telegram.poll_timeout_secs > MAX_POLL_TIMEOUT_SECS
        {
            return Err(ConfigError::InvalidValue {
                field: "telegram.poll_timeout_secs",
                reason: format!("must be between 1 and {MAX_POLL_TIMEOUT_SECS}"),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.telegram.poll_timeout_secs, 60);
        assert!(config.telegram.register_commands);
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse_toml(
            r#"
[logging]
level = "debug"
format = "json"

[telegram]
poll_timeout_secs = 30
register_commands = false
"#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.telegram.poll_timeout_secs, 30);
        assert!(!config.telegram.register_commands);
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_poll_timeout() {
        let result = Config::parse_toml("[telegram]\npoll_timeout_secs = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "telegram.poll_timeout_secs",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            Config::parse_toml("[logging"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let result = Config::resolve(Some(Path::new("/nonexistent/kursbot.toml")));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ReadFile(_)))
        ));
    }
}

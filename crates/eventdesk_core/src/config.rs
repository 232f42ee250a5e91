//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe logging settings and the initial notification preference.
//! - Load them from JSON with defaults for every missing field.
//!
//! # Invariants
//! - A validated config always carries a supported log level.
//! - `log_dir`, when present, is absolute.

use crate::logging::{default_log_level, init_logging, is_supported_level, LoggingError};
use crate::notify::scheduler::NotificationPreference;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Settings consumed by [`CoreConfig::init`] and `EventCatalog::from_config`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub log_level: String,
    /// File logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
    pub notification_preference: NotificationPreference,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            notification_preference: NotificationPreference::None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    UnsupportedLogLevel(String),
    RelativeLogDir(PathBuf),
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::UnsupportedLogLevel(level) => write!(f, "unsupported log level `{level}`"),
            Self::RelativeLogDir(path) => {
                write!(f, "log_dir must be absolute, got `{}`", path.display())
            }
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Logging(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_supported_level(&self.log_level) {
            return Err(ConfigError::UnsupportedLogLevel(self.log_level.clone()));
        }
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }
        Ok(())
    }

    /// Validates and starts file logging when `log_dir` is set.
    pub fn init(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(dir) = &self.log_dir {
            init_logging(&self.log_level, dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};
    use crate::notify::scheduler::NotificationPreference;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CoreConfig::from_json_str("{}").expect("defaults should validate");
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn reads_preference_in_snake_case() {
        let config = CoreConfig::from_json_str(r#"{"notification_preference":"weekly"}"#)
            .expect("weekly should parse");
        assert_eq!(config.notification_preference, NotificationPreference::Weekly);
    }

    #[test]
    fn rejects_relative_log_dir() {
        let err = CoreConfig::from_json_str(r#"{"log_dir":"logs"}"#).expect_err("relative dir");
        assert!(matches!(err, ConfigError::RelativeLogDir(_)));
    }

    #[test]
    fn rejects_unknown_level() {
        let err = CoreConfig::from_json_str(r#"{"log_level":"chatty"}"#).expect_err("bad level");
        assert!(matches!(err, ConfigError::UnsupportedLogLevel(_)));
    }
}

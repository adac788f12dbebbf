//! Environment-driven CLI configuration.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set but invalid values are errors.

use quizmaster_core::{default_log_level, LogSettings, LoggingError};
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "QUIZMASTER_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "QUIZMASTER_LOG_DIR";

/// Runtime settings for the `quizmaster` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log: LogSettings,
}

impl CliConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoggingError> {
        let level = lookup(LOG_LEVEL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_log_level().to_string());
        let dir = lookup(LOG_DIR_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(|value| PathBuf::from(value.trim()))
            .unwrap_or_else(default_log_dir);

        Ok(Self {
            log: LogSettings::new(&level, dir)?,
        })
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("quizmaster").join("logs")
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use quizmaster_core::default_log_level;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.log.level(), default_log_level());
        assert!(config.log.dir().ends_with("quizmaster/logs"));
    }

    #[test]
    fn explicit_values_are_used() {
        let dir = std::env::temp_dir().join("quizmaster-config-test");
        let dir_str = dir.to_str().unwrap();
        let config = CliConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_ENV, "ERROR"),
            (LOG_DIR_ENV, dir_str),
        ]))
        .unwrap();
        assert_eq!(config.log.level(), "error");
        assert_eq!(config.log.dir(), dir.as_path());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(CliConfig::from_lookup(lookup_from(&[(LOG_LEVEL_ENV, "chatty")])).is_err());
        assert!(CliConfig::from_lookup(lookup_from(&[(LOG_DIR_ENV, "relative/logs")])).is_err());
    }
}

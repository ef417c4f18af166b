// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Inspector configuration.
//!
//! Every setting has a default, so an empty file (or no file) is valid.

use odata_model::models::factory_for;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Inspector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InspectConfig {
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,

    /// Family used when `--type` is not given.
    #[serde(default = "default_type")]
    pub default_type: String,

    /// Expand nested models in decode reports.
    #[serde(default = "default_true")]
    pub show_nested: bool,

    /// Log level, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_type() -> String {
    "entity".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            default_type: default_type(),
            show_nested: true,
            log_level: default_log_level(),
        }
    }
}

impl InspectConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if factory_for(&self.default_type).is_none() {
            return Err(ConfigError::Invalid(format!(
                "Unknown default_type '{}'",
                self.default_type
            )));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Unknown log_level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_file_gives_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = InspectConfig::from_file(file.path()).unwrap();
        assert_eq!(config, InspectConfig::default());
        assert_eq!(config.default_type, "entity");
        assert!(config.show_nested);
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "pretty = true\ndefault_type = \"security.alert\"\nshow_nested = false\nlog_level = \"debug\""
        )
        .unwrap();

        let config = InspectConfig::from_file(file.path()).unwrap();
        assert!(config.pretty);
        assert!(!config.show_nested);
        assert_eq!(config.default_type, "security.alert");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn unknown_family_is_invalid() {
        let err = InspectConfig::from_toml("default_type = \"security.nothing\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("security.nothing"));
    }

    #[test]
    fn unknown_log_level_is_invalid() {
        let err = InspectConfig::from_toml("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let err = InspectConfig::from_toml("colour = true").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = InspectConfig::from_file("/nonexistent/odata-inspect.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn defaults_serialize_back() {
        let text = toml::to_string_pretty(&InspectConfig::default()).unwrap();
        assert_eq!(InspectConfig::from_toml(&text).unwrap(), InspectConfig::default());
    }
}

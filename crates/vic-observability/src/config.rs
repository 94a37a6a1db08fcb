//! Logging configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{ObservabilityError, Result};

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive such as `info` or `vic_llm=debug`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of text
    #[serde(default)]
    pub json_format: bool,

    /// Also write to this file
    #[serde(default)]
    pub file_path: Option<PathBuf>,

    /// Per-module level overrides
    #[serde(default)]
    pub module_levels: HashMap<String, String>,

    /// ANSI colors on stderr
    #[serde(default = "default_true")]
    pub ansi_colors: bool,

    /// Include the event target
    #[serde(default = "default_true")]
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
            file_path: None,
            module_levels: HashMap::new(),
            ansi_colors: true,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    /// Set the level directive
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Toggle JSON output
    pub fn with_json_format(mut self, json: bool) -> Self {
        self.json_format = json;
        self
    }

    /// Tee output into a file
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Override the level of one module
    pub fn with_module_level(mut self, module: impl Into<String>, level: impl Into<String>) -> Self {
        self.module_levels.insert(module.into(), level.into());
        self
    }

    /// Build from the `logging` section of the Vic config file
    pub fn from_vic(config: &vic_config::LoggingConfig) -> Result<Self> {
        let file_path = match &config.file {
            Some(path) => Some(vic_config::expand_tilde(path).ok_or_else(|| {
                ObservabilityError::config(format!("Cannot resolve log file path: {}", path))
            })?),
            None => None,
        };

        Ok(Self {
            level: config.level.as_str().to_string(),
            json_format: config.json,
            file_path,
            // HTTP client internals are noisy at debug
            module_levels: HashMap::from([
                ("hyper".to_string(), "warn".to_string()),
                ("reqwest".to_string(), "warn".to_string()),
            ]),
            ..Self::default()
        })
    }
}

fn default_log_level() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = LoggingConfig::default()
            .with_log_level("debug")
            .with_json_format(true)
            .with_module_level("vic_llm", "trace");

        assert_eq!(config.level, "debug");
        assert!(config.json_format);
        assert_eq!(config.module_levels.get("vic_llm"), Some(&"trace".to_string()));
    }

    #[test]
    fn test_from_vic_section() {
        let section = vic_config::LoggingConfig {
            level: vic_config::LogLevel::Warn,
            file: Some("/tmp/vic-test.log".to_string()),
            json: true,
        };
        let config = LoggingConfig::from_vic(&section).unwrap();

        assert_eq!(config.level, "warn");
        assert!(config.json_format);
        assert_eq!(config.file_path, Some(PathBuf::from("/tmp/vic-test.log")));
        assert_eq!(config.module_levels.get("reqwest"), Some(&"warn".to_string()));
    }
}

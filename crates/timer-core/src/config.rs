//! Configuration management for milestone-timer

use crate::error::{Result, TimerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage settings
    pub storage: StorageConfig,
    /// Display settings
    pub display: DisplayConfig,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TimerError::Config(e.to_string()))
    }

    /// Load configuration from a file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TimerError::Config(e.to_string()))
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data file path; platform default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

/// Display-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern for the summary date column
    pub date_format: String,
    /// Shown in place of an absent note
    pub empty_note: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            empty_note: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.data_file.is_none());
        assert_eq!(config.display.date_format, "%Y-%m-%d");
        assert_eq!(config.display.empty_note, "");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[display]"));

        let config2 = Config::from_toml_str(&toml).unwrap();
        assert_eq!(config.display.date_format, config2.display.date_format);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            [storage]
            data_file = "/tmp/timer.json"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.storage.data_file,
            Some(PathBuf::from("/tmp/timer.json"))
        );
        assert_eq!(config.display.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_invalid_config() {
        let result = Config::from_toml_str("[storage\ndata_file = 3");
        assert!(matches!(result, Err(TimerError::Config(_))));
    }

    #[test]
    fn test_load_invalid_file_reports_once() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[storage\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, TimerError::Config(_)));
        assert_eq!(err.to_string().matches("Configuration error").count(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let config = Config::load(Path::new("/nonexistent/milestone-timer/config.toml")).unwrap();
        assert!(config.storage.data_file.is_none());
    }
}

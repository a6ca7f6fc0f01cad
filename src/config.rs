//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{APP_CONFIG_DIR_NAME, CONFIG_DIR_ENV};
use crate::render::masthead::DEFAULT_SUMMARY_TINT_OPACITY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log levels accepted in `[logging] level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Masthead rendering preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Date pattern overriding the one stored in each document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    /// Opacity of the accent tint behind the summary (0.0-1.0)
    #[serde(default = "default_summary_tint_opacity")]
    pub summary_tint_opacity: f32,
}

fn default_summary_tint_opacity() -> f32 {
    DEFAULT_SUMMARY_TINT_OPACITY
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            date_format: None,
            summary_tint_opacity: default_summary_tint_opacity(),
        }
    }
}

/// Logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Masthead/config.toml`
/// - macOS: `~/Library/Application Support/Masthead/config.toml`
/// - Windows: `%APPDATA%\Masthead\config.toml`
///
/// Setting `MASTHEAD_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - `summary_tint_opacity` must be within 0.0-1.0
/// - `date_format`, when set, must not be blank
/// - `level` must be one of error, warn, info, debug, trace
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rendering preferences
    #[serde(default)]
    pub render: RenderConfig,
    /// Logging preferences
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path, honoring `MASTHEAD_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let opacity = self.render.summary_tint_opacity;
        if !(0.0..=1.0).contains(&opacity) {
            anyhow::bail!("summary_tint_opacity must be between 0.0 and 1.0, got {opacity}");
        }

        if let Some(format) = &self.render.date_format {
            if format.trim().is_empty() {
                anyhow::bail!("date_format cannot be empty");
            }
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.render.date_format, None);
        assert!((config.render.summary_tint_opacity - 0.15).abs() < f32::EPSILON);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_opacity() {
        let mut config = Config::new();
        config.render.summary_tint_opacity = 1.5;
        assert!(config.validate().is_err());

        config.render.summary_tint_opacity = -0.1;
        assert!(config.validate().is_err());

        config.render.summary_tint_opacity = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_date_format() {
        let mut config = Config::new();
        config.render.date_format = Some("  ".to_string());
        assert!(config.validate().is_err());

        config.render.date_format = Some("%d.%m.%Y".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_log_level() {
        let mut config = Config::new();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.render.date_format = Some("%Y".to_string());
        config.render.summary_tint_opacity = 0.3;
        config.logging.level = "debug".to_string();
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[render]\ndate_format = \"%Y\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.render.date_format.as_deref(), Some("%Y"));
        assert!((loaded.render.summary_tint_opacity - 0.15).abs() < f32::EPSILON);
        assert_eq!(loaded.logging, LoggingConfig::default());
    }

    #[test]
    fn test_config_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[render]\nsummary_tint_opacity = 4.0\n").unwrap();

        assert!(Config::load_from(&config_file).is_err());
    }
}

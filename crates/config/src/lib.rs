//! Configuration loading, validation, and management for HabitMind.
//!
//! Loads configuration from `~/.habitmind/config.toml` with environment
//! variable overrides. Validates all settings at load time.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.habitmind/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which backend serves invocations. Only "simulated" ships today;
    /// a real model backend registers under its own name.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Experience level assumed when the caller does not supply one.
    #[serde(default = "default_user_level")]
    pub default_user_level: String,

    /// Simulated backend settings.
    #[serde(default)]
    pub simulated: SimulatedConfig,
}

fn default_backend() -> String {
    "simulated".into()
}
fn default_user_level() -> String {
    "beginner".into()
}

/// Settings for the simulated backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedConfig {
    /// Artificial latency applied to every invocation, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    1500
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.habitmind/config.toml).
    ///
    /// Environment variable overrides (highest priority):
    /// - `HABITMIND_BACKEND`
    /// - `HABITMIND_LATENCY_MS`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(backend) = std::env::var("HABITMIND_BACKEND") {
            config.backend = backend;
        }

        if let Ok(latency) = std::env::var("HABITMIND_LATENCY_MS") {
            config.simulated.latency_ms = latency
                .parse()
                .map_err(|_| ConfigError::ValidationError(
                    format!("HABITMIND_LATENCY_MS must be an integer, got `{latency}`"),
                ))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".habitmind")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.backend != "simulated" {
            return Err(ConfigError::ValidationError(format!(
                "unknown backend `{}` (only `simulated` is available)",
                self.backend
            )));
        }

        if self.default_user_level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "default_user_level must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            default_user_level: default_user_level(),
            simulated: SimulatedConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.backend, "simulated");
        assert_eq!(config.simulated.latency_ms, 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.backend, config.backend);
        assert_eq!(parsed.simulated.latency_ms, config.simulated.latency_ms);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.backend, "simulated");
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "backend = \"gpt-42\"").unwrap();
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulated]\nlatency_ms = 10").unwrap();
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.simulated.latency_ms, 10);
        assert_eq!(config.backend, "simulated");
        assert_eq!(config.default_user_level, "beginner");
    }
}

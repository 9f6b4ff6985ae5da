use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, LocationSource};
use crate::locale::Locale;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/worldtag/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("worldtag").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Transition durations are positive and the spring can move
    /// - The locale override, if any, is supported
    /// - Fixed coordinates are present and in range
    /// - The camera arguments contain the `{output}` placeholder
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| Err(ConfigError::ValidationError { message });

        if self.dialog.show_duration_ms == 0 || self.dialog.hide_duration_ms == 0 {
            return invalid("Dialog transition durations must be greater than zero".to_string());
        }
        if self.dialog.spring_tension <= 0.0 || self.dialog.spring_friction < 0.0 {
            return invalid(format!(
                "Spring tension must be positive and friction non-negative (got {} / {})",
                self.dialog.spring_tension, self.dialog.spring_friction
            ));
        }

        if let Some(tag) = &self.defaults.locale {
            if Locale::from_tag(tag).is_none() {
                return invalid(format!(
                    "Unsupported locale '{}' (expected one of es-AR, en-US, pt-BR)",
                    tag
                ));
            }
        }

        if self.location.source == LocationSource::Fixed {
            match (self.location.latitude, self.location.longitude) {
                (Some(lat), Some(lon)) => {
                    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                        return invalid(format!("Coordinates out of range: {}, {}", lat, lon));
                    }
                }
                _ => {
                    return invalid(
                        "Fixed location requires both latitude and longitude".to_string(),
                    )
                }
            }
        }

        if self.camera.command.trim().is_empty() {
            return invalid("Camera command must not be empty".to_string());
        }
        if !self
            .camera
            .args
            .iter()
            .any(|arg| arg.contains(crate::capture::OUTPUT_PLACEHOLDER))
        {
            return invalid(format!(
                "Camera args must contain the '{}' placeholder",
                crate::capture::OUTPUT_PLACEHOLDER
            ));
        }

        Ok(())
    }
}

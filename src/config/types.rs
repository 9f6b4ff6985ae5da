use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::ui::dialog::{Easing, SpringParams, TransitionConfig};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub dialog: DialogConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default settings for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Locale tag ("es-AR", "en-US", "pt-BR"). Detected from the environment when absent.
    #[serde(default)]
    pub locale: Option<String>,
}

/// Confirmation dialog behavior and transition timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Clicking outside the card closes the dialog (default: true).
    #[serde(default = "default_true")]
    pub dismiss_on_backdrop: bool,
    /// Show an error dialog when a confirm/cancel action fails (default: true).
    #[serde(default = "default_true")]
    pub surface_action_errors: bool,
    /// Enter transition in milliseconds (default: 180).
    #[serde(default = "default_show_duration_ms")]
    pub show_duration_ms: u64,
    /// Exit transition in milliseconds (default: 140).
    #[serde(default = "default_hide_duration_ms")]
    pub hide_duration_ms: u64,
    #[serde(default)]
    pub show_easing: Easing,
    #[serde(default)]
    pub hide_easing: Easing,
    /// Card scale spring tension (default: 90).
    #[serde(default = "default_spring_tension")]
    pub spring_tension: f32,
    /// Card scale spring friction (default: 7).
    #[serde(default = "default_spring_friction")]
    pub spring_friction: f32,
}

/// External camera command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Program to run (default: "fswebcam").
    #[serde(default = "default_camera_command")]
    pub command: String,
    /// Arguments; `{output}` is replaced with the target file path.
    #[serde(default = "default_camera_args")]
    pub args: Vec<String>,
    /// Directory captures are written to. Defaults to the pictures directory.
    #[serde(default)]
    pub capture_dir: Option<PathBuf>,
    /// File extension of captures (default: "jpg").
    #[serde(default = "default_camera_extension")]
    pub extension: String,
}

/// Where coordinates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// Configured `latitude`/`longitude`.
    Fixed,
    /// IP geolocation lookup.
    #[default]
    Ip,
    /// Behaves like a denied location permission.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub source: LocationSource,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// IP geolocation endpoint returning JSON with `lat`/`lon`.
    #[serde(default = "default_ip_endpoint")]
    pub ip_endpoint: String,
    /// Request timeout in seconds (default: 5).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Nominatim-compatible reverse endpoint.
    #[serde(default = "default_geocoding_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds (default: 5).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file. Defaults to `<cache dir>/worldtag/worldtag.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter directive used when `WORLDTAG_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_true() -> bool {
    true
}

fn default_show_duration_ms() -> u64 {
    180
}

fn default_hide_duration_ms() -> u64 {
    140
}

fn default_spring_tension() -> f32 {
    90.0
}

fn default_spring_friction() -> f32 {
    7.0
}

fn default_camera_command() -> String {
    "fswebcam".to_string()
}

fn default_camera_args() -> Vec<String> {
    ["--no-banner", "-r", "1280x960", "{output}"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_camera_extension() -> String {
    "jpg".to_string()
}

fn default_ip_endpoint() -> String {
    "http://ip-api.com/json".to_string()
}

fn default_geocoding_endpoint() -> String {
    "https://nominatim.openstreetmap.org/reverse".to_string()
}

fn default_user_agent() -> String {
    format!("worldtag/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_seconds() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            dismiss_on_backdrop: true,
            surface_action_errors: true,
            show_duration_ms: default_show_duration_ms(),
            hide_duration_ms: default_hide_duration_ms(),
            show_easing: Easing::default(),
            hide_easing: Easing::default(),
            spring_tension: default_spring_tension(),
            spring_friction: default_spring_friction(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            command: default_camera_command(),
            args: default_camera_args(),
            capture_dir: None,
            extension: default_camera_extension(),
        }
    }
}

impl CameraConfig {
    pub fn capture_dir(&self) -> PathBuf {
        self.capture_dir.clone().unwrap_or_else(|| {
            dirs::picture_dir()
                .or_else(dirs::data_local_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("worldtag")
        })
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            source: LocationSource::default(),
            latitude: None,
            longitude: None,
            ip_endpoint: default_ip_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_geocoding_endpoint(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn log_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("worldtag")
                .join("worldtag.log")
        })
    }
}

impl From<&DialogConfig> for TransitionConfig {
    fn from(config: &DialogConfig) -> Self {
        Self {
            show_duration: Duration::from_millis(config.show_duration_ms),
            hide_duration: Duration::from_millis(config.hide_duration_ms),
            show_easing: config.show_easing,
            hide_easing: config.hide_easing,
            spring: SpringParams::from_tension_friction(
                config.spring_tension,
                config.spring_friction,
            ),
        }
    }
}

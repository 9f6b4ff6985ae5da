//! Configuration: TOML file under the user's config directory.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    CameraConfig, Config, Defaults, DialogConfig, GeocodingConfig, LocationConfig,
    LocationSource, LoggingConfig,
};

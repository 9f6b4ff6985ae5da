//! Device capabilities behind a WorldTag entry: camera, position, reverse
//! geocoding and locale detection, plus the pipeline that sequences them.

mod camera;
mod device;
mod geocode;
mod location;
mod pipeline;

pub use camera::{Camera, CaptureError, CaptureOutcome, CommandCamera, OUTPUT_PLACEHOLDER};
pub use device::{
    DeviceLocale, LocaleProvider, SystemLocaleProvider, FALLBACK_LANGUAGE_TAG, FALLBACK_TIMEZONE,
};
pub use geocode::{GeocodeError, Geocoder, NominatimGeocoder, NoopGeocoder};
pub use location::{DisabledLocator, FixedLocator, IpLocator, LocationError, Locator};
pub use pipeline::{CapturePipeline, CreateEntryError, SetupError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Reverse-geocoded place. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// The latest WorldTag.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub photo: Photo,
    pub coords: Coordinates,
    pub address: Address,
    pub captured_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

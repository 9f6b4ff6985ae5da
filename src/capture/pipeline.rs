use chrono::Utc;
use std::time::Duration;
use thiserror::Error;

use super::camera::{Camera, CaptureError, CaptureOutcome, CommandCamera};
use super::geocode::{Geocoder, NominatimGeocoder, NoopGeocoder};
use super::location::{DisabledLocator, FixedLocator, IpLocator, LocationError, Locator};
use super::{Address, Coordinates, Entry, Permission};
use crate::config::{Config, LocationSource};

/// Why creating an entry produced nothing.
#[derive(Debug, Error)]
pub enum CreateEntryError {
    #[error("Capture cancelled")]
    Cancelled,

    #[error(transparent)]
    Camera(#[from] CaptureError),

    #[error(transparent)]
    Location(#[from] LocationError),
}

/// Failure to construct the capabilities from configuration.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Fixed location requires latitude and longitude")]
    MissingCoordinates,
}

/// Photo, then position, then place. Geocoding failures degrade to an
/// empty address; everything else aborts.
pub struct CapturePipeline {
    camera: Box<dyn Camera>,
    locator: Box<dyn Locator>,
    geocoder: Box<dyn Geocoder>,
}

impl CapturePipeline {
    pub fn new(
        camera: Box<dyn Camera>,
        locator: Box<dyn Locator>,
        geocoder: Box<dyn Geocoder>,
    ) -> Self {
        Self {
            camera,
            locator,
            geocoder,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, SetupError> {
        let camera = Box::new(CommandCamera::from_config(&config.camera));

        let location = &config.location;
        let locator: Box<dyn Locator> = match location.source {
            LocationSource::Fixed => match (location.latitude, location.longitude) {
                (Some(lat), Some(lon)) => Box::new(FixedLocator::new(Coordinates::new(lat, lon))),
                _ => return Err(SetupError::MissingCoordinates),
            },
            LocationSource::Ip => Box::new(IpLocator::new(
                location.ip_endpoint.clone(),
                Duration::from_secs(location.timeout_seconds),
            )?),
            LocationSource::Disabled => Box::new(DisabledLocator),
        };

        let geocoding = &config.geocoding;
        let geocoder: Box<dyn Geocoder> = if geocoding.enabled {
            Box::new(NominatimGeocoder::new(
                geocoding.endpoint.clone(),
                &geocoding.user_agent,
                Duration::from_secs(geocoding.timeout_seconds),
            )?)
        } else {
            Box::new(NoopGeocoder)
        };

        tracing::debug!(source = ?location.source, geocoding = geocoding.enabled, "Capture pipeline ready");
        Ok(Self::new(camera, locator, geocoder))
    }

    pub fn location_permission(&self) -> Permission {
        self.locator.permission()
    }

    /// Blocking. Run off the UI thread.
    pub fn run(&self) -> Result<Entry, CreateEntryError> {
        let photo = match self.camera.capture()? {
            CaptureOutcome::Captured(photo) => photo,
            CaptureOutcome::Cancelled => return Err(CreateEntryError::Cancelled),
        };

        if self.locator.permission() == Permission::Denied {
            tracing::warn!("Location permission denied");
            return Err(LocationError::PermissionDenied.into());
        }
        let coords = self.locator.current_position()?;

        let address = match self.geocoder.reverse(coords) {
            Ok(address) => address,
            Err(err) => {
                tracing::warn!(error = %err, "Reverse geocoding failed, keeping coordinates only");
                Address::default()
            }
        };

        tracing::info!(path = %photo.path.display(), "Entry created");
        Ok(Entry {
            photo,
            coords,
            address,
            captured_at: Utc::now(),
        })
    }
}

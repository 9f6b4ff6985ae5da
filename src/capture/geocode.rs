use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::{Address, Coordinates};

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Reverse geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No place found: {0}")]
    NotFound(String),
}

/// Coordinates to a human-readable place.
pub trait Geocoder: Send + Sync {
    fn reverse(&self, coords: Coordinates) -> Result<Address, GeocodeError>;
}

/// Geocoding turned off: every lookup yields an empty address.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGeocoder;

impl Geocoder for NoopGeocoder {
    fn reverse(&self, _coords: Coordinates) -> Result<Address, GeocodeError> {
        Ok(Address::default())
    }
}

/// Reverse lookups against a Nominatim-compatible `/reverse` endpoint.
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn url(&self, coords: Coordinates) -> String {
        format!(
            "{}?format=jsonv2&zoom=10&lat={}&lon={}",
            self.endpoint, coords.latitude, coords.longitude
        )
    }
}

impl Geocoder for NominatimGeocoder {
    fn reverse(&self, coords: Coordinates) -> Result<Address, GeocodeError> {
        let url = self.url(coords);
        tracing::debug!(%url, "Reverse geocoding");
        let response: ReverseResponse = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;
        response.into_address()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    address: Option<ReverseAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct ReverseAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    city_district: Option<String>,
    suburb: Option<String>,
    state: Option<String>,
    region: Option<String>,
    country: Option<String>,
}

impl ReverseResponse {
    fn into_address(self) -> Result<Address, GeocodeError> {
        if let Some(error) = self.error {
            return Err(GeocodeError::NotFound(error));
        }
        let Some(place) = self.address else {
            return Err(GeocodeError::NotFound("response has no address".to_string()));
        };
        Ok(Address {
            city: place
                .city
                .or(place.town)
                .or(place.village)
                .or(place.municipality)
                .or(place.city_district)
                .or(place.suburb),
            region: place.state.or(place.region),
            country: place.country,
        })
    }
}

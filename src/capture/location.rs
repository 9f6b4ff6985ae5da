use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::{Coordinates, Permission};

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    Unavailable(String),

    #[error("Location lookup failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of the device position.
pub trait Locator: Send + Sync {
    fn permission(&self) -> Permission;
    fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Always reports the same coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator {
    coords: Coordinates,
}

impl FixedLocator {
    pub fn new(coords: Coordinates) -> Self {
        Self { coords }
    }
}

impl Locator for FixedLocator {
    fn permission(&self) -> Permission {
        Permission::Granted
    }

    fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coords)
    }
}

/// Location turned off by configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLocator;

impl Locator for DisabledLocator {
    fn permission(&self) -> Permission {
        Permission::Denied
    }

    fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

/// Approximate position from an IP geolocation service.
pub struct IpLocator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl IpLocator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl Locator for IpLocator {
    fn permission(&self) -> Permission {
        Permission::Granted
    }

    fn current_position(&self) -> Result<Coordinates, LocationError> {
        tracing::debug!(endpoint = %self.endpoint, "Looking up position");
        let lookup: IpLookup = self
            .client
            .get(&self.endpoint)
            .send()?
            .error_for_status()?
            .json()?;
        lookup.into_coordinates()
    }
}

/// ip-api style response; also accepts `latitude`/`longitude` keys.
#[derive(Debug, Deserialize)]
struct IpLookup {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, alias = "latitude")]
    lat: Option<f64>,
    #[serde(default, alias = "longitude")]
    lon: Option<f64>,
}

impl IpLookup {
    fn into_coordinates(self) -> Result<Coordinates, LocationError> {
        if self.status.as_deref() == Some("fail") {
            return Err(LocationError::Unavailable(
                self.message.unwrap_or_else(|| "lookup failed".to_string()),
            ));
        }
        let (Some(lat), Some(lon)) = (self.lat, self.lon) else {
            return Err(LocationError::Unavailable(
                "response has no coordinates".to_string(),
            ));
        };
        let coords = Coordinates::new(lat, lon);
        if !coords.is_valid() {
            return Err(LocationError::Unavailable(format!(
                "coordinates out of range: {}, {}",
                lat, lon
            )));
        }
        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Coordinates, LocationError> {
        serde_json::from_str::<IpLookup>(json)
            .unwrap()
            .into_coordinates()
    }

    #[test]
    fn reads_ip_api_payload() {
        let coords =
            parse(r#"{"status":"success","country":"Argentina","lat":-34.61,"lon":-58.38}"#)
                .unwrap();
        assert_eq!(coords, Coordinates::new(-34.61, -58.38));
    }

    #[test]
    fn accepts_long_key_names() {
        let coords = parse(r#"{"latitude":40.4,"longitude":-3.7}"#).unwrap();
        assert_eq!(coords, Coordinates::new(40.4, -3.7));
    }

    #[test]
    fn failed_lookup_carries_message() {
        match parse(r#"{"status":"fail","message":"private range"}"#) {
            Err(LocationError::Unavailable(message)) => assert_eq!(message, "private range"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_or_invalid_coordinates_are_unavailable() {
        assert!(matches!(
            parse(r#"{"status":"success"}"#),
            Err(LocationError::Unavailable(_))
        ));
        assert!(matches!(
            parse(r#"{"lat":95.0,"lon":0.0}"#),
            Err(LocationError::Unavailable(_))
        ));
    }

    #[test]
    fn disabled_locator_denies() {
        assert_eq!(DisabledLocator.permission(), Permission::Denied);
        assert!(matches!(
            DisabledLocator.current_position(),
            Err(LocationError::PermissionDenied)
        ));
    }
}

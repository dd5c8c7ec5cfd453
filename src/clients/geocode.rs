// clients/geocode.rs
use crate::clients::{http_client, ClientError};
use crate::domain::coerce::to_number;
use reqwest::blocking::Client;
use serde_json::Value;

/// Downtown Miami, used whenever an address cannot be resolved.
pub const DEFAULT_COORDINATES: (f64, f64) = (25.7617, -80.1918);

/// Resolves a free-text address to `(latitude, longitude)`.
pub trait Geocode: Send + Sync {
    /// Never fails: unresolvable addresses get [`DEFAULT_COORDINATES`].
    fn locate(&self, address: &str) -> (f64, f64);
}

pub struct NominatimGeocoder {
    client: Client,
    search_url: String,
}

impl NominatimGeocoder {
    pub fn new(search_url: String) -> Result<Self, ClientError> {
        Ok(Self {
            client: http_client()?,
            search_url,
        })
    }

    fn search(&self, address: &str) -> Result<Option<(f64, f64)>, ClientError> {
        let resp = self
            .client
            .get(&self.search_url)
            .query(&[("format", "json"), ("q", address)])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(format!("Geocoder HTTP {status}")));
        }

        let data: Value = resp.json()?;
        Ok(first_coordinates(&data))
    }
}

impl Geocode for NominatimGeocoder {
    fn locate(&self, address: &str) -> (f64, f64) {
        if address.trim().is_empty() {
            return DEFAULT_COORDINATES;
        }

        match self.search(address) {
            Ok(Some(coords)) => coords,
            Ok(None) => {
                tracing::info!(address, "geocoder found nothing, using default location");
                DEFAULT_COORDINATES
            }
            Err(e) => {
                tracing::warn!(address, error = %e, "geocoding failed, using default location");
                DEFAULT_COORDINATES
            }
        }
    }
}

// Nominatim answers `[{ "lat": "25.79", "lon": "-80.13", .. }]`.
fn first_coordinates(data: &Value) -> Option<(f64, f64)> {
    let first = data.as_array()?.first()?;
    let lat = coordinate(first.get("lat")?)?;
    let lon = coordinate(first.get("lon")?)?;
    Some((lat, lon))
}

// Unlike listing payloads, geocoder output is well-formed, so signs are kept.
fn coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        other => to_number(other),
    }
}

//! Address → coordinates lookup.
//!
//! [`Geocoder::lookup`] reports every failure as a [`GeocodeError`], while
//! [`Geocoder::resolve`] is the fail-soft form the workflow uses: it logs
//! the failure and falls back to [`Coordinates::SENTINEL`].

use std::future::Future;

use directory_shared::constants::{API_KEY_PLACEHOLDER, GEOCODE_ENDPOINT, GEOCODE_STATUS_OK};
use directory_shared::Coordinates;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::GeocodeError;

pub trait Geocoder: Send + Sync {
    /// Resolve `address`, surfacing any failure.
    fn lookup(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Coordinates, GeocodeError>> + Send;

    /// Resolve `address`, never failing: errors are logged and mapped to
    /// the sentinel coordinate.
    fn resolve(&self, address: &str) -> impl Future<Output = Coordinates> + Send {
        async move {
            match self.lookup(address).await {
                Ok(coordinates) => coordinates,
                Err(GeocodeError::Status {
                    status,
                    message: Some(message),
                }) => {
                    warn!(address, %status, %message, "Geocoding error, using sentinel coordinates");
                    Coordinates::SENTINEL
                }
                Err(e) => {
                    warn!(address, error = %e, "Geocoding error, using sentinel coordinates");
                    Coordinates::SENTINEL
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Response body
// ---------------------------------------------------------------------------

/// The subset of the Geocoding API JSON body we read.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

impl GeocodeResponse {
    /// Location of the first result, if the lookup succeeded.
    pub fn into_coordinates(self) -> Result<Coordinates, GeocodeError> {
        if self.status != GEOCODE_STATUS_OK {
            return Err(GeocodeError::Status {
                status: self.status,
                message: self.error_message,
            });
        }

        self.results
            .into_iter()
            .next()
            .map(|r| r.geometry.location)
            .ok_or(GeocodeError::NoResults)
    }
}

// ---------------------------------------------------------------------------
// Google client
// ---------------------------------------------------------------------------

/// [`Geocoder`] backed by the Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, api_key)
    }

    /// Use a preconfigured HTTP client (e.g. one with a request timeout).
    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

impl Default for GoogleGeocoder {
    fn default() -> Self {
        Self::new(GEOCODE_ENDPOINT, API_KEY_PLACEHOLDER)
    }
}

impl Geocoder for GoogleGeocoder {
    async fn lookup(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        debug!(address, endpoint = %self.endpoint, "Geocoding address");

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(GeocodeError::HttpStatus(resp.status().as_u16()));
        }

        let body = resp.text().await?;
        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Decode(e.to_string()))?;

        parsed.into_coordinates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Coordinates, GeocodeError> {
        serde_json::from_str::<GeocodeResponse>(json)
            .unwrap()
            .into_coordinates()
    }

    #[test]
    fn test_first_result_is_used() {
        let coords = parse(
            r#"{
                "status": "OK",
                "results": [
                    {"geometry": {"location": {"lat": 40.7128, "lng": -74.006}}, "place_id": "a"},
                    {"geometry": {"location": {"lat": 1.0, "lng": 2.0}}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(coords, Coordinates::new(40.7128, -74.006));
    }

    #[test]
    fn test_non_ok_status() {
        let err = parse(
            r#"{"status": "REQUEST_DENIED", "results": [], "error_message": "The provided API key is invalid."}"#,
        )
        .unwrap_err();
        match err {
            GeocodeError::Status { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message.as_deref(), Some("The provided API key is invalid."));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_results_status() {
        assert!(matches!(
            parse(r#"{"status": "ZERO_RESULTS", "results": []}"#),
            Err(GeocodeError::Status { .. })
        ));
    }

    #[test]
    fn test_ok_without_results() {
        assert!(matches!(
            parse(r#"{"status": "OK"}"#),
            Err(GeocodeError::NoResults)
        ));
    }

    struct Failing;

    impl Geocoder for Failing {
        async fn lookup(&self, _address: &str) -> Result<Coordinates, GeocodeError> {
            Err(GeocodeError::NoResults)
        }
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_sentinel() {
        assert_eq!(Failing.resolve("nowhere").await, Coordinates::SENTINEL);
    }
}

// Geocoding over the Google Maps HTTP API.

pub mod error;
pub mod geocode;

pub use error::GeocodeError;
pub use geocode::{Geocoder, GeocodeResponse, GoogleGeocoder};

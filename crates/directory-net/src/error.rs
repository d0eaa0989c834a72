use thiserror::Error;

/// Why an address could not be turned into coordinates.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Geocoding service responded with HTTP {0}")]
    HttpStatus(u16),

    #[error("Malformed geocoding response: {0}")]
    Decode(String),

    /// The API answered with a status other than `OK`.
    #[error("Geocoding status {status}")]
    Status {
        status: String,
        /// `error_message` from the response body, when present.
        message: Option<String>,
    },

    #[error("Unable to geocode address: no results")]
    NoResults,
}

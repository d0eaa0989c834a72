//! Client configuration loaded from environment variables.
//!
//! Every setting has a default so the directory starts with zero
//! configuration; only the API key needs replacing for real lookups.

use std::time::Duration;

use directory_shared::constants::{API_KEY_PLACEHOLDER, DELETE_DELAY_MS, GEOCODE_ENDPOINT};

/// Directory configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    /// Geocoding API endpoint.
    /// Env: `GEOCODE_ENDPOINT`
    /// Default: the Google Maps Geocoding JSON endpoint.
    pub geocode_endpoint: String,

    /// Google Maps API key sent with every lookup.
    /// Env: `GOOGLE_MAPS_API_KEY`
    /// Default: `YOUR_GOOGLE_MAPS_API_KEY` (lookups will be denied).
    pub api_key: String,

    /// Per-request timeout for geocoding.
    /// Env: `GEOCODE_TIMEOUT_SECS`
    /// Default: none.
    pub geocode_timeout: Option<Duration>,

    /// Artificial delay before a delete is applied.
    /// Env: `DELETE_DELAY_MS`
    /// Default: `1000`
    pub delete_delay: Duration,

    /// Whether the store starts with the sample profiles.
    /// Env: `SEED_PROFILES` (true/false)
    /// Default: `true`
    pub seed_profiles: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            geocode_endpoint: GEOCODE_ENDPOINT.to_string(),
            api_key: API_KEY_PLACEHOLDER.to_string(),
            geocode_timeout: None,
            delete_delay: Duration::from_millis(DELETE_DELAY_MS),
            seed_profiles: true,
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = var("GEOCODE_ENDPOINT") {
            if !endpoint.is_empty() {
                config.geocode_endpoint = endpoint;
            }
        }

        if let Some(key) = var("GOOGLE_MAPS_API_KEY") {
            if !key.is_empty() {
                config.api_key = key;
            }
        }

        if let Some(val) = var("GEOCODE_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(0) => config.geocode_timeout = None,
                Ok(secs) => config.geocode_timeout = Some(Duration::from_secs(secs)),
                Err(_) => {
                    tracing::warn!(value = %val, "Invalid GEOCODE_TIMEOUT_SECS, using no timeout");
                }
            }
        }

        if let Some(val) = var("DELETE_DELAY_MS") {
            match val.parse::<u64>() {
                Ok(ms) => config.delete_delay = Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(value = %val, "Invalid DELETE_DELAY_MS, using default");
                }
            }
        }

        if let Some(val) = var("SEED_PROFILES") {
            config.seed_profiles = val != "false" && val != "0";
        }

        config
    }

    /// Whether the API key is still the shipped placeholder.
    pub fn has_placeholder_key(&self) -> bool {
        self.api_key == API_KEY_PLACEHOLDER
    }
}

/// Application name
pub const APP_NAME: &str = "Profile Directory";

/// Google Geocoding API JSON endpoint
pub const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Placeholder shipped in place of a real Maps API key
pub const API_KEY_PLACEHOLDER: &str = "YOUR_GOOGLE_MAPS_API_KEY";

/// Geocoding API status for a successful lookup
pub const GEOCODE_STATUS_OK: &str = "OK";

/// Artificial delay before a delete is applied, in milliseconds
pub const DELETE_DELAY_MS: u64 = 1000;

/// Zoom level used when a profile is pinned on the map
pub const MAP_ZOOM: u8 = 14;

/// Separator between interests in the draft form
pub const INTEREST_SEPARATOR: char = ',';

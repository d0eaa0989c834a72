use serde::{Deserialize, Serialize};

use crate::constants::MAP_ZOOM;
use crate::interests::{join_interests, normalize_interests};

// Profile identity, assigned by the store and never reused
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProfileId(pub u64);

impl ProfileId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Fallback position recorded when an address could not be geocoded.
    pub const SENTINEL: Coordinates = Coordinates { lat: 0.0, lng: 0.0 };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

/// One directory entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    /// Role or title.
    pub description: String,
    /// Free-text postal address, the geocoding input.
    pub address: String,
    /// Derived from `address`; [`Coordinates::SENTINEL`] when geocoding failed.
    pub coordinates: Coordinates,
    pub interests: Vec<String>,
    pub email: String,
    pub phone: String,
}

impl Profile {
    /// Build a full record from submitted form fields and resolved coordinates.
    pub fn from_draft(id: ProfileId, draft: ProfileDraft, coordinates: Coordinates) -> Self {
        Self {
            id,
            interests: normalize_interests(&draft.interests),
            name: draft.name,
            description: draft.description,
            address: draft.address,
            coordinates,
            email: draft.email,
            phone: draft.phone,
        }
    }

    pub fn map_pin(&self) -> MapPin {
        MapPin {
            position: self.coordinates,
            title: self.name.clone(),
            address: self.address.clone(),
            zoom: MAP_ZOOM,
        }
    }
}

/// Form state for a profile being created or edited.
///
/// Every field is raw text as typed; `interests` is comma-separated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub name: String,
    pub description: String,
    pub address: String,
    pub interests: String,
    pub email: String,
    pub phone: String,
}

impl ProfileDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set a field by its form input name.  Returns `false` for unknown names.
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "description" => &mut self.description,
            "address" => &mut self.address,
            "interests" => &mut self.interests,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            _ => return false,
        };
        *slot = value;
        true
    }
}

impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            address: profile.address.clone(),
            interests: join_interests(&profile.interests),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
        }
    }
}

/// What the map widget needs to place a marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapPin {
    pub position: Coordinates,
    pub title: String,
    pub address: String,
    pub zoom: u8,
}

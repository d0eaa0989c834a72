pub mod constants;
pub mod interests;
pub mod types;

pub use types::{Coordinates, MapPin, Profile, ProfileDraft, ProfileId};

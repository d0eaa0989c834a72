use directory_net::Geocoder;
use directory_shared::{MapPin, ProfileId};

use crate::commands::lock;
use crate::state::SharedState;

/// Select a profile for the map overlay and return where to pin it.
pub fn show_on_map<G: Geocoder>(state: &SharedState<G>, id: ProfileId) -> Result<MapPin, String> {
    let mut guard = lock(state)?;

    let profile = guard
        .workflow
        .get(id)
        .ok_or_else(|| format!("Profile {id} not found"))?;
    let pin = profile.map_pin();

    guard.selected_profile = Some(profile);
    guard.show_map = true;

    Ok(pin)
}

pub fn close_map<G>(state: &SharedState<G>) -> Result<(), String> {
    lock(state)?.show_map = false;
    Ok(())
}

use directory_net::Geocoder;
use directory_shared::{Profile, ProfileDraft, ProfileId};
use tracing::info;

use crate::commands::{lock, require_admin};
use crate::state::SharedState;

pub fn list_profiles<G: Geocoder>(state: &SharedState<G>) -> Result<Vec<Profile>, String> {
    Ok(lock(state)?.workflow.profiles())
}

pub fn get_profile<G: Geocoder>(state: &SharedState<G>, id: ProfileId) -> Result<Profile, String> {
    lock(state)?
        .workflow
        .get(id)
        .ok_or_else(|| format!("Profile {id} not found"))
}

/// Remember `term` and return the matching profiles.
pub fn search_profiles<G: Geocoder>(
    state: &SharedState<G>,
    term: String,
) -> Result<Vec<Profile>, String> {
    let mut guard = lock(state)?;
    let matches = guard.workflow.search(&term);
    guard.search_term = term;
    Ok(matches)
}

/// Profiles matching the last search term, as the list view shows them.
pub fn visible_profiles<G: Geocoder>(state: &SharedState<G>) -> Result<Vec<Profile>, String> {
    let guard = lock(state)?;
    Ok(guard.workflow.search(&guard.search_term))
}

pub fn is_loading<G: Geocoder>(state: &SharedState<G>) -> Result<bool, String> {
    Ok(lock(state)?.workflow.is_loading())
}

/// Submit the "add profile" form and clear it once the profile is stored.
pub async fn create_profile<G: Geocoder>(state: &SharedState<G>) -> Result<Profile, String> {
    let (workflow, draft) = {
        let guard = lock(state)?;
        require_admin(&guard)?;
        (guard.workflow.clone(), guard.draft.clone())
    };

    let profile = workflow.create(draft).await;

    lock(state)?.draft = ProfileDraft::default();

    info!(profile_id = %profile.id, "Profile added from form");

    Ok(profile)
}

/// Replace profile `id` with `draft`.  `Ok(None)` when `id` is unknown.
pub async fn edit_profile<G: Geocoder>(
    state: &SharedState<G>,
    id: ProfileId,
    draft: ProfileDraft,
) -> Result<Option<Profile>, String> {
    let workflow = {
        let guard = lock(state)?;
        require_admin(&guard)?;
        guard.workflow.clone()
    };

    let updated = workflow.edit(id, draft).await;

    if let Some(ref profile) = updated {
        let mut guard = lock(state)?;
        if guard.selected_profile.as_ref().is_some_and(|p| p.id == id) {
            guard.selected_profile = Some(profile.clone());
        }
    }

    Ok(updated)
}

/// Delete profile `id`.  Returns whether a profile was removed.
pub async fn delete_profile<G: Geocoder>(
    state: &SharedState<G>,
    id: ProfileId,
) -> Result<bool, String> {
    let workflow = {
        let guard = lock(state)?;
        require_admin(&guard)?;
        guard.workflow.clone()
    };

    let removed = workflow.delete(id).await.is_some();

    if removed {
        let mut guard = lock(state)?;
        if guard.selected_profile.as_ref().is_some_and(|p| p.id == id) {
            guard.selected_profile = None;
            guard.show_map = false;
        }
    }

    Ok(removed)
}

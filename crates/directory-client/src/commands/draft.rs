use directory_shared::ProfileDraft;

use crate::commands::lock;
use crate::state::SharedState;

pub fn get_draft<G>(state: &SharedState<G>) -> Result<ProfileDraft, String> {
    Ok(lock(state)?.draft.clone())
}

/// Set one form field by its input name (`name`, `description`, `address`,
/// `phone`, `email` or `interests`).
pub fn update_draft<G>(state: &SharedState<G>, field: &str, value: String) -> Result<(), String> {
    let mut guard = lock(state)?;
    if guard.draft.set_field(field, value) {
        Ok(())
    } else {
        Err(format!("Unknown form field: {field}"))
    }
}

/// Discard the form contents.
pub fn cancel_draft<G>(state: &SharedState<G>) -> Result<(), String> {
    lock(state)?.draft = ProfileDraft::default();
    Ok(())
}

use tracing::info;

use crate::commands::lock;
use crate::state::SharedState;

/// Flip admin mode and return the new value.
pub fn toggle_admin_mode<G>(state: &SharedState<G>) -> Result<bool, String> {
    let mut guard = lock(state)?;
    guard.is_admin_mode = !guard.is_admin_mode;

    info!(admin = guard.is_admin_mode, "Admin mode toggled");

    Ok(guard.is_admin_mode)
}

pub fn is_admin_mode<G>(state: &SharedState<G>) -> Result<bool, String> {
    Ok(lock(state)?.is_admin_mode)
}

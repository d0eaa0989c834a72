//! Command handlers invoked by the presentation layer.
//!
//! Each sub-module groups related commands.  Every handler takes the
//! [`SharedState`] and reports failures as a display string, which is all
//! the UI shows.

pub mod admin;
pub mod draft;
pub mod map;
pub mod profiles;

use std::sync::MutexGuard;

use crate::state::{AppState, SharedState};

fn lock<G>(state: &SharedState<G>) -> Result<MutexGuard<'_, AppState<G>>, String> {
    state.lock().map_err(|e| format!("Lock poisoned: {e}"))
}

fn require_admin<G>(state: &AppState<G>) -> Result<(), String> {
    if state.is_admin_mode {
        Ok(())
    } else {
        Err("Admin mode is required".into())
    }
}

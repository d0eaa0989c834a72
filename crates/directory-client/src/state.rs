//! Application state shared across all commands.
//!
//! The [`AppState`] struct is wrapped in `Arc<Mutex<>>` so that every
//! command handler can reach it.  The lock is only held for synchronous
//! reads and writes; long-running work goes through a cloned
//! [`ProfileWorkflow`].

use std::sync::{Arc, Mutex};

use directory_net::GoogleGeocoder;
use directory_shared::{Profile, ProfileDraft};

use crate::workflow::ProfileWorkflow;

/// Handle passed to every command.
pub type SharedState<G = GoogleGeocoder> = Arc<Mutex<AppState<G>>>;

/// Central application state.
pub struct AppState<G = GoogleGeocoder> {
    /// Owner of the profile store; the only path for mutations.
    pub workflow: ProfileWorkflow<G>,

    /// Whether create / edit / delete are exposed.
    /// A local toggle, not an authentication mechanism.
    pub is_admin_mode: bool,

    /// Last search term entered by the user.
    pub search_term: String,

    /// Profile currently shown on the map overlay.
    pub selected_profile: Option<Profile>,

    /// Whether the map overlay is open.
    pub show_map: bool,

    /// The "add profile" form.
    pub draft: ProfileDraft,
}

impl<G> AppState<G> {
    /// Create state around `workflow` with admin mode off and an empty form.
    pub fn new(workflow: ProfileWorkflow<G>) -> Self {
        Self {
            workflow,
            is_admin_mode: false,
            search_term: String::new(),
            selected_profile: None,
            show_map: false,
            draft: ProfileDraft::default(),
        }
    }

    pub fn into_shared(self) -> SharedState<G> {
        Arc::new(Mutex::new(self))
    }
}

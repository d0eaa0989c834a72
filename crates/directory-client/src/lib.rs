pub mod commands;
pub mod config;
pub mod events;
pub mod state;
pub mod workflow;

mod error;

use directory_net::GoogleGeocoder;
use directory_shared::constants::APP_NAME;
use directory_store::seed::sample_profiles;
use directory_store::ProfileStore;
use tracing_subscriber::{fmt, EnvFilter};

pub use crate::config::DirectoryConfig;
pub use crate::error::ClientError;
use crate::state::{AppState, SharedState};
use crate::workflow::ProfileWorkflow;

/// Install the global `tracing` subscriber.  Honours `RUST_LOG`; calling it
/// again once a subscriber is set is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("directory_client=debug,directory_net=debug,directory_store=info,warn")
    });

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Build the geocoder described by `config`.
pub fn build_geocoder(config: &DirectoryConfig) -> Result<GoogleGeocoder, ClientError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.geocode_timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    Ok(GoogleGeocoder::with_client(
        client,
        config.geocode_endpoint.clone(),
        config.api_key.clone(),
    ))
}

/// Set up logging and the application state the presentation layer drives.
pub fn launch(config: &DirectoryConfig) -> Result<SharedState, ClientError> {
    init_tracing();

    tracing::info!("Starting {} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    if config.has_placeholder_key() {
        tracing::warn!("GOOGLE_MAPS_API_KEY not set, new addresses will not geocode");
    }

    let store = if config.seed_profiles {
        ProfileStore::with_profiles(sample_profiles())?
    } else {
        ProfileStore::new()
    };
    tracing::info!(profiles = store.len(), "Profile store ready");

    let workflow =
        ProfileWorkflow::new(build_geocoder(config)?, store).with_delete_delay(config.delete_delay);

    Ok(AppState::new(workflow).into_shared())
}

use directory_store::StoreError;
use thiserror::Error;

/// Errors raised while bootstrapping the client.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

use directory_shared::ProfileId;
use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No profile carries the requested id.
    #[error("Profile not found: {0}")]
    NotFound(ProfileId),

    /// A profile with this id is already stored.
    #[error("Duplicate profile id: {0}")]
    DuplicateId(ProfileId),

    /// The id leaves no room for the id counter to move past it.
    #[error("Profile id out of range: {0}")]
    IdOutOfRange(ProfileId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

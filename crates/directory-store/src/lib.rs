//! # directory-store
//!
//! In-memory storage for the profile directory.
//!
//! The crate exposes a synchronous [`ProfileStore`] that owns the ordered
//! list of profiles and hands out ids, plus the pure [`search`] filter the
//! UI applies on top of it.  Nothing is persisted; a fresh process starts
//! from the optional [`seed`] data.

pub mod profiles;
pub mod search;
pub mod seed;

mod error;

pub use error::{Result, StoreError};
pub use profiles::ProfileStore;

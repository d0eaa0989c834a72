//! CRUD operations over the ordered in-memory profile list.

use directory_shared::{Profile, ProfileId};
use tracing::debug;

use crate::error::{Result, StoreError};

/// Owner of the canonical, ordered profile collection.
///
/// Ids come from a counter that only moves forward, so an id freed by
/// [`ProfileStore::remove`] is never handed out again.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    next_id: u64,
}

impl ProfileStore {
    /// Create an empty store.  The first allocated id is `1`.
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated with `profiles`, in order.
    pub fn with_profiles(profiles: impl IntoIterator<Item = Profile>) -> Result<Self> {
        let mut store = Self::new();
        for profile in profiles {
            store.append(profile)?;
        }
        Ok(store)
    }

    // ------------------------------------------------------------------
    // Ids
    // ------------------------------------------------------------------

    /// Reserve the next unused profile id.
    pub fn allocate_id(&mut self) -> ProfileId {
        let id = ProfileId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Add a profile to the end of the list.
    pub fn append(&mut self, profile: Profile) -> Result<()> {
        if self.position(profile.id).is_some() {
            return Err(StoreError::DuplicateId(profile.id));
        }

        // Externally chosen ids (seed data) must not be allocated later.
        let after = profile
            .id
            .get()
            .checked_add(1)
            .ok_or(StoreError::IdOutOfRange(profile.id))?;
        self.next_id = self.next_id.max(after);

        debug!(profile_id = %profile.id, "appending profile");
        self.profiles.push(profile);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// All profiles in insertion order.
    pub fn all(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Replace the record with `id` in place, returning the previous one.
    ///
    /// The stored record always keeps `id`, whatever id `profile` carries.
    pub fn replace(&mut self, id: ProfileId, mut profile: Profile) -> Result<Profile> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        profile.id = id;
        Ok(std::mem::replace(&mut self.profiles[index], profile))
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Remove the record with `id`, keeping the relative order of the rest.
    pub fn remove(&mut self, id: ProfileId) -> Result<Profile> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        Ok(self.profiles.remove(index))
    }

    fn position(&self, id: ProfileId) -> Option<usize> {
        self.profiles.iter().position(|p| p.id == id)
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

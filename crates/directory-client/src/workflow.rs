//! Create / edit / delete orchestration over the profile store.
//!
//! Each operation holds the loading flag for its whole duration, resolves
//! coordinates through the [`Geocoder`] where needed and only then touches
//! the store.  Nothing here fails outward: geocoding degrades to the
//! sentinel coordinate and unknown ids are ignored.
//!
//! Edits and deletes of the same profile are serialized through a per-id
//! async lock, so they apply in the order they were started even when their
//! network calls finish out of order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use directory_net::Geocoder;
use directory_shared::constants::DELETE_DELAY_MS;
use directory_shared::{Profile, ProfileDraft, ProfileId};
use directory_store::{search, ProfileStore, StoreError};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use crate::events::{emit_event, DirectoryEvent, EVENT_CHANNEL_CAPACITY};

/// Per-profile lock plus the number of operations holding or awaiting it.
struct RecordEntry {
    lock: Arc<tokio::sync::Mutex<()>>,
    users: usize,
}

type RecordLocks = HashMap<ProfileId, RecordEntry>;

/// Sole writer of the profile store.
///
/// Cheap to clone; clones share the same store, loading flag and event
/// channel.
pub struct ProfileWorkflow<G> {
    store: Arc<Mutex<ProfileStore>>,
    geocoder: Arc<G>,
    in_flight: Arc<watch::Sender<usize>>,
    record_locks: Arc<Mutex<RecordLocks>>,
    events: broadcast::Sender<DirectoryEvent>,
    delete_delay: Duration,
}

impl<G> Clone for ProfileWorkflow<G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            geocoder: Arc::clone(&self.geocoder),
            in_flight: Arc::clone(&self.in_flight),
            record_locks: Arc::clone(&self.record_locks),
            events: self.events.clone(),
            delete_delay: self.delete_delay,
        }
    }
}

impl<G: Geocoder> ProfileWorkflow<G> {
    pub fn new(geocoder: G, store: ProfileStore) -> Self {
        let (in_flight, _) = watch::channel(0);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store: Arc::new(Mutex::new(store)),
            geocoder: Arc::new(geocoder),
            in_flight: Arc::new(in_flight),
            record_locks: Arc::new(Mutex::new(HashMap::new())),
            events,
            delete_delay: Duration::from_millis(DELETE_DELAY_MS),
        }
    }

    pub fn with_delete_delay(mut self, delay: Duration) -> Self {
        self.delete_delay = delay;
        self
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Geocode the draft's address and append a new profile built from it.
    pub async fn create(&self, draft: ProfileDraft) -> Profile {
        let _busy = self.enter_loading();

        let coordinates = self.geocoder.resolve(&draft.address).await;

        let mut store = self.store();
        let id = store.allocate_id();
        let profile = Profile::from_draft(id, draft, coordinates);
        if let Err(e) = store.append(profile.clone()) {
            // Unreachable while ids only come from allocate_id.
            warn!(profile_id = %id, error = %e, "Failed to append profile");
        }
        drop(store);

        info!(profile_id = %id, name = %profile.name, "Profile created");
        emit_event(&self.events, DirectoryEvent::ProfileCreated(profile.clone()));
        profile
    }

    /// Re-geocode and replace the whole profile with `id`.
    ///
    /// Returns the stored record, or `None` when no profile has `id`.
    pub async fn edit(&self, id: ProfileId, draft: ProfileDraft) -> Option<Profile> {
        let _busy = self.enter_loading();
        let record = self.lock_record(id).await;

        let coordinates = self.geocoder.resolve(&draft.address).await;
        let profile = Profile::from_draft(id, draft, coordinates);
        let replaced = self.store().replace(id, profile.clone());

        drop(record);

        match replaced {
            Ok(_) => {
                info!(profile_id = %id, "Profile updated");
                emit_event(&self.events, DirectoryEvent::ProfileUpdated(profile.clone()));
                Some(profile)
            }
            Err(StoreError::NotFound(_)) => {
                debug!(profile_id = %id, "Edit of unknown profile ignored");
                None
            }
            Err(e) => {
                warn!(profile_id = %id, error = %e, "Failed to update profile");
                None
            }
        }
    }

    /// Remove the profile with `id` after the configured delay.
    ///
    /// Returns the removed record, or `None` when no profile has `id`.
    pub async fn delete(&self, id: ProfileId) -> Option<Profile> {
        let _busy = self.enter_loading();
        let record = self.lock_record(id).await;

        if !self.delete_delay.is_zero() {
            tokio::time::sleep(self.delete_delay).await;
        }
        let removed = self.store().remove(id);

        drop(record);

        match removed {
            Ok(profile) => {
                info!(profile_id = %id, "Profile deleted");
                emit_event(&self.events, DirectoryEvent::ProfileDeleted { id });
                Some(profile)
            }
            Err(e) => {
                debug!(profile_id = %id, error = %e, "Delete of unknown profile ignored");
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn profiles(&self) -> Vec<Profile> {
        self.store().all().to_vec()
    }

    pub fn get(&self, id: ProfileId) -> Option<Profile> {
        self.store().get(id).cloned()
    }

    pub fn search(&self, query: &str) -> Vec<Profile> {
        search::filter(self.store().all(), query)
    }

    pub fn is_loading(&self) -> bool {
        *self.in_flight.borrow() > 0
    }

    /// Number of operations in flight; non-zero means "loading".
    pub fn watch_loading(&self) -> watch::Receiver<usize> {
        self.in_flight.subscribe()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DirectoryEvent> {
        self.events.subscribe()
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn store(&self) -> MutexGuard<'_, ProfileStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn enter_loading(&self) -> LoadingGuard {
        LoadingGuard::enter(Arc::clone(&self.in_flight), self.events.clone())
    }

    /// Wait for exclusive access to profile `id`.
    ///
    /// The registration is taken before the first await, so callers are
    /// served in the order they asked.
    async fn lock_record(&self, id: ProfileId) -> RecordGuard {
        let mut record = RecordGuard::register(Arc::clone(&self.record_locks), id);
        let lock = Arc::clone(&record.lock);
        record.serial = Some(lock.lock_owned().await);
        record
    }
}

/// Registration in the per-profile lock map, plus the lock once acquired.
///
/// Dropping it (including when the owning future is cancelled) releases the
/// lock and removes the map entry once nobody else uses it.
struct RecordGuard {
    locks: Arc<Mutex<RecordLocks>>,
    id: ProfileId,
    lock: Arc<tokio::sync::Mutex<()>>,
    serial: Option<tokio::sync::OwnedMutexGuard<()>>,
}

impl RecordGuard {
    fn register(locks: Arc<Mutex<RecordLocks>>, id: ProfileId) -> Self {
        let lock = {
            let mut map = locks.lock().unwrap_or_else(PoisonError::into_inner);
            let entry = map.entry(id).or_insert_with(|| RecordEntry {
                lock: Arc::default(),
                users: 0,
            });
            entry.users += 1;
            Arc::clone(&entry.lock)
        };
        Self {
            locks,
            id,
            lock,
            serial: None,
        }
    }
}

impl Drop for RecordGuard {
    fn drop(&mut self) {
        self.serial.take();

        let mut map = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = map.get_mut(&self.id) {
            entry.users = entry.users.saturating_sub(1);
            if entry.users == 0 {
                map.remove(&self.id);
            }
        }
    }
}

/// Holds the loading flag up while alive.
struct LoadingGuard {
    in_flight: Arc<watch::Sender<usize>>,
    events: broadcast::Sender<DirectoryEvent>,
}

impl LoadingGuard {
    fn enter(
        in_flight: Arc<watch::Sender<usize>>,
        events: broadcast::Sender<DirectoryEvent>,
    ) -> Self {
        let mut started = false;
        in_flight.send_modify(|n| {
            started = *n == 0;
            *n += 1;
        });
        if started {
            emit_event(&events, DirectoryEvent::LoadingChanged { loading: true });
        }
        Self { in_flight, events }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut finished = false;
        self.in_flight.send_modify(|n| {
            *n = n.saturating_sub(1);
            finished = *n == 0;
        });
        if finished {
            emit_event(&self.events, DirectoryEvent::LoadingChanged { loading: false });
        }
    }
}

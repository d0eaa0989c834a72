#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use directory_client::workflow::ProfileWorkflow;
use directory_net::{GeocodeError, Geocoder};
use directory_shared::{Coordinates, ProfileDraft};
use directory_store::ProfileStore;

pub const NEW_YORK: Coordinates = Coordinates { lat: 40.7128, lng: -74.006 };
pub const OSLO: Coordinates = Coordinates { lat: 59.9139, lng: 10.7522 };

/// Resolves a fixed set of addresses.  Addresses starting with "slow "
/// answer after [`SLOW`]; unknown addresses fail like a ZERO_RESULTS reply.
#[derive(Default)]
pub struct StubGeocoder {
    known: HashMap<String, Coordinates>,
    calls: AtomicUsize,
}

pub const SLOW: Duration = Duration::from_millis(100);

impl StubGeocoder {
    pub fn new() -> Self {
        Self::default()
            .with("456 Design Avenue, New York, NY", NEW_YORK)
            .with("slow 456 Design Avenue, New York, NY", NEW_YORK)
            .with("9 Fjord Road, Oslo", OSLO)
    }

    pub fn with(mut self, address: &str, coordinates: Coordinates) -> Self {
        self.known.insert(address.to_string(), coordinates);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Geocoder for StubGeocoder {
    async fn lookup(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if address.starts_with("slow ") {
            tokio::time::sleep(SLOW).await;
        }
        self.known
            .get(address)
            .copied()
            .ok_or_else(|| GeocodeError::Status {
                status: "ZERO_RESULTS".into(),
                message: None,
            })
    }
}

pub fn workflow() -> ProfileWorkflow<StubGeocoder> {
    ProfileWorkflow::new(StubGeocoder::new(), ProfileStore::new()).with_delete_delay(Duration::ZERO)
}

pub fn draft(name: &str, address: &str) -> ProfileDraft {
    ProfileDraft {
        name: name.into(),
        description: "Engineer".into(),
        address: address.into(),
        interests: "Coding, Hiking".into(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "+1 234 567 8900".into(),
    }
}

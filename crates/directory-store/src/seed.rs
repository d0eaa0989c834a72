//! Sample profiles a fresh directory starts with.

use directory_shared::{Coordinates, Profile, ProfileId};

pub fn sample_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: ProfileId(1),
            name: "Jane Smith".into(),
            description: "Software Engineer".into(),
            address: "123 Tech Street, Silicon Valley, CA".into(),
            coordinates: Coordinates::new(37.7749, -122.4194),
            interests: vec!["Coding".into(), "Hiking".into(), "Photography".into()],
            email: "jane@example.com".into(),
            phone: "+1 234 567 8900".into(),
        },
        Profile {
            id: ProfileId(2),
            name: "John Doe".into(),
            description: "Product Designer".into(),
            address: "456 Design Avenue, New York, NY".into(),
            coordinates: Coordinates::new(40.7128, -74.006),
            interests: vec!["UI/UX".into(), "Art".into(), "Music".into()],
            email: "john@example.com".into(),
            phone: "+1 234 567 8901".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileStore;

    #[test]
    fn test_seed_loads_into_store() {
        let mut store = ProfileStore::with_profiles(sample_profiles()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.allocate_id(), ProfileId(3));
        assert!(store.all().iter().all(|p| !p.coordinates.is_sentinel()));
    }
}

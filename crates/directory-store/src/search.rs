//! Case-insensitive text search over name, role and address.

use directory_shared::Profile;

/// Whether `query` occurs in the profile's name, description or address,
/// ignoring case.  An empty query matches every profile.
pub fn matches(profile: &Profile, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_lowercase(profile, &needle)
}

/// Return the profiles matching `query`, in their original order.
pub fn filter(profiles: &[Profile], query: &str) -> Vec<Profile> {
    let needle = query.to_lowercase();
    profiles
        .iter()
        .filter(|p| matches_lowercase(p, &needle))
        .cloned()
        .collect()
}

fn matches_lowercase(profile: &Profile, needle: &str) -> bool {
    [&profile.name, &profile.description, &profile.address]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use directory_shared::{Coordinates, ProfileDraft, ProfileId};

    use super::*;

    fn profile(id: u64, name: &str, description: &str, address: &str) -> Profile {
        let draft = ProfileDraft {
            name: name.into(),
            description: description.into(),
            address: address.into(),
            interests: "Photography".into(),
            email: "findme@example.com".into(),
            ..Default::default()
        };
        Profile::from_draft(ProfileId(id), draft, Coordinates::SENTINEL)
    }

    fn directory() -> Vec<Profile> {
        vec![
            profile(1, "Jane Smith", "Software Engineer", "123 Tech Street, Silicon Valley, CA"),
            profile(2, "John Doe", "Product Designer", "456 Design Avenue, New York, NY"),
            profile(3, "Mara Lind", "Engineering Manager", "9 Fjord Road, Oslo"),
        ]
    }

    fn ids(profiles: &[Profile]) -> Vec<u64> {
        profiles.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(ids(&filter(&directory(), "")), vec![1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive_across_fields() {
        let all = directory();
        assert_eq!(ids(&filter(&all, "JOHN")), vec![2]);
        assert_eq!(ids(&filter(&all, "engineer")), vec![1, 3]);
        assert_eq!(ids(&filter(&all, "new york")), vec![2]);
    }

    #[test]
    fn test_ignores_other_fields() {
        let all = directory();
        assert!(filter(&all, "photography").is_empty());
        assert!(filter(&all, "findme").is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let mut all = directory();
        all.reverse();
        assert_eq!(ids(&filter(&all, "e")), vec![3, 2, 1]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = directory();
        for query in ["", "a", "Design", "road", "zzz", "N"] {
            let once = filter(&all, query);
            assert_eq!(filter(&once, query), once, "query {query:?}");
        }
    }

    #[test]
    fn test_filter_agrees_with_field_check() {
        let all = directory();
        for query in ["", "an", "STREET", "oslo", "Doe", "x"] {
            let kept = filter(&all, query);
            let q = query.to_lowercase();
            for p in &all {
                let expected = p.name.to_lowercase().contains(&q)
                    || p.description.to_lowercase().contains(&q)
                    || p.address.to_lowercase().contains(&q);
                assert_eq!(kept.contains(p), expected, "query {query:?}, id {}", p.id);
                assert_eq!(matches(p, query), expected);
            }
        }
    }
}

//! Conversion between the comma-separated interests field of the form and
//! the token list stored on a profile.

use crate::constants::INTEREST_SEPARATOR;

/// Split a comma-separated interests string into trimmed, non-empty tokens.
///
/// Order is preserved and duplicates are kept as typed.
pub fn normalize_interests(raw: &str) -> Vec<String> {
    raw.split(INTEREST_SEPARATOR)
        .map(str::trim)
        .filter(|interest| !interest.is_empty())
        .map(String::from)
        .collect()
}

/// Join stored interests back into the text the form edits.
pub fn join_interests(interests: &[String]) -> String {
    interests.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_empty_tokens() {
        assert_eq!(normalize_interests("a, b ,, c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize_interests("").is_empty());
        assert!(normalize_interests(" , ,  ").is_empty());
    }

    #[test]
    fn test_normalize_keeps_order_and_inner_spaces() {
        assert_eq!(
            normalize_interests("Rock climbing,  UI/UX ,Art"),
            vec!["Rock climbing", "UI/UX", "Art"]
        );
    }

    #[test]
    fn test_join_then_normalize_is_stable() {
        let interests = vec!["Coding".to_string(), "Hiking".to_string()];
        let joined = join_interests(&interests);
        assert_eq!(joined, "Coding, Hiking");
        assert_eq!(normalize_interests(&joined), interests);
    }
}

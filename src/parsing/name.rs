//! Personal name normalization.
//!
//! This module provides the canonical lower-cased, comma-ordered form of a
//! personal name used for equality comparison between rosters.

use std::sync::LazyLock;

use regex::Regex;

static COMMA_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").unwrap());

/// Normalizes a display name for comparison purposes.
///
/// If the input splits on a comma into two non-empty pieces, the result is
/// `"<last>, <first>"` lower-cased, with the comma spacing canonicalized to a
/// single `", "`. Pieces beyond the second are dropped. Anything else is
/// returned lower-cased, unchanged in structure.
///
/// The function is total and idempotent.
///
/// # Examples
///
/// ```
/// use shift_reconciler::parsing::normalize_name;
///
/// assert_eq!(normalize_name("Smith, John"), "smith, john");
/// assert_eq!(normalize_name("Smith,John"), "smith, john");
/// assert_eq!(normalize_name("Madonna"), "madonna");
/// ```
pub fn normalize_name(name: &str) -> String {
    let mut pieces = COMMA_SPLIT_RE.split(name);
    match (pieces.next(), pieces.next()) {
        (Some(last), Some(first)) if !last.is_empty() && !first.is_empty() => {
            format!("{last}, {first}").to_lowercase()
        }
        _ => name.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_last_first_is_lowercased() {
        assert_eq!(normalize_name("Smith, John"), "smith, john");
    }

    #[test]
    fn test_comma_spacing_is_canonicalized() {
        assert_eq!(normalize_name("Smith,John"), "smith, john");
        assert_eq!(normalize_name("Smith,   John"), "smith, john");
    }

    #[test]
    fn test_single_word_falls_back_to_lowercasing() {
        assert_eq!(normalize_name("Madonna"), "madonna");
    }

    #[test]
    fn test_plain_order_name_is_untouched_in_structure() {
        assert_eq!(normalize_name("John Smith"), "john smith");
    }

    #[test]
    fn test_empty_piece_falls_back_to_lowercasing() {
        assert_eq!(normalize_name(", John"), ", john");
        assert_eq!(normalize_name("Smith,, John"), "smith,, john");
    }

    #[test]
    fn test_extra_pieces_are_dropped() {
        assert_eq!(normalize_name("Smith, John, Jr"), "smith, john");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_idempotence_on_known_forms() {
        for name in ["Smith, John", "Smith,John", "Madonna", ", John", ""] {
            let once = normalize_name(name);
            assert_eq!(normalize_name(&once), once);
        }
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(name in ".{0,40}") {
            let once = normalize_name(&name);
            prop_assert_eq!(normalize_name(&once), once.clone());
        }

        #[test]
        fn prop_normalize_is_lowercase(name in "[A-Za-z, ]{0,40}") {
            let normalized = normalize_name(&name);
            prop_assert_eq!(normalized.to_lowercase(), normalized.clone());
        }
    }
}

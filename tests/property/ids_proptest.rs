//! Properties of user ids and group id parsing

use groupnotes::shared::{parse_group_id, UserId};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_any_24_hex_chars_is_valid(id in "[0-9a-fA-F]{24}") {
        prop_assert!(UserId::is_valid(&id));
        let parsed = UserId::parse(&id).unwrap();
        prop_assert_eq!(parsed.to_string(), id.to_ascii_lowercase());
    }

    #[test]
    fn test_wrong_length_is_invalid(id in "[0-9a-f]{0,23}|[0-9a-f]{25,40}") {
        prop_assert!(!UserId::is_valid(&id));
        prop_assert!(UserId::parse(&id).is_err());
    }

    #[test]
    fn test_non_hex_char_is_invalid(prefix in "[0-9a-f]{0,23}", bad in "[g-zG-Z_\\- ]") {
        let mut id = prefix.clone();
        id.push_str(&bad);
        while id.len() < 24 {
            id.push('0');
        }
        prop_assert!(!UserId::is_valid(&id));
    }

    #[test]
    fn test_leading_integer_is_parsed(n in 0i64..1_000_000, suffix in "[a-z ]{0,5}") {
        prop_assert_eq!(parse_group_id(&format!("{}{}", n, suffix)), Some(n));
        prop_assert_eq!(parse_group_id(&format!("  {}", n)), Some(n));
        prop_assert_eq!(parse_group_id(&format!("-{}", n)), Some(-n));
    }

    #[test]
    fn test_no_leading_digit_is_none(text in "[a-zA-Z][a-zA-Z0-9]{0,10}") {
        prop_assert_eq!(parse_group_id(&text), None);
    }
}

#[test]
fn test_generated_ids_are_unique_and_valid() {
    let ids: Vec<UserId> = (0..1000).map(|_| UserId::generate()).collect();
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| UserId::is_valid(&id.to_string())));
}

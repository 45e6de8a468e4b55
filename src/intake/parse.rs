//! Comma-separated list parsing.

/// Split a raw field on commas into trimmed, non-empty items.
///
/// Total over any input: the empty string yields an empty list. Relative
/// order is preserved and duplicates are kept.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input() {
        assert!(parse_list("").is_empty());
        assert!(parse_list("   ").is_empty());
        assert!(parse_list(",,,").is_empty());
    }

    #[test]
    fn test_trims_and_drops_empties() {
        assert_eq!(
            parse_list("  Google ,  , Microsoft  "),
            vec!["Google", "Microsoft"]
        );
    }

    #[test]
    fn test_single_item() {
        assert_eq!(parse_list("OpenAI"), vec!["OpenAI"]);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        assert_eq!(
            parse_list("Meta, Google, Meta"),
            vec!["Meta", "Google", "Meta"]
        );
    }

    #[test]
    fn test_interior_whitespace_kept() {
        assert_eq!(
            parse_list("new grad, entry level"),
            vec!["new grad", "entry level"]
        );
    }

    proptest! {
        /// Re-parsing the canonical rejoin yields the same sequence.
        #[test]
        fn prop_rejoin_idempotent(raw in ".{0,200}") {
            let once = parse_list(&raw);
            let again = parse_list(&once.join(","));
            prop_assert_eq!(once, again);
        }

        /// Every surviving item is non-empty and trimmed.
        #[test]
        fn prop_items_trimmed(raw in ".{0,200}") {
            for item in parse_list(&raw) {
                prop_assert!(!item.is_empty());
                prop_assert_eq!(item.trim(), item.as_str());
            }
        }
    }
}

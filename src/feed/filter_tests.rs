//! Tests for the search filter

use super::*;
use crate::feed::seed::generate_page;
use proptest::prelude::*;

fn two_pages() -> Vec<SuggestionItem> {
    let mut items = generate_page(0);
    items.extend(generate_page(1));
    items
}

#[test]
fn test_normalize_trims_and_lowercases() {
    assert_eq!(normalize_query("  MuSiC \t"), "music");
    assert_eq!(normalize_query("   "), "");
}

#[test]
fn test_filter_by_type() {
    let items = two_pages();
    assert_eq!(filter_indices(&items, "music"), vec![1, 7]);
}

#[test]
fn test_filter_by_title_number() {
    let items = two_pages();
    // "12" only appears in "Recent Searches 12"
    assert_eq!(filter_indices(&items, "12"), vec![11]);
}

#[test]
fn test_filter_matches_across_field_boundary() {
    let items = two_pages();
    // title "Aurora Photos 3" followed by description "Gallery ..."
    assert_eq!(filter_indices(&items, "photos 3 gallery"), vec![2]);
}

#[test]
fn test_filter_with_no_matches_is_empty() {
    let items = two_pages();
    assert!(filter_indices(&items, "zzz-nothing").is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_filter_returns_only_matches_in_store_order(query in "[a-z0-9 ]{1,6}") {
        let items = two_pages();
        let normalized = normalize_query(&query);
        let indices = filter_indices(&items, &normalized);

        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for (idx, item) in items.iter().enumerate() {
            let expected = item.search_text().contains(&normalized);
            prop_assert_eq!(indices.contains(&idx), expected);
        }
    }
}

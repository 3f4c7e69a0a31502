//! Substring search over the store
//!
//! Matching is case-insensitive against `title description type` and never
//! reorders: the result is always a subsequence of the store.

use super::item::SuggestionItem;

/// Trim surrounding whitespace and lowercase
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether an item matches an already-normalized query
pub fn matches(item: &SuggestionItem, normalized: &str) -> bool {
    item.search_text().contains(normalized)
}

/// Store indices of all items matching an already-normalized query, in store order
pub fn filter_indices(items: &[SuggestionItem], normalized: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item, normalized))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;

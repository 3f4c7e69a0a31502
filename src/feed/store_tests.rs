//! Tests for FeedStore

use super::*;
use crate::feed::seed::PAGE_SIZE;

#[test]
fn test_new_store_is_empty() {
    let store = FeedStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.pages_loaded(), 0);
}

#[test]
fn test_append_page_returns_appended_range() {
    let mut store = FeedStore::new();
    assert_eq!(store.append_page(), 0..PAGE_SIZE);
    assert_eq!(store.append_page(), PAGE_SIZE..PAGE_SIZE * 2);
    assert_eq!(store.pages_loaded(), 2);
    assert_eq!(store.len(), 12);
}

#[test]
fn test_append_preserves_existing_items() {
    let mut store = FeedStore::new();
    store.append_page();
    let before: Vec<_> = store.items().to_vec();

    store.append_page();

    assert_eq!(&store.items()[..before.len()], before.as_slice());
    assert_eq!(store.get(6).map(|i| i.title()), Some("Top 10 Travel Spots 7"));
    assert!(store.get(12).is_none());
}

use std::ops::Range;

use super::item::SuggestionItem;
use super::seed::generate_page;

/// Append-only store of every loaded suggestion, in load order
#[derive(Debug, Clone, Default)]
pub struct FeedStore {
    items: Vec<SuggestionItem>,
    pages_loaded: usize,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next generated page and return the index range it occupies
    pub fn append_page(&mut self) -> Range<usize> {
        let start = self.items.len();
        self.items.extend(generate_page(self.pages_loaded));
        self.pages_loaded += 1;
        start..self.items.len()
    }

    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&SuggestionItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;

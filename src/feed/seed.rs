//! Seed template and deterministic page generator
//!
//! Pages are derived from a running item counter by cycling through [`SEED`],
//! so the content of page `n` never depends on anything but `n`.

use super::item::{SuggestionItem, SuggestionKind};

/// Number of items appended per page
pub const PAGE_SIZE: usize = 6;

/// One template row of the seed dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedEntry {
    pub kind: SuggestionKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SEED: [SeedEntry; 6] = [
    SeedEntry {
        kind: SuggestionKind::Video,
        title: "Top 10 Travel Spots",
        description: "Short travel guide video — 3:20",
    },
    SeedEntry {
        kind: SuggestionKind::Music,
        title: "Chill Beats Mix",
        description: "Background music playlist, 40m",
    },
    SeedEntry {
        kind: SuggestionKind::Image,
        title: "Aurora Photos",
        description: "Gallery of northern lights",
    },
    SeedEntry {
        kind: SuggestionKind::Article,
        title: "How to Explore Offline",
        description: "Tips to search when offline",
    },
    SeedEntry {
        kind: SuggestionKind::Wikipedia,
        title: "History of Navigation",
        description: "Wikipedia style summary",
    },
    SeedEntry {
        kind: SuggestionKind::History,
        title: "Recent Searches",
        description: "Your saved search history demo",
    },
];

/// Build the item for a zero-based running counter.
///
/// The title carries the 1-based counter so titles stay unique across pages.
pub fn generate_item(counter: usize) -> SuggestionItem {
    let entry = &SEED[counter % SEED.len()];
    SuggestionItem::new(
        entry.kind,
        format!("{} {}", entry.title, counter + 1),
        entry.description,
    )
}

/// Build the full page that follows `pages_loaded` earlier pages
pub fn generate_page(pages_loaded: usize) -> Vec<SuggestionItem> {
    let first = pages_loaded * PAGE_SIZE;
    (first..first + PAGE_SIZE).map(generate_item).collect()
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod seed_tests;

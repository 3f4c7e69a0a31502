use std::fmt;

use super::filter::{filter_indices, normalize_query};
use super::item::SuggestionItem;
use super::pager::ScrollMetrics;
use super::store::FeedStore;
use crate::render::{Card, cards};

/// Which part of the store is currently rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibleSet {
    /// The whole store, in order
    All,
    /// Ordered store indices matching the active query
    Filtered(Vec<usize>),
}

/// Message shown in the loader/status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Loading,
    ScrollForMore,
    LoadBlocked,
    ServicesEnabled,
    ServicesDisabled,
}

impl StatusLine {
    pub fn message(self) -> &'static str {
        match self {
            StatusLine::Loading => "Loading…",
            StatusLine::ScrollForMore => "Scroll down to load more…",
            StatusLine::LoadBlocked => "Background services off — enable to load more.",
            StatusLine::ServicesEnabled => "Background services enabled — scroll to load more",
            StatusLine::ServicesDisabled => "Background services off — no new content",
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a pagination attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { added: usize },
    /// Background services are off; nothing changed
    Disabled,
}

/// Owns the store, the visible view, the selection cursor and the paging toggle.
///
/// Every operation runs to completion synchronously; the selection, when set,
/// always indexes an element of the current visible set.
#[derive(Debug, Clone)]
pub struct FeedController {
    store: FeedStore,
    visible: VisibleSet,
    selection: Option<usize>,
    background_services: bool,
    status: StatusLine,
    active_query: Option<String>,
}

impl Default for FeedController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FeedController {
    pub fn new(background_services: bool) -> Self {
        Self {
            store: FeedStore::new(),
            visible: VisibleSet::All,
            selection: None,
            background_services,
            status: StatusLine::Loading,
            active_query: None,
        }
    }

    /// Append one generated page and re-render the full store.
    ///
    /// With background services off this only updates the status line.
    pub fn load_more(&mut self) -> LoadOutcome {
        if !self.background_services {
            self.status = StatusLine::LoadBlocked;
            log::debug!("load_more skipped: background services off");
            return LoadOutcome::Disabled;
        }

        self.status = StatusLine::Loading;

        // The full view replaces any filter; keep the cursor on the same item.
        let selected_item = self.selection.and_then(|idx| self.store_index(idx));
        let added = self.store.append_page().len();
        self.visible = VisibleSet::All;
        self.active_query = None;
        self.selection = selected_item;

        self.status = StatusLine::ScrollForMore;
        log::debug!(
            "loaded page {} ({} items in store)",
            self.store.pages_loaded(),
            self.store.len()
        );
        LoadOutcome::Loaded { added }
    }

    /// Filter the store by a case-insensitive substring and reset the selection.
    ///
    /// An empty (or whitespace-only) query shows the whole store. Returns the
    /// number of visible items.
    pub fn search(&mut self, query: &str) -> usize {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            self.visible = VisibleSet::All;
            self.active_query = None;
        } else {
            let indices = filter_indices(self.store.items(), &normalized);
            log::debug!("search {:?}: {} matches", normalized, indices.len());
            self.visible = VisibleSet::Filtered(indices);
            self.active_query = Some(normalized);
        }
        self.selection = None;
        self.visible_len()
    }

    /// Move the cursor to `index` of the visible set; out-of-range is a no-op
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.visible_len() {
            return false;
        }
        self.selection = Some(index);
        true
    }

    /// Select the following visible item, wrapping to the first
    pub fn next_item(&mut self) -> Option<usize> {
        let len = self.visible_len();
        if len == 0 {
            return None;
        }
        let target = match self.selection {
            Some(idx) if idx + 1 < len => idx + 1,
            _ => 0,
        };
        self.select_index(target);
        self.selection
    }

    /// Select the preceding visible item, wrapping to the last
    pub fn prev_item(&mut self) -> Option<usize> {
        let len = self.visible_len();
        if len == 0 {
            return None;
        }
        let target = match self.selection {
            Some(idx) if idx > 0 && idx < len => idx - 1,
            _ => len - 1,
        };
        self.select_index(target);
        self.selection
    }

    /// Level-triggered pagination: every call near the bottom attempts a load
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, threshold: u16) -> Option<LoadOutcome> {
        if metrics.is_near_bottom(threshold) {
            Some(self.load_more())
        } else {
            None
        }
    }

    /// Update the paging toggle. Loaded items are kept either way.
    pub fn set_background_services(&mut self, enabled: bool) {
        self.background_services = enabled;
        self.status = if enabled {
            StatusLine::ServicesEnabled
        } else {
            StatusLine::ServicesDisabled
        };
        log::debug!("background services {}", if enabled { "on" } else { "off" });
    }

    /// Flip the paging toggle and return the new state
    pub fn toggle_background_services(&mut self) -> bool {
        self.set_background_services(!self.background_services);
        self.background_services
    }

    pub fn background_services(&self) -> bool {
        self.background_services
    }

    pub fn status(&self) -> StatusLine {
        self.status
    }

    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The normalized query behind the current filter, if any
    pub fn active_query(&self) -> Option<&str> {
        self.active_query.as_deref()
    }

    pub fn visible_len(&self) -> usize {
        match &self.visible {
            VisibleSet::All => self.store.len(),
            VisibleSet::Filtered(indices) => indices.len(),
        }
    }

    /// Map a visible position to its store index
    pub fn store_index(&self, visible_index: usize) -> Option<usize> {
        match &self.visible {
            VisibleSet::All => (visible_index < self.store.len()).then_some(visible_index),
            VisibleSet::Filtered(indices) => indices.get(visible_index).copied(),
        }
    }

    pub fn visible_items(&self) -> Vec<&SuggestionItem> {
        match &self.visible {
            VisibleSet::All => self.store.items().iter().collect(),
            VisibleSet::Filtered(indices) => indices
                .iter()
                .filter_map(|&idx| self.store.get(idx))
                .collect(),
        }
    }

    pub fn selected_item(&self) -> Option<&SuggestionItem> {
        self.selection
            .and_then(|idx| self.store_index(idx))
            .and_then(|idx| self.store.get(idx))
    }

    /// Project the visible set into display cards
    pub fn cards(&self) -> Vec<Card<'_>> {
        cards(self.visible_items(), self.selection)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;

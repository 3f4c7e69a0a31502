use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::config::Config;
use crate::device_code;
use crate::feed::{FeedController, LoadOutcome, ScrollMetrics};
use crate::help::HelpState;
use crate::layout::LayoutRegions;
use crate::scroll::ScrollState;

/// Rows per card in the feed pane: type, title, description and a spacer
pub const CARD_HEIGHT: u16 = 4;

/// Rows moved per mouse wheel tick
pub const SCROLL_STEP: u16 = 3;

/// Which component receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchInput,
    Feed,
}

/// Where a scroll event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSource {
    /// The feed pane itself
    Container,
    /// Anywhere else on screen; measured against the whole terminal
    Window,
}

/// Creates a TextArea configured for the single-line query field.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text("Search videos, music, images, articles…");
    textarea
}

/// Application state
pub struct App {
    pub feed: FeedController,
    pub input: TextArea<'static>,
    pub focus: Focus,
    pub feed_scroll: ScrollState,
    pub help: HelpState,
    pub layout_regions: LayoutRegions,
    pub terminal_height: u16,
    pub should_quit: bool,
    device_code: String,
    show_device_code: bool,
    load_threshold: u16,
}

impl App {
    /// Create the app with a freshly generated device code
    pub fn new(config: &Config) -> Self {
        Self::with_device_code(config, device_code::generate())
    }

    /// Create the app and run the configured number of startup loads
    pub fn with_device_code(config: &Config, device_code: String) -> Self {
        let mut feed = FeedController::new(config.feed.background_services);
        for _ in 0..config.feed.initial_pages {
            feed.load_more();
        }

        log::debug!(
            "app started with {} items, device code {}",
            feed.store().len(),
            device_code
        );

        Self {
            feed,
            input: create_search_textarea(),
            focus: Focus::Feed,
            feed_scroll: ScrollState::new(),
            help: HelpState::new(),
            layout_regions: LayoutRegions::new(),
            terminal_height: 0,
            should_quit: false,
            device_code,
            show_device_code: config.ui.show_device_code,
            load_threshold: config.feed.load_threshold,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The startup code, unless hidden by config
    pub fn device_code(&self) -> Option<&str> {
        self.show_device_code.then_some(self.device_code.as_str())
    }

    /// Current text of the query field
    pub fn query(&self) -> &str {
        self.input
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn load_threshold(&self) -> u16 {
        self.load_threshold
    }

    /// Total rows the visible cards occupy
    pub fn feed_content_height(&self) -> u32 {
        self.feed.visible_len() as u32 * CARD_HEIGHT as u32
    }

    /// Recompute scroll bounds after the visible set changed
    pub fn sync_feed_bounds(&mut self) {
        let viewport = self.feed_scroll.viewport_height;
        let content_height = self.feed_content_height();
        self.feed_scroll.update_bounds(content_height, viewport);
    }

    /// Run the search for the current query text and scroll back to the top
    pub fn submit_search(&mut self) {
        let query = self.query().to_string();
        self.feed.search(&query);
        self.sync_feed_bounds();
        self.feed_scroll.jump_to_top();
    }

    /// Select a visible card and center it; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if !self.feed.select_index(index) {
            return false;
        }
        self.reveal_selection();
        true
    }

    pub fn next_item(&mut self) {
        if self.feed.next_item().is_some() {
            self.reveal_selection();
        }
    }

    pub fn prev_item(&mut self) {
        if self.feed.prev_item().is_some() {
            self.reveal_selection();
        }
    }

    fn reveal_selection(&mut self) {
        if let Some(idx) = self.feed.selection() {
            self.feed_scroll
                .center_on(idx as u32 * CARD_HEIGHT as u32, CARD_HEIGHT);
        }
    }

    pub fn load_more(&mut self) -> LoadOutcome {
        let outcome = self.feed.load_more();
        self.sync_feed_bounds();
        outcome
    }

    pub fn toggle_background_services(&mut self) {
        self.feed.toggle_background_services();
    }

    pub fn scroll_down(&mut self, lines: u16, source: ScrollSource) {
        self.feed_scroll.scroll_down(lines);
        self.on_scroll(source);
    }

    pub fn scroll_up(&mut self, lines: u16, source: ScrollSource) {
        self.feed_scroll.scroll_up(lines);
        self.on_scroll(source);
    }

    pub fn page_down(&mut self) {
        self.feed_scroll.page_down();
        self.on_scroll(ScrollSource::Container);
    }

    pub fn page_up(&mut self) {
        self.feed_scroll.page_up();
        self.on_scroll(ScrollSource::Container);
    }

    pub fn scroll_to_top(&mut self) {
        self.feed_scroll.jump_to_top();
        self.on_scroll(ScrollSource::Container);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.feed_scroll.jump_to_bottom();
        self.on_scroll(ScrollSource::Container);
    }

    /// Pagination check run after every scroll event
    pub fn on_scroll(&mut self, source: ScrollSource) {
        let metrics = match source {
            ScrollSource::Container => self.feed_scroll.metrics(),
            ScrollSource::Window => self.window_metrics(),
        };
        if self.feed.on_scroll(metrics, self.load_threshold).is_some() {
            self.sync_feed_bounds();
        }
    }

    /// Whole-screen geometry: the feed plus the fixed rows around it
    pub fn window_metrics(&self) -> ScrollMetrics {
        let chrome = self
            .terminal_height
            .saturating_sub(self.feed_scroll.viewport_height) as u32;
        ScrollMetrics::new(
            self.feed_scroll.offset as u32,
            self.terminal_height as u32,
            self.feed_content_height() + chrome,
        )
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

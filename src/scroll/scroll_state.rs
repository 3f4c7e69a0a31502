use crate::feed::ScrollMetrics;

/// Vertical scroll position of the feed pane, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
    pub content_height: u32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
            content_height: 0,
        }
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.content_height = content_lines;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        let half_page = (self.viewport_height / 2).max(1);
        self.scroll_down(half_page);
    }

    pub fn page_up(&mut self) {
        let half_page = (self.viewport_height / 2).max(1);
        self.scroll_up(half_page);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Scroll so that the block `[start, start + height)` sits in the middle of the viewport
    pub fn center_on(&mut self, start: u32, height: u16) {
        let middle = start.saturating_add(height as u32 / 2);
        let target = middle.saturating_sub(self.viewport_height as u32 / 2);
        self.offset = target.min(self.max_offset as u32) as u16;
    }

    /// Geometry of the pane for the pagination check
    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            self.offset as u32,
            self.viewport_height as u32,
            self.content_height,
        )
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;

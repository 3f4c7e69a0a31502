//! Scroll-triggered pagination check

/// Default distance from the bottom (in rows) that triggers loading another page
pub const DEFAULT_LOAD_THRESHOLD: u16 = 4;

/// Scroll geometry of a scrollable surface, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: u32,
    pub client_height: u32,
    pub scroll_height: u32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: u32, client_height: u32, scroll_height: u32) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// True when the viewport bottom is within `threshold` rows of the content end
    pub fn is_near_bottom(&self, threshold: u16) -> bool {
        self.scroll_top.saturating_add(self.client_height)
            >= self.scroll_height.saturating_sub(threshold as u32)
    }
}

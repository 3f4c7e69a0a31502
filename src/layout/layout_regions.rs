use ratatui::layout::Rect;

/// Clickable or scrollable component of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    SearchInput,
    SearchButton,
    FeedPane,
    PrevButton,
    NextButton,
    ServicesToggle,
    StatusLine,
    HelpPopup,
}

/// Areas of the last rendered frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub header: Option<Rect>,
    pub search_input: Option<Rect>,
    pub search_button: Option<Rect>,
    pub feed_pane: Option<Rect>,
    /// Inner area of the feed pane where card lines are drawn
    pub feed_content: Option<Rect>,
    pub prev_button: Option<Rect>,
    pub next_button: Option<Rect>,
    pub services_toggle: Option<Rect>,
    pub status_line: Option<Rect>,
    pub help_popup: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

//! Mouse click handling
//!
//! Routes left clicks to buttons, the toggle, the query field and feed cards.

use super::app_state::{App, CARD_HEIGHT, Focus};
use crate::layout::Region;

/// Handle left mouse button click at `row` inside the given region
pub fn handle_click(app: &mut App, region: Option<Region>, row: u16) {
    if app.help.visible {
        if region != Some(Region::HelpPopup) {
            app.help.close();
        }
        return;
    }

    match region {
        Some(Region::SearchInput) => app.focus = Focus::SearchInput,
        Some(Region::SearchButton) => app.submit_search(),
        Some(Region::FeedPane) => click_feed(app, row),
        Some(Region::PrevButton) => app.prev_item(),
        Some(Region::NextButton) => app.next_item(),
        Some(Region::ServicesToggle) => app.toggle_background_services(),
        _ => {}
    }
}

fn click_feed(app: &mut App, row: u16) {
    app.focus = Focus::Feed;

    let Some(content) = app.layout_regions.feed_content else {
        return;
    };
    if row < content.y || row >= content.y.saturating_add(content.height) {
        return;
    }

    let line = app.feed_scroll.offset as u32 + (row - content.y) as u32;
    let card_height = CARD_HEIGHT as u32;
    // Spacer row between cards
    if line % card_height == card_height - 1 {
        return;
    }
    app.select((line / card_height) as usize);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;

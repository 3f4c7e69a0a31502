//! Tests for App state

use super::*;
use crate::config::Config;
use crate::feed::{StatusLine, VisibleSet};
use crate::test_utils::test_helpers::{
    TEST_DEVICE_CODE, render_to_string, rendered_app, test_app, test_app_with,
};

#[test]
fn test_new_app_loads_two_pages() {
    let app = test_app();
    assert_eq!(app.feed.store().len(), 12);
    assert_eq!(app.feed.status(), StatusLine::ScrollForMore);
    assert_eq!(app.feed.selection(), None);
    assert_eq!(app.focus, Focus::Feed);
    assert!(!app.should_quit());
}

#[test]
fn test_device_code_shown_unless_disabled() {
    let app = test_app();
    assert_eq!(app.device_code(), Some(TEST_DEVICE_CODE));

    let mut config = Config::default();
    config.ui.show_device_code = false;
    assert_eq!(test_app_with(&config).device_code(), None);
}

#[test]
fn test_generated_device_code_is_fixed_for_app_lifetime() {
    let mut app = App::new(&Config::default());
    let code = app.device_code().map(str::to_string);
    app.load_more();
    app.submit_search();
    assert_eq!(app.device_code().map(str::to_string), code);
}

#[test]
fn test_startup_with_services_off_loads_nothing() {
    let mut config = Config::default();
    config.feed.background_services = false;
    let app = test_app_with(&config);
    assert_eq!(app.feed.store().len(), 0);
    assert_eq!(app.feed.status(), StatusLine::LoadBlocked);
}

#[test]
fn test_configured_initial_pages() {
    let mut config = Config::default();
    config.feed.initial_pages = 4;
    assert_eq!(test_app_with(&config).feed.store().len(), 24);
}

#[test]
fn test_submit_search_uses_query_text_and_resets_scroll() {
    let mut app = rendered_app();
    app.feed_scroll.scroll_down(10);
    app.input.insert_str("music");

    app.submit_search();

    assert_eq!(app.feed.visible_len(), 2);
    assert_eq!(app.feed_scroll.offset, 0);
    assert_eq!(app.feed_scroll.max_offset, 0);
}

#[test]
fn test_select_centers_card() {
    let mut app = rendered_app();
    assert_eq!(app.feed_scroll.viewport_height, 16);

    assert!(app.select(6));

    // card 6 spans rows 24..28; its middle (26) sits at the viewport middle
    assert_eq!(app.feed_scroll.offset, 18);
}

#[test]
fn test_select_out_of_range_keeps_scroll() {
    let mut app = rendered_app();
    app.feed_scroll.scroll_down(5);
    assert!(!app.select(99));
    assert_eq!(app.feed_scroll.offset, 5);
    assert_eq!(app.feed.selection(), None);
}

#[test]
fn test_next_from_no_selection_selects_first_card() {
    let mut app = rendered_app();
    app.next_item();
    assert_eq!(app.feed.selection(), Some(0));
    assert_eq!(app.feed_scroll.offset, 0);
}

#[test]
fn test_prev_from_no_selection_selects_last_and_scrolls() {
    let mut app = rendered_app();
    app.prev_item();
    assert_eq!(app.feed.selection(), Some(11));
    assert_eq!(app.feed_scroll.offset, app.feed_scroll.max_offset);
}

#[test]
fn test_scroll_far_from_bottom_does_not_load() {
    let mut app = rendered_app();
    app.scroll_down(SCROLL_STEP, ScrollSource::Container);
    assert_eq!(app.feed.store().len(), 12);
}

#[test]
fn test_scroll_to_bottom_loads_each_time() {
    let mut app = rendered_app();

    app.scroll_to_bottom();
    assert_eq!(app.feed.store().len(), 18);
    assert_eq!(app.feed_scroll.max_offset, 72 - 16);

    app.scroll_to_bottom();
    assert_eq!(app.feed.store().len(), 24);
}

#[test]
fn test_scroll_near_bottom_with_services_off_keeps_store() {
    let mut app = rendered_app();
    app.toggle_background_services();

    app.scroll_to_bottom();

    assert_eq!(app.feed.store().len(), 12);
    assert_eq!(app.feed.status(), StatusLine::LoadBlocked);
}

#[test]
fn test_window_scroll_loads_when_feed_fits_on_screen() {
    let mut app = test_app();
    render_to_string(&mut app, 80, 80);

    app.scroll_down(SCROLL_STEP, ScrollSource::Window);

    assert_eq!(app.feed.store().len(), 18);
}

#[test]
fn test_window_metrics_include_chrome() {
    let app = rendered_app();
    let metrics = app.window_metrics();
    assert_eq!(metrics.client_height, 24);
    assert_eq!(metrics.scroll_height, 48 + 8);
}

#[test]
fn test_load_more_while_filtered_shows_full_store() {
    let mut app = rendered_app();
    app.input.insert_str("aurora");
    app.submit_search();
    assert_eq!(app.feed.visible_len(), 2);

    app.load_more();

    assert_eq!(app.feed.visible(), &VisibleSet::All);
    assert_eq!(app.feed_content_height(), 18 * CARD_HEIGHT as u32);
}

use super::*;

fn state(content: u32, viewport: u16) -> ScrollState {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(content, viewport);
    scroll
}

#[test]
fn test_update_bounds_clamps_offset() {
    let mut scroll = state(100, 20);
    assert_eq!(scroll.max_offset, 80);
    scroll.jump_to_bottom();
    scroll.update_bounds(50, 20);
    assert_eq!(scroll.offset, 30);
}

#[test]
fn test_content_shorter_than_viewport() {
    let mut scroll = state(10, 20);
    assert_eq!(scroll.max_offset, 0);
    scroll.scroll_down(5);
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_scroll_up_and_down_saturate() {
    let mut scroll = state(100, 20);
    scroll.scroll_down(500);
    assert_eq!(scroll.offset, 80);
    scroll.scroll_up(500);
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_page_moves_half_viewport() {
    let mut scroll = state(100, 20);
    scroll.page_down();
    assert_eq!(scroll.offset, 10);
    scroll.page_up();
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_center_on_middle_of_content() {
    let mut scroll = state(100, 20);
    scroll.center_on(40, 4);
    assert_eq!(scroll.offset, 32);
}

#[test]
fn test_center_on_clamps_at_edges() {
    let mut scroll = state(100, 20);
    scroll.center_on(0, 4);
    assert_eq!(scroll.offset, 0);
    scroll.center_on(96, 4);
    assert_eq!(scroll.offset, 80);
}

#[test]
fn test_metrics_reflect_position() {
    let mut scroll = state(48, 20);
    scroll.scroll_down(10);
    assert_eq!(scroll.metrics(), ScrollMetrics::new(10, 20, 48));
}

//! Terminal application
//!
//! [`App`] owns the feed controller together with the terminal-only state
//! (query input, focus, scroll position, layout regions) and maps key and
//! mouse events onto feed operations.

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

pub use app_state::{App, CARD_HEIGHT, Focus, SCROLL_STEP, ScrollSource};

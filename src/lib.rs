//! sugfeed: an interactive terminal feed of search suggestions.
//!
//! The feed is backed by a deterministic in-memory seed dataset. It supports
//! substring filtering, wrap-around navigation and scroll-triggered
//! pagination that can be switched off with the background-services toggle.

pub mod app;
pub mod config;
pub mod device_code;
pub mod error;
pub mod feed;
pub mod help;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod theme;
pub mod widgets;

mod test_utils;

pub use error::FeedError;

//! Feed module
//!
//! Owns the suggestion store, the seed-driven pager, the search filter and the
//! selection cursor. Everything here is pure in-memory state; the terminal
//! surface in `app` only calls into [`FeedController`].

mod controller;
pub mod filter;
mod item;
pub mod pager;
pub mod seed;
mod store;

pub use controller::{FeedController, LoadOutcome, StatusLine, VisibleSet};
pub use item::{SuggestionItem, SuggestionKind};
pub use pager::{DEFAULT_LOAD_THRESHOLD, ScrollMetrics};
pub use seed::PAGE_SIZE;
pub use store::FeedStore;

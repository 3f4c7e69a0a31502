//! Card projection and HTML markup
//!
//! [`cards`] turns any ordered list of items into display cards; the terminal
//! view and the [`html`] exporter both draw from that projection.

mod card;
pub mod html;

pub use card::{Card, cards};
pub use html::escape_html;

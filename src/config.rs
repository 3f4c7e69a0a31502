//! Configuration module
//!
//! Reads `~/.config/sugfeed/config.toml`. Every field is optional; a missing
//! file yields defaults and a malformed one yields defaults plus a warning.

mod config_loader;
mod types;

pub use config_loader::{ConfigResult, config_path, load_config, load_config_from_path};
pub use types::{Config, FeedConfig, UiConfig};

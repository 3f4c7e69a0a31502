// Configuration type definitions

use serde::Deserialize;

use crate::feed::DEFAULT_LOAD_THRESHOLD;

pub const DEFAULT_INITIAL_PAGES: usize = 2;

fn default_true() -> bool {
    true
}

fn default_initial_pages() -> usize {
    DEFAULT_INITIAL_PAGES
}

fn default_load_threshold() -> u16 {
    DEFAULT_LOAD_THRESHOLD
}

/// Feed behaviour section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// Start with background services (pagination) enabled
    #[serde(default = "default_true")]
    pub background_services: bool,
    /// Pages loaded automatically at startup
    #[serde(default = "default_initial_pages")]
    pub initial_pages: usize,
    /// Rows from the bottom of the feed that trigger loading another page
    #[serde(default = "default_load_threshold")]
    pub load_threshold: u16,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            background_services: true,
            initial_pages: DEFAULT_INITIAL_PAGES,
            load_threshold: DEFAULT_LOAD_THRESHOLD,
        }
    }
}

/// Display section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_device_code: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_device_code: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for sugfeed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid config file {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

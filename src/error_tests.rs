//! Tests for FeedError type

use super::*;

#[test]
fn test_invalid_config_error_display() {
    let error = FeedError::InvalidConfig {
        path: PathBuf::from("/tmp/sugfeed/config.toml"),
        message: "expected `=`".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("Invalid config file"));
    assert!(msg.contains("/tmp/sugfeed/config.toml"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = FeedError::from(io_err);
    assert!(matches!(err, FeedError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = FeedError::InvalidConfig {
        path: PathBuf::from("x.toml"),
        message: String::new(),
    };
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("InvalidConfig"));
}

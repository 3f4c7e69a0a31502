use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::FeedError;

const CONFIG_DIR: &str = "sugfeed";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning to surface when the file was unusable
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from `path`, or from the default location when `None`.
///
/// Never fails: problems fall back to defaults with a warning.
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                return ConfigResult {
                    config: Config::default(),
                    warning: None,
                };
            }
        },
    };

    match load_config_from_path(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Read and parse a config file. A missing file is not an error.
pub fn load_config_from_path(path: &Path) -> Result<Config, FeedError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(FeedError::Io(e)),
    };

    toml::from_str::<Config>(&contents).map_err(|e| FeedError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "config_loader_tests.rs"]
mod config_loader_tests;

// SPDX-License-Identifier: MPL-2.0
//! This module handles the component's configuration, including loading and saving
//! user preferences to a `banner.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_banner::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.duration_secs = Some(4.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{DEFAULT_DURATION_SECS, DEFAULT_SCREEN_WIDTH};

const CONFIG_FILE: &str = "banner.toml";
const APP_NAME: &str = "IcedBanner";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Display time in seconds; zero or negative disables auto-dismiss.
    pub duration_secs: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_secs: Some(DEFAULT_DURATION_SECS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_carries_the_default_duration() {
        let config = Config::default();
        assert_eq!(config.duration_secs, Some(DEFAULT_DURATION_SECS));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("banner.toml");

        let config = Config {
            duration_secs: Some(4.0),
        };
        save_to_path(&config, &path).expect("save");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.duration_secs, Some(4.0));
    }

    #[test]
    fn zero_duration_survives_the_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("banner.toml");

        save_to_path(
            &Config {
                duration_secs: Some(0.0),
            },
            &path,
        )
        .expect("save");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.duration_secs, Some(0.0));
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("banner.toml");
        fs::write(&path, "not valid toml {{{{").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.duration_secs, Some(DEFAULT_DURATION_SECS));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("absent.toml");
        assert!(load_from_path(&path).is_err());
    }
}

//! Runtime configuration
//!
//! Settings are read from JSON. Any field left out of the file keeps its
//! default, so a config file only needs the values it changes.
//!
//! Lookup order (first existing file wins):
//! 1. `<config dir>/item_cell_icon/config.json` (per-user override)
//! 2. `config.json` in the working directory
//!
//! With neither present the defaults are used.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::gfx::Color;

const APP_DIR: &str = "item_cell_icon";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,

    /// Directory holding the manifest and module texture folders
    pub asset_root: PathBuf,

    /// Manifest file name, relative to `asset_root`
    pub manifest: String,

    /// flexi_logger spec, e.g. `info` or `item_cell_icon=debug`
    pub log_level: String,

    /// Edge length of one inventory cell in pixels
    pub cell_size: f32,
    pub cell_spacing: f32,

    pub background: Color,
    pub slot_color: Color,
    pub label_color: Color,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            window_title: "Item Cells".to_string(),
            window_width: 640,
            window_height: 200,
            asset_root: PathBuf::from("assets"),
            manifest: "manifest.json".to_string(),
            log_level: "info".to_string(),
            cell_size: 40.0,
            cell_spacing: 8.0,
            background: Color::rgb(25, 25, 35),
            slot_color: Color::rgb(50, 50, 60),
            label_color: Color::WHITE,
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the first config file found, or the defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        let candidates = user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(CONFIG_FILE)));

        for path in candidates {
            if path.exists() {
                let config = Self::load_from_file(&path)?;
                info!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.asset_root.join(&self.manifest)
    }
}

/// Per-user config file location, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Error types for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Config parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

//! Settings file management

use crate::domain::Settings;
use crate::error::{Result, WtrackError};
use std::fs;
use std::path::Path;

/// Name of the data directory marking a wtrack root
pub const DATA_DIR: &str = ".wtrack";

pub const SETTINGS_FILE: &str = "settings.toml";

/// Load settings from .wtrack/settings.toml in the given directory
pub fn load_from_dir(path: &Path) -> Result<Settings> {
    let settings_path = path.join(DATA_DIR).join(SETTINGS_FILE);

    let contents = fs::read_to_string(&settings_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WtrackError::NotInitialized(path.to_path_buf())
        } else {
            WtrackError::Io(e)
        }
    })?;

    toml::from_str(&contents)
        .map_err(|e| WtrackError::Config(format!("Failed to parse {}: {}", SETTINGS_FILE, e)))
}

/// Render settings as the TOML stored on disk
pub fn to_toml(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings)
        .map_err(|e| WtrackError::Config(format!("Failed to serialize settings: {}", e)))
}

//! Error types for wtrack

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wtrack
#[derive(Debug, Error)]
pub enum WtrackError {
    #[error("Not a wtrack directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Invalid date reference: {0}")]
    InvalidDateReference(String),

    #[error("No entry #{0}")]
    EntryNotFound(usize),

    #[error("{0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WtrackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WtrackError::NotInitialized(_) => 2,
            WtrackError::InvalidDateReference(_) => 3,
            WtrackError::EntryNotFound(_) => 4,
            WtrackError::InvalidInput(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WtrackError::NotInitialized(path) => {
                format!(
                    "Not a wtrack directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'wtrack init' in this directory to start tracking\n\
                    • Navigate to an existing wtrack directory\n\
                    • Set WTRACK_ROOT environment variable to your data directory",
                    path.display()
                )
            }
            WtrackError::InvalidDateReference(ref_str) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD or DD-MM-YYYY\n\n\
                    Examples:\n\
                    wtrack add 72.4 --date yesterday\n\
                    wtrack add 72.4 --date 2025-01-15",
                    ref_str
                )
            }
            WtrackError::EntryNotFound(n) => {
                format!(
                    "No entry #{}\n\n\
                    Suggestions:\n\
                    • Use 'wtrack history' to see entry numbers\n\
                    • Entries are numbered from 1, newest first",
                    n
                )
            }
            WtrackError::InvalidInput(msg) => {
                if msg.contains("unit system") {
                    format!(
                        "{}\n\n\
                        Valid unit systems: metric, imperial\n\
                        Example: wtrack settings unit imperial",
                        msg
                    )
                } else if msg.contains("gender") {
                    format!(
                        "{}\n\n\
                        Valid values: male, female, other\n\
                        Example: wtrack settings gender female",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WtrackError
pub type Result<T> = std::result::Result<T, WtrackError>;

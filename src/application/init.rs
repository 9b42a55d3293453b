//! Initialize tracker use case

use crate::domain::{Settings, UnitSystem};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TrackerRepository};
use log::info;
use std::fs;
use std::path::Path;

/// Service for creating a new data directory
pub struct InitService;

impl InitService {
    /// Create .wtrack/ under `path` with default settings in `unit`
    pub fn execute(path: &Path, unit: UnitSystem) -> Result<FileSystemRepository> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize(&Settings::new(unit))?;

        info!("initialized {} ({})", path.display(), unit);
        Ok(repo)
    }
}

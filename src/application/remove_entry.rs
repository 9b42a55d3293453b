//! Remove entry use case

use crate::domain::WeightEntry;
use crate::error::{Result, WtrackError};
use crate::infrastructure::{FileSystemRepository, TrackerRepository};
use log::info;

pub struct RemoveEntryService {
    repository: FileSystemRepository,
}

impl RemoveEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        RemoveEntryService { repository }
    }

    /// Remove the entry shown as `number` in the history (1 = newest)
    pub fn execute(&self, number: usize) -> Result<WeightEntry> {
        let mut store = self.repository.load_store()?;

        let removed = number
            .checked_sub(1)
            .and_then(|index| store.remove_entry(index))
            .ok_or(WtrackError::EntryNotFound(number))?;

        self.repository.save_store(&store)?;
        info!("removed entry #{} dated {}", number, removed.date);
        Ok(removed)
    }
}

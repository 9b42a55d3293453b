//! Add entry use case

use crate::domain::format::parse_weight;
use crate::domain::{DateReference, WeightEntry};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TrackerRepository};
use chrono::NaiveDate;
use log::info;

/// Service for logging a new weight measurement
pub struct AddEntryService {
    repository: FileSystemRepository,
}

impl AddEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AddEntryService { repository }
    }

    /// Validate the input and insert the entry at the front of the list.
    ///
    /// The weight may carry its own unit suffix; otherwise the profile's
    /// unit system is used. `date` defaults to `today`.
    pub fn execute(
        &self,
        weight: &str,
        date: Option<&str>,
        today: NaiveDate,
    ) -> Result<WeightEntry> {
        let settings = self.repository.load_settings()?;
        let (value, explicit_unit) = parse_weight(weight)?;

        let date = match date {
            Some(reference) => DateReference::parse(reference)?.resolve(today),
            None => today,
        };

        let entry = WeightEntry::new(
            date,
            value,
            explicit_unit.unwrap_or(settings.unit_system),
        );

        let mut store = self.repository.load_store()?;
        store.add_entry(entry);
        self.repository.save_store(&store)?;

        info!(
            "added {} {} on {} ({} entries)",
            entry.weight,
            entry.unit.weight_label(),
            entry.date,
            store.len()
        );
        Ok(entry)
    }
}

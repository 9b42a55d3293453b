//! History listing use case

use crate::domain::{UnitSystem, WeightEntry};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TrackerRepository};
use chrono::NaiveDate;

/// One line of the history list
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    /// 1-based position, newest first
    pub number: usize,
    pub date: NaiveDate,
    /// Weight in the display unit
    pub weight: f64,
    /// Change from the entry below this one; `None` for the oldest
    pub change: Option<f64>,
}

/// Build history rows for `entries` (newest first), expressed in `unit`
pub fn history_rows(entries: &[WeightEntry], unit: UnitSystem) -> Vec<HistoryRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let weight = entry.weight_in(unit);
            HistoryRow {
                number: i + 1,
                date: entry.date,
                weight,
                change: entries.get(i + 1).map(|prev| weight - prev.weight_in(unit)),
            }
        })
        .collect()
}

pub struct HistoryService {
    repository: FileSystemRepository,
}

impl HistoryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        HistoryService { repository }
    }

    /// All entries as display rows, with the unit they are expressed in
    pub fn execute(&self) -> Result<(Vec<HistoryRow>, UnitSystem)> {
        let settings = self.repository.load_settings()?;
        let store = self.repository.load_store()?;
        let unit = settings.unit_system;
        Ok((history_rows(store.entries(), unit), unit))
    }
}

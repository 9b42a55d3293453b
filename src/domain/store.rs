//! Weight entry store and derived statistics
//!
//! Entries are kept in insertion order with the most recently added entry at
//! index 0. Nothing re-sorts by date: an entry logged for a past date after
//! newer ones still lands at the front. The statistics below inherit that
//! ordering ("latest" is the last one added, "oldest" the first one added).
//!
//! Every statistic returns `0.0` when it cannot be computed.

use crate::domain::{Settings, UnitSystem, WeightEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightStore {
    #[serde(default, rename = "entry")]
    entries: Vec<WeightEntry>,
}

impl WeightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from entries already in list order (newest first)
    pub fn from_entries(entries: Vec<WeightEntry>) -> Self {
        WeightStore { entries }
    }

    /// Insert at the front so the newest entry comes first
    pub fn add_entry(&mut self, entry: WeightEntry) {
        self.entries.insert(0, entry);
    }

    /// Remove the entry at `index`; returns `None` when out of range
    pub fn remove_entry(&mut self, index: usize) -> Option<WeightEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&WeightEntry> {
        self.entries.first()
    }

    pub fn previous(&self) -> Option<&WeightEntry> {
        self.entries.get(1)
    }

    /// BMI of the latest entry: weight(kg) / height(m)²
    pub fn bmi(&self, settings: &Settings) -> f64 {
        let unit = settings.unit_system;
        let latest = match self.latest() {
            Some(entry) if settings.height > 0.0 => entry,
            _ => return 0.0,
        };

        let weight_kg = unit.weight_to_kg(latest.weight_in(unit));
        let height_m = unit.height_to_m(settings.height);
        if height_m <= 0.0 {
            return 0.0;
        }
        weight_kg / (height_m * height_m)
    }

    /// Change per week between the first and last entries of the list
    pub fn average_weekly_change(&self, unit: UnitSystem) -> f64 {
        let (newest, oldest) = match (self.entries.first(), self.entries.last()) {
            (Some(newest), Some(oldest)) if self.entries.len() >= 2 => (newest, oldest),
            _ => return 0.0,
        };

        let weeks = (newest.date - oldest.date).num_days() as f64 / 7.0;
        if weeks <= 0.0 {
            return 0.0;
        }
        (newest.weight_in(unit) - oldest.weight_in(unit)) / weeks
    }

    /// Latest weight minus the beginning weight from the profile
    pub fn total_change(&self, settings: &Settings) -> f64 {
        match self.latest() {
            Some(latest) if settings.beginning_weight > 0.0 => {
                latest.weight_in(settings.unit_system) - settings.beginning_weight
            }
            _ => 0.0,
        }
    }

    /// Difference between the two most recently added entries
    pub fn last_change(&self, unit: UnitSystem) -> f64 {
        match (self.latest(), self.previous()) {
            (Some(latest), Some(previous)) => latest.weight_in(unit) - previous.weight_in(unit),
            _ => 0.0,
        }
    }

    /// Latest weight minus the goal weight; positive means still above goal
    pub fn goal_remaining(&self, settings: &Settings) -> f64 {
        match self.latest() {
            Some(latest) if settings.goal_weight > 0.0 => {
                latest.weight_in(settings.unit_system) - settings.goal_weight
            }
            _ => 0.0,
        }
    }
}

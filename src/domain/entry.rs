//! Weight entry model

use crate::domain::UnitSystem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated weight measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight: f64,
    pub unit: UnitSystem,
}

impl WeightEntry {
    pub fn new(date: NaiveDate, weight: f64, unit: UnitSystem) -> Self {
        WeightEntry { date, weight, unit }
    }

    /// Weight expressed in the given unit system
    pub fn weight_in(&self, target: UnitSystem) -> f64 {
        self.unit.convert_weight(self.weight, target)
    }
}

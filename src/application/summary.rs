//! Dashboard summary use case

use crate::domain::{Settings, UnitSystem, WeightEntry, WeightStore};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TrackerRepository};

/// Everything shown on the summary screen. Zero statistics are unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub unit: UnitSystem,
    pub entry_count: usize,
    pub latest: Option<WeightEntry>,
    /// Only present with at least two entries
    pub last_change: Option<f64>,
    pub bmi: f64,
    pub average_weekly_change: f64,
    pub total_change: f64,
    pub goal_weight: f64,
    pub goal_date: String,
    pub goal_remaining: f64,
}

impl Summary {
    pub fn compute(store: &WeightStore, settings: &Settings) -> Self {
        let unit = settings.unit_system;
        Summary {
            unit,
            entry_count: store.len(),
            latest: store.latest().copied(),
            last_change: store.previous().map(|_| store.last_change(unit)),
            bmi: store.bmi(settings),
            average_weekly_change: store.average_weekly_change(unit),
            total_change: store.total_change(settings),
            goal_weight: settings.goal_weight,
            goal_date: settings.goal_date.clone(),
            goal_remaining: store.goal_remaining(settings),
        }
    }
}

pub struct SummaryService {
    repository: FileSystemRepository,
}

impl SummaryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SummaryService { repository }
    }

    pub fn execute(&self) -> Result<Summary> {
        let settings = self.repository.load_settings()?;
        let store = self.repository.load_store()?;
        Ok(Summary::compute(&store, &settings))
    }
}

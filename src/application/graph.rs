//! Trend graph use case

use crate::domain::{Canvas, GraphLayout, TimeWindow, UnitSystem};
use crate::error::{Result, WtrackError};
use crate::infrastructure::{FileSystemRepository, TrackerRepository};
use chrono::NaiveDate;
use log::debug;

/// Laid-out graph for one time window
#[derive(Debug, Clone)]
pub struct GraphView {
    pub window: TimeWindow,
    pub unit: UnitSystem,
    /// Entries falling inside the window
    pub entry_count: usize,
    /// `None` when fewer than two entries fall inside the window
    pub layout: Option<GraphLayout>,
}

pub struct GraphService {
    repository: FileSystemRepository,
}

impl GraphService {
    pub fn new(repository: FileSystemRepository) -> Self {
        GraphService { repository }
    }

    pub fn execute(
        &self,
        window: TimeWindow,
        canvas: &Canvas,
        today: NaiveDate,
    ) -> Result<GraphView> {
        if !canvas.has_drawable_area() {
            return Err(WtrackError::InvalidInput(format!(
                "Canvas too small to plot: {}x{} leaves no room inside the margins",
                canvas.width, canvas.height
            )));
        }

        let settings = self.repository.load_settings()?;
        let store = self.repository.load_store()?;
        let unit = settings.unit_system;

        let filtered = window.filter(store.entries(), today);
        debug!(
            "graph window {}: {} of {} entries",
            window,
            filtered.len(),
            store.len()
        );

        Ok(GraphView {
            window,
            unit,
            entry_count: filtered.len(),
            layout: GraphLayout::compute(&filtered, unit, canvas),
        })
    }
}

//! Time windows for the trend graph

use crate::domain::WeightEntry;
use chrono::{Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    /// Last 7 days
    Week,
    /// Last 30 days
    #[default]
    Month,
    All,
}

impl TimeWindow {
    /// Number of days covered, or `None` for all entries
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeWindow::Week => Some(7),
            TimeWindow::Month => Some(30),
            TimeWindow::All => None,
        }
    }

    /// Earliest date still inside the window
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.days().map(|days| today - Duration::days(days))
    }

    /// Keep entries dated on or after the cutoff, preserving list order
    pub fn filter(&self, entries: &[WeightEntry], today: NaiveDate) -> Vec<WeightEntry> {
        match self.cutoff(today) {
            None => entries.to_vec(),
            Some(cutoff) => entries
                .iter()
                .filter(|entry| entry.date >= cutoff)
                .copied()
                .collect(),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeWindow::Week => write!(f, "7 days"),
            TimeWindow::Month => write!(f, "30 days"),
            TimeWindow::All => write!(f, "all"),
        }
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7" | "7d" | "week" => Ok(TimeWindow::Week),
            "30" | "30d" | "month" => Ok(TimeWindow::Month),
            "all" => Ok(TimeWindow::All),
            _ => Err(format!(
                "Invalid window: '{}'. Valid windows are: 7d, 30d, all",
                s
            )),
        }
    }
}

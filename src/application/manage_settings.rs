//! Profile settings use case

use crate::domain::{Settings, UnitSystem};
use crate::error::{Result, WtrackError};
use crate::infrastructure::{FileSystemRepository, TrackerRepository};
use chrono::NaiveDate;
use log::info;
use std::str::FromStr;

/// Keys accepted by `wtrack settings`
pub const SETTING_KEYS: [&str; 6] = [
    "goal-weight",
    "goal-date",
    "gender",
    "height",
    "beginning-weight",
    "unit",
];

const NOT_SET: &str = "(not set)";

fn unknown_key(key: &str) -> WtrackError {
    WtrackError::Config(format!(
        "Unknown setting: '{}'. Valid keys are: {}",
        key,
        SETTING_KEYS.join(", ")
    ))
}

fn format_amount(value: f64, label: &str) -> String {
    if value > 0.0 {
        format!("{:.1} {}", value, label)
    } else {
        NOT_SET.to_string()
    }
}

/// Display value of a single setting
pub fn setting_value(settings: &Settings, key: &str) -> Result<String> {
    let unit = settings.unit_system;
    match key {
        "goal-weight" => Ok(format_amount(settings.goal_weight, unit.weight_label())),
        "goal-date" if settings.goal_date.is_empty() => Ok(NOT_SET.to_string()),
        "goal-date" => Ok(settings.goal_date.clone()),
        "gender" => Ok(settings
            .gender
            .map(|g| g.to_string())
            .unwrap_or_else(|| NOT_SET.to_string())),
        "height" => Ok(format_amount(settings.height, unit.height_label())),
        "beginning-weight" => Ok(format_amount(
            settings.beginning_weight,
            unit.weight_label(),
        )),
        "unit" => Ok(unit.to_string()),
        _ => Err(unknown_key(key)),
    }
}

/// Service for reading and changing profile settings
pub struct SettingsService {
    repository: FileSystemRepository,
}

impl SettingsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SettingsService { repository }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let settings = self.repository.load_settings()?;
        setting_value(&settings, key)
    }

    /// Validate and store one setting; nothing is written on rejection
    pub fn set(&self, key: &str, value: &str, today: NaiveDate) -> Result<Settings> {
        let mut settings = self.repository.load_settings()?;

        match key {
            "goal-weight" => settings.set_goal_weight(value)?,
            "goal-date" => settings.set_goal_date(value, today),
            "gender" => settings.set_gender(value)?,
            "height" => settings.set_height(value)?,
            "beginning-weight" => settings.set_beginning_weight(value)?,
            "unit" => {
                let unit = UnitSystem::from_str(value).map_err(WtrackError::InvalidInput)?;
                settings.set_unit_system(unit);
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_settings(&settings)?;
        info!("setting {} updated", key);
        Ok(settings)
    }

    pub fn list(&self) -> Result<Settings> {
        self.repository.load_settings()
    }
}

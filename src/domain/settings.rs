//! User profile settings

use crate::domain::format::parse_positive;
use crate::domain::{DateReference, UnitSystem};
use crate::error::{Result, WtrackError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Invalid gender: '{}'", s)),
        }
    }
}

/// Profile settings. Zero numeric fields and an empty goal date mean "not set".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub goal_weight: f64,
    pub goal_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Centimeters when metric, inches when imperial
    pub height: f64,
    pub beginning_weight: f64,
    pub unit_system: UnitSystem,
}

impl Settings {
    pub fn new(unit_system: UnitSystem) -> Self {
        Settings {
            unit_system,
            ..Settings::default()
        }
    }

    pub fn set_goal_weight(&mut self, input: &str) -> Result<()> {
        self.goal_weight = parse_positive(input, "goal weight")?;
        Ok(())
    }

    pub fn set_height(&mut self, input: &str) -> Result<()> {
        self.height = parse_positive(input, "height")?;
        Ok(())
    }

    pub fn set_beginning_weight(&mut self, input: &str) -> Result<()> {
        self.beginning_weight = parse_positive(input, "beginning weight")?;
        Ok(())
    }

    pub fn set_gender(&mut self, input: &str) -> Result<()> {
        self.gender = Some(Gender::from_str(input).map_err(WtrackError::InvalidInput)?);
        Ok(())
    }

    /// Store the goal date. Recognized dates are normalized to `Dec 31, 2024`;
    /// anything else is kept as typed.
    pub fn set_goal_date(&mut self, input: &str, today: NaiveDate) {
        self.goal_date = match DateReference::parse(input) {
            Ok(reference) => reference.resolve(today).format("%b %-d, %Y").to_string(),
            Err(_) => input.trim().to_string(),
        };
    }

    /// Switch unit systems, re-expressing the stored profile values.
    pub fn set_unit_system(&mut self, target: UnitSystem) {
        let current = self.unit_system;
        self.goal_weight = current.convert_weight(self.goal_weight, target);
        self.beginning_weight = current.convert_weight(self.beginning_weight, target);
        self.height = current.convert_height(self.height, target);
        self.unit_system = target;
    }
}

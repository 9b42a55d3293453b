//! Unit systems and conversions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Meters per inch
pub const M_PER_IN: f64 = 0.0254;

/// Unit system used for weights and heights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    /// Label for weights in this system
    pub fn weight_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    /// Label for heights in this system
    pub fn height_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }

    /// Convert a weight expressed in `self` into kilograms
    pub fn weight_to_kg(&self, weight: f64) -> f64 {
        match self {
            UnitSystem::Metric => weight,
            UnitSystem::Imperial => weight * KG_PER_LB,
        }
    }

    /// Convert a height expressed in `self` into meters
    pub fn height_to_m(&self, height: f64) -> f64 {
        match self {
            UnitSystem::Metric => height / 100.0,
            UnitSystem::Imperial => height * M_PER_IN,
        }
    }

    /// Re-express a weight given in `self` in the `target` system
    pub fn convert_weight(&self, weight: f64, target: UnitSystem) -> f64 {
        if *self == target {
            return weight;
        }
        match target {
            UnitSystem::Metric => weight * KG_PER_LB,
            UnitSystem::Imperial => weight / KG_PER_LB,
        }
    }

    /// Re-express a height given in `self` in the `target` system
    pub fn convert_height(&self, height: f64, target: UnitSystem) -> f64 {
        if *self == target {
            return height;
        }
        match target {
            UnitSystem::Metric => height * M_PER_IN * 100.0,
            UnitSystem::Imperial => height / 100.0 / M_PER_IN,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "kg" => Ok(UnitSystem::Metric),
            "imperial" | "lbs" | "lb" => Ok(UnitSystem::Imperial),
            _ => Err(format!(
                "Invalid unit system: '{}'. Valid unit systems are: metric, imperial",
                s
            )),
        }
    }
}

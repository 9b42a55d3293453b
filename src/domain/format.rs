//! Weight input parsing and display formatting

use crate::domain::UnitSystem;
use crate::error::{Result, WtrackError};
use regex::Regex;
use std::sync::OnceLock;

/// Placeholder shown for statistics that are unavailable
pub const PLACEHOLDER: &str = "--";

fn weight_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?i)^([0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*(kg|kgs|lb|lbs)?$").unwrap()
    })
}

/// Parse a weight typed by the user, with an optional unit suffix.
///
/// Accepts `72.5`, `72.5kg`, `160 lbs`. Returns the value and the unit when
/// one was given explicitly.
pub fn parse_weight(input: &str) -> Result<(f64, Option<UnitSystem>)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WtrackError::InvalidInput(
            "Weight cannot be empty.".to_string(),
        ));
    }

    let invalid = || WtrackError::InvalidInput("Please enter a valid weight value.".to_string());

    let captures = weight_regex().captures(trimmed).ok_or_else(invalid)?;
    let value: f64 = captures[1].parse().map_err(|_| invalid())?;
    if value <= 0.0 || !value.is_finite() {
        return Err(invalid());
    }

    let unit = captures.get(2).map(|m| {
        if m.as_str().to_lowercase().starts_with("kg") {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    });

    Ok((value, unit))
}

/// Parse a strictly positive number for a named profile field
pub fn parse_positive(input: &str, field: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| WtrackError::InvalidInput(format!("Please enter a valid {}.", field)))
}

/// Format a weight with one decimal and its unit label
pub fn format_weight(weight: f64, unit: UnitSystem) -> String {
    format!("{:.1} {}", weight, unit.weight_label())
}

/// Format a signed change: `-2.5 kg` for a loss, `+1.0 kg` for a gain
pub fn format_change(change: f64, unit: UnitSystem) -> String {
    let label = unit.weight_label();
    if change < 0.0 {
        format!("-{:.1} {}", change.abs(), label)
    } else if change > 0.0 {
        format!("+{:.1} {}", change, label)
    } else {
        format!("0.0 {}", label)
    }
}

/// Format a change, or the placeholder when the statistic is unavailable (zero)
pub fn format_change_or_placeholder(change: f64, unit: UnitSystem) -> String {
    if change == 0.0 {
        PLACEHOLDER.to_string()
    } else {
        format_change(change, unit)
    }
}

/// Format a BMI value, or the placeholder when it is unavailable
pub fn format_bmi(bmi: f64) -> String {
    if bmi > 0.0 {
        format!("{:.1}", bmi)
    } else {
        PLACEHOLDER.to_string()
    }
}

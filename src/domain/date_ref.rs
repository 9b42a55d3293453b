//! Entry date parsing and resolution

use crate::error::{Result, WtrackError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date given on the command line, resolved against "today"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before today
    LastWeekday(Weekday),
    Specific(NaiveDate),
}

impl DateReference {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day.trim())
                .map(DateReference::LastWeekday)
                .ok_or_else(|| WtrackError::InvalidDateReference(input.to_string()));
        }

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            other => {
                if let Some(weekday) = parse_weekday(other) {
                    return Ok(DateReference::Weekday(weekday));
                }
                NaiveDate::parse_from_str(other, "%Y-%m-%d")
                    .or_else(|_| NaiveDate::parse_from_str(other, "%d-%m-%Y"))
                    .map(DateReference::Specific)
                    .map_err(|_| WtrackError::InvalidDateReference(input.to_string()))
            }
        }
    }

    /// Resolve this reference to a concrete date
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::Weekday(target) => today - Duration::days(days_back(today, *target)),
            DateReference::LastWeekday(target) => {
                let back = match days_back(today, *target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            DateReference::Specific(date) => *date,
        }
    }
}

fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday();
    ((current + 7 - target.num_days_from_monday()) % 7) as i64
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

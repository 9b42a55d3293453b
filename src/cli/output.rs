//! Output formatting utilities

use crate::application::manage_settings::{setting_value, SETTING_KEYS};
use crate::application::{HistoryRow, Summary};
use crate::domain::format::{
    format_bmi, format_change, format_change_or_placeholder, format_weight, PLACEHOLDER,
};
use crate::domain::{Settings, UnitSystem};

/// Format the history list, newest first
pub fn format_history(rows: &[HistoryRow], unit: UnitSystem) -> String {
    if rows.is_empty() {
        return "No entries yet".to_string();
    }

    let mut output = String::new();
    for row in rows {
        let change = match row.change {
            Some(c) if c < 0.0 => format!("▼ {}", format_change(c, unit)),
            Some(c) if c > 0.0 => format!("▲ {}", format_change(c, unit)),
            Some(c) => format!("— {}", format_change(c, unit)),
            None => format!("  {}", unit.weight_label()),
        };
        output.push_str(&format!(
            "{:>3}  {:<20}{:>10}  {}\n",
            row.number,
            row.date.format("%B %d, %Y").to_string(),
            format_weight(row.weight, unit),
            change
        ));
    }
    output
}

/// Format the summary screen
pub fn format_summary(summary: &Summary) -> String {
    let unit = summary.unit;
    let label = unit.weight_label();
    let mut output = String::new();

    match &summary.latest {
        Some(latest) => {
            output.push_str(&format!(
                "Current weight:  {:.1} {}\n",
                latest.weight_in(unit),
                label
            ));
            output.push_str(&format!(
                "LAST ENTRY, {}\n",
                latest.date.format("%b %d, %Y").to_string().to_uppercase()
            ));
            if let Some(change) = summary.last_change {
                output.push_str(&format!("CHANGE: {}\n", format_change(change, unit)));
            }
        }
        None => output.push_str(&format!("Current weight:  {} {}\n", PLACEHOLDER, label)),
    }

    output.push('\n');
    output.push_str(&format!("BMI:               {}\n", format_bmi(summary.bmi)));
    output.push_str(&format!(
        "Avg weekly change: {}\n",
        format_change_or_placeholder(summary.average_weekly_change, unit)
    ));
    output.push_str(&format!(
        "Change to date:    {}\n",
        format_change_or_placeholder(summary.total_change, unit)
    ));
    output.push_str(&format!("Entries:           {}\n", summary.entry_count));

    if let Some(goal) = format_goal(summary) {
        output.push_str(&format!("Goal:              {}\n", goal));
    }

    output
}

fn format_goal(summary: &Summary) -> Option<String> {
    let unit = summary.unit;
    let mut goal = match (summary.goal_weight > 0.0, summary.goal_date.is_empty()) {
        (false, true) => return None,
        (false, false) => format!("by {}", summary.goal_date),
        (true, true) => format_weight(summary.goal_weight, unit),
        (true, false) => format!(
            "{} by {}",
            format_weight(summary.goal_weight, unit),
            summary.goal_date
        ),
    };

    if summary.goal_weight > 0.0 && summary.latest.is_some() {
        if summary.goal_remaining > 0.0 {
            goal.push_str(&format!(
                " ({} to go)",
                format_weight(summary.goal_remaining, unit)
            ));
        } else {
            goal.push_str(" (reached)");
        }
    }
    Some(goal)
}

/// Format all settings as `key = value` lines
pub fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();
    for key in SETTING_KEYS {
        if let Ok(value) = setting_value(settings, key) {
            output.push_str(&format!("{} = {}\n", key, value));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, WeightEntry, WeightStore};
    use chrono::NaiveDate;

    fn entry(day: u32, weight: f64) -> WeightEntry {
        WeightEntry::new(
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            weight,
            UnitSystem::Metric,
        )
    }

    fn profile() -> Settings {
        let mut settings = Settings::new(UnitSystem::Metric);
        settings.height = 180.0;
        settings.beginning_weight = 85.0;
        settings
    }

    #[test]
    fn test_format_empty_history() {
        assert_eq!(format_history(&[], UnitSystem::Metric), "No entries yet");
    }

    #[test]
    fn test_format_history_markers() {
        let rows = vec![
            HistoryRow {
                number: 1,
                date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
                weight: 79.5,
                change: Some(-0.5),
            },
            HistoryRow {
                number: 2,
                date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                weight: 80.0,
                change: Some(0.0),
            },
            HistoryRow {
                number: 3,
                date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
                weight: 80.0,
                change: None,
            },
        ];

        let output = format_history(&rows, UnitSystem::Metric);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("January 17, 2025"));
        assert!(lines[0].contains("79.5 kg"));
        assert!(lines[0].ends_with("▼ -0.5 kg"));
        assert!(lines[1].ends_with("— 0.0 kg"));
        assert!(lines[2].ends_with("  kg"));
        assert!(!lines[2].contains('▲'));
    }

    #[test]
    fn test_format_history_gain() {
        let rows = vec![HistoryRow {
            number: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            weight: 160.0,
            change: Some(1.0),
        }];
        let output = format_history(&rows, UnitSystem::Imperial);
        assert!(output.contains("▲ +1.0 lbs"));
    }

    #[test]
    fn test_format_summary_empty() {
        let summary = Summary::compute(&WeightStore::new(), &Settings::default());
        let output = format_summary(&summary);
        assert!(output.contains("Current weight:  -- kg"));
        assert!(output.contains("BMI:               --"));
        assert!(output.contains("Avg weekly change: --"));
        assert!(output.contains("Change to date:    --"));
        assert!(output.contains("Entries:           0"));
        assert!(!output.contains("LAST ENTRY"));
        assert!(!output.contains("Goal"));
    }

    #[test]
    fn test_format_summary_full() {
        let store = WeightStore::from_entries(vec![entry(15, 81.0), entry(1, 83.0)]);
        let mut settings = profile();
        settings.goal_weight = 75.0;
        settings.goal_date = "Dec 31, 2025".to_string();

        let output = format_summary(&Summary::compute(&store, &settings));
        assert!(output.contains("Current weight:  81.0 kg"));
        assert!(output.contains("LAST ENTRY, JAN 15, 2025"));
        assert!(output.contains("CHANGE: -2.0 kg"));
        assert!(output.contains("BMI:               25.0"));
        assert!(output.contains("Avg weekly change: -1.0 kg"));
        assert!(output.contains("Change to date:    -4.0 kg"));
        assert!(output.contains("Entries:           2"));
        assert!(output.contains("Goal:              75.0 kg by Dec 31, 2025 (6.0 kg to go)"));
    }

    #[test]
    fn test_format_summary_single_entry_has_no_change_line() {
        let store = WeightStore::from_entries(vec![entry(1, 80.0)]);
        let output = format_summary(&Summary::compute(&store, &profile()));
        assert!(output.contains("LAST ENTRY, JAN 01, 2025"));
        assert!(!output.contains("CHANGE:"));
    }

    #[test]
    fn test_format_goal_reached() {
        let store = WeightStore::from_entries(vec![entry(1, 74.0)]);
        let mut settings = profile();
        settings.goal_weight = 75.0;
        let output = format_summary(&Summary::compute(&store, &settings));
        assert!(output.contains("Goal:              75.0 kg (reached)"));
    }

    #[test]
    fn test_format_settings() {
        let mut settings = profile();
        settings.gender = Some(Gender::Female);
        let output = format_settings(&settings);
        assert!(output.contains("goal-weight = (not set)"));
        assert!(output.contains("gender = Female"));
        assert!(output.contains("height = 180.0 cm"));
        assert!(output.contains("beginning-weight = 85.0 kg"));
        assert!(output.contains("unit = metric"));
        assert_eq!(output.lines().count(), 6);
    }
}

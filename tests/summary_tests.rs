//! Integration tests for the summary screen

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{init_dir, wtrack_in};

#[test]
fn test_summary_without_entries() {
    let temp = TempDir::new().unwrap();
    init_dir(temp.path(), "metric");

    wtrack_in(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current weight:  -- kg"))
        .stdout(predicate::str::contains("BMI:               --"))
        .stdout(predicate::str::contains("Avg weekly change: --"));
}

#[test]
fn test_summary_is_default_command() {
    let temp = TempDir::new().unwrap();
    init_dir(temp.path(), "imperial");

    wtrack_in(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Current weight:  -- lbs"));
}

#[test]
fn test_summary_metric_statistics() {
    let temp = TempDir::new().unwrap();
    init_dir(temp.path(), "metric");

    for (key, value) in [
        ("height", "180"),
        ("beginning-weight", "85"),
        ("goal-weight", "75"),
        ("goal-date", "2026-12-31"),
    ] {
        wtrack_in(temp.path())
            .args(["settings", key, value])
            .assert()
            .success();
    }

    wtrack_in(temp.path())
        .args(["add", "83", "--date", "2025-01-01"])
        .assert()
        .success();
    wtrack_in(temp.path())
        .args(["add", "81", "--date", "2025-01-15"])
        .assert()
        .success();

    wtrack_in(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current weight:  81.0 kg"))
        .stdout(predicate::str::contains("LAST ENTRY, JAN 15, 2025"))
        .stdout(predicate::str::contains("CHANGE: -2.0 kg"))
        .stdout(predicate::str::contains("BMI:               25.0"))
        .stdout(predicate::str::contains("Avg weekly change: -1.0 kg"))
        .stdout(predicate::str::contains("Change to date:    -4.0 kg"))
        .stdout(predicate::str::contains("Entries:           2"))
        .stdout(predicate::str::contains(
            "Goal:              75.0 kg by Dec 31, 2026 (6.0 kg to go)",
        ));
}

#[test]
fn test_summary_imperial_bmi() {
    let temp = TempDir::new().unwrap();
    init_dir(temp.path(), "imperial");

    wtrack_in(temp.path())
        .args(["settings", "height", "70"])
        .assert()
        .success();
    wtrack_in(temp.path())
        .args(["add", "180", "--date", "2025-01-01"])
        .assert()
        .success();

    wtrack_in(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current weight:  180.0 lbs"))
        .stdout(predicate::str::contains("BMI:               25.8"))
        .stdout(predicate::str::contains("CHANGE").not())
        .stdout(predicate::str::contains("Change to date:    --"));
}

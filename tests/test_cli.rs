//! End-to-end CLI tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{create_history_dataframe, create_temp_csv};

fn riskrate() -> Command {
    Command::cargo_bin("riskrate").unwrap()
}

#[test]
fn test_schedule_command_prints_table() {
    riskrate()
        .args([
            "schedule", "--amount", "1000", "--rate", "0.01", "--periods", "12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("annuity"))
        .stdout(predicate::str::contains("1000.00"));
}

#[test]
fn test_schedule_command_enriched_with_default_risk() {
    riskrate()
        .args([
            "schedule", "--amount", "1000", "--rate", "0.01", "--periods", "12", "--pd", "0.02",
            "--lgd", "0.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("exp_loss"))
        .stdout(predicate::str::contains("Expected IRR"));
}

#[test]
fn test_schedule_command_rejects_invalid_loan() {
    riskrate()
        .args(["schedule", "--amount=-5", "--rate", "0.01", "--periods", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("principal"));
}

#[test]
fn test_price_command_reports_optimal_rate() {
    riskrate()
        .args([
            "price", "--amount", "100", "--periods", "5", "--pd", "0", "--min-rate", "0.01",
            "--max-rate", "0.5", "--target", "0.05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PRICING SUMMARY"))
        .stdout(predicate::str::contains("Optimal rate"));
}

#[test]
fn test_price_command_rejects_inverted_bounds() {
    riskrate()
        .args([
            "price", "--amount", "100", "--periods", "5", "--pd", "0.02", "--min-rate", "0.5",
            "--max-rate", "0.1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid search bounds"));
}

#[test]
fn test_woe_command_fits_and_exports() {
    let mut df = create_history_dataframe();
    let (temp_dir, csv_path) = create_temp_csv(&mut df);
    let export_path = temp_dir.path().join("woe.json");

    riskrate()
        .args([
            "woe",
            "--input",
            csv_path.to_str().unwrap(),
            "--target",
            "status",
            "--features",
            "employment,residence",
            "--export",
            export_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fitted 2 features"))
        .stdout(predicate::str::contains("employment"));

    let report = std::fs::read_to_string(&export_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(parsed["metadata"]["target_column"], "status");
    assert_eq!(parsed["features"].as_array().unwrap().len(), 2);
}

#[test]
fn test_woe_command_transforms_dataset() {
    let mut df = create_history_dataframe();
    let (temp_dir, csv_path) = create_temp_csv(&mut df);
    let out_path = temp_dir.path().join("encoded.csv");

    riskrate()
        .args([
            "woe",
            "--input",
            csv_path.to_str().unwrap(),
            "--features",
            "employment,residence",
            "--transform",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let encoded = std::fs::read_to_string(&out_path).unwrap();
    let header = encoded.lines().next().unwrap();
    assert!(header.contains("employment"));
    assert!(header.contains("residence"));
}

#[test]
fn test_woe_command_missing_input_fails() {
    riskrate()
        .args(["woe", "--input", "/definitely/not/there.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to"));
}

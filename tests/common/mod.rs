//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Historical application fixture with a binary status target and two
/// categorical features with known good/bad splits:
///
/// - `employment`: "salaried" 6 good / 2 bad, "self" 2 good / 6 bad
/// - `residence`: "own" 4 good / 4 bad, "rent" 4 good / 4 bad
/// - `customer_age`: numeric, spanning several scorecard bins
pub fn create_history_dataframe() -> DataFrame {
    let employment: Vec<&str> = std::iter::repeat("salaried")
        .take(8)
        .chain(std::iter::repeat("self").take(8))
        .collect();
    let status = vec![0i32, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1];
    let residence: Vec<&str> = (0..16).map(|i| if i % 2 == 0 { "own" } else { "rent" }).collect();
    let customer_age: Vec<f64> = vec![
        25.0, 31.0, 37.0, 38.0, 41.0, 45.0, 50.0, 57.0, 58.0, 60.0, 29.0, 39.0, 44.0, 52.0,
        61.0, 70.0,
    ];

    df! {
        "employment" => employment,
        "residence" => residence,
        "customer_age" => customer_age,
        "status" => status,
    }
    .unwrap()
}

/// Fixture with exact bucket counts for odds arithmetic: bucket "low" has
/// 30 good / 20 bad, bucket "high" has 70 good / 80 bad.
pub fn create_odds_dataframe() -> DataFrame {
    let mut bucket: Vec<&str> = Vec::with_capacity(200);
    let mut status: Vec<i32> = Vec::with_capacity(200);
    for (value, good, bad) in [("low", 30usize, 20usize), ("high", 70, 80)] {
        bucket.extend(std::iter::repeat(value).take(good + bad));
        status.extend(std::iter::repeat(0).take(good));
        status.extend(std::iter::repeat(1).take(bad));
    }

    df! {
        "bucket" => bucket,
        "status" => status,
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("history.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Larger randomized history for stress-style tests
#[allow(dead_code)]
pub fn create_random_history(rows: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let grades = ["A", "B", "C", "D"];
    let grade: Vec<&str> = (0..rows).map(|_| grades[rng.gen_range(0..grades.len())]).collect();
    let status: Vec<i32> = (0..rows).map(|_| rng.gen_range(0..2)).collect();

    df! {
        "grade" => grade,
        "status" => status,
    }
    .unwrap()
}

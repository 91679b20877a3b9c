//! Integration tests for binning, odds/WOE statistics and the mapper

mod common;

use common::{create_history_dataframe, create_odds_dataframe};
use riskrate::scoring::{
    get_absolute_odds, get_odds, get_woe, BinningTable, ScoringError, TargetMapping, WoeMapper,
};

fn scorecard_bins() -> BinningTable {
    BinningTable::from_json(
        r#"{
            "customer_age": [
                { "label": "(-inf, 37)", "max": 37 },
                { "label": "(37, 40)", "max": 40 },
                { "label": "(40, 46)", "max": 46 },
                { "label": "(46, 58)", "max": 58 },
                { "label": "(58, inf)" }
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_label_boundaries_match_scorecard_convention() {
    let table = scorecard_bins();
    assert_eq!(table.label_for("customer_age", 37.0).unwrap(), "(-inf, 37)");
    assert_eq!(table.label_for("customer_age", 37.0001).unwrap(), "(37, 40)");
    assert_eq!(
        table.label_for("customer_age", 10_000_000.0).unwrap(),
        "(58, inf)"
    );
}

#[test]
fn test_absolute_odds_known_counts() {
    let df = create_odds_dataframe();
    let rows = get_absolute_odds(&df, "bucket", "status", &TargetMapping::default()).unwrap();

    // Sorted ascending by value: "high" before "low".
    assert_eq!(rows[0].value, "high");
    assert_eq!((rows[0].good, rows[0].bad), (70.0, 80.0));
    assert_eq!(rows[1].value, "low");
    assert_eq!((rows[1].good, rows[1].bad), (30.0, 20.0));
}

#[test]
fn test_relative_odds_sum_to_one_each_side() {
    let df = create_odds_dataframe();
    let rows = get_odds(&df, "bucket", "status", &TargetMapping::default(), false).unwrap();

    let good: f64 = rows.iter().map(|r| r.good).sum();
    let bad: f64 = rows.iter().map(|r| r.bad).sum();
    assert!((good - 1.0).abs() < 1e-12);
    assert!((bad - 1.0).abs() < 1e-12);

    // Known proportions: low = 30/100 good, 20/100 bad.
    let low = rows.iter().find(|r| r.value == "low").unwrap();
    assert!((low.good - 0.3).abs() < 1e-12);
    assert!((low.bad - 0.2).abs() < 1e-12);
}

#[test]
fn test_woe_is_log_relative_odds_sorted_ascending() {
    let df = create_odds_dataframe();
    let rows = get_woe(&df, "bucket", "status", &TargetMapping::default()).unwrap();

    assert!(rows.windows(2).all(|w| w[0].woe <= w[1].woe));
    let low = rows.iter().find(|r| r.value == "low").unwrap();
    assert!((low.woe - (0.3f64 / 0.2).ln()).abs() < 1e-12);
    assert!((low.info_val - (0.3 - 0.2) * (0.3f64 / 0.2).ln()).abs() < 1e-12);
}

#[test]
fn test_binning_feeds_woe_end_to_end() {
    // Raw ages -> bin labels -> per-label WOE: the full encoding pipeline.
    let df = create_history_dataframe();
    let binned = scorecard_bins().apply(&df).unwrap();
    let rows = get_woe(&binned, "customer_age", "status", &TargetMapping::default()).unwrap();

    assert!(!rows.is_empty());
    for row in &rows {
        assert!(row.value.starts_with('('), "unexpected label {}", row.value);
    }
}

#[test]
fn test_mapper_round_trip_and_failure_modes() {
    let df = create_history_dataframe();
    let mut mapper = WoeMapper::new(
        vec!["employment".to_string(), "residence".to_string()],
        "status",
        TargetMapping::default(),
    );

    // Transform before fit is a typed failure.
    assert!(matches!(
        mapper.transform(&df),
        Err(ScoringError::Unfitted)
    ));

    mapper.fit(&df).unwrap();

    // A value seen during fit gets exactly the fitted score back.
    let encoded = mapper.transform(&df).unwrap();
    let fitted = mapper.woe_for("employment", "salaried").unwrap();
    let first: f64 = encoded
        .column("employment")
        .unwrap()
        .f64()
        .unwrap()
        .get(0)
        .unwrap();
    assert!((first - fitted).abs() < 1e-15);

    // An unseen category is a typed failure, not a silent default.
    let unseen = polars::df! {
        "employment" => ["freelance"],
        "residence" => ["own"],
    }
    .unwrap();
    assert!(matches!(
        mapper.transform(&unseen),
        Err(ScoringError::UnknownCategory { .. })
    ));
}

#[test]
fn test_degenerate_bin_is_raised_not_clamped() {
    let df = polars::df! {
        "grade" => ["A", "A", "B", "B"],
        "status" => [0i32, 1, 0, 0],
    }
    .unwrap();
    assert!(matches!(
        get_woe(&df, "grade", "status", &TargetMapping::default()),
        Err(ScoringError::DegenerateBin { .. })
    ));
}

#[test]
fn test_custom_target_mapping() {
    let df = polars::df! {
        "grade" => ["A", "A", "B", "B"],
        "outcome" => ["paid", "missed", "paid", "missed"],
    }
    .unwrap();
    let mapping = TargetMapping::new("paid", "missed");
    let rows = get_absolute_odds(&df, "grade", "outcome", &mapping).unwrap();
    assert_eq!((rows[0].good, rows[0].bad), (1.0, 1.0));
}

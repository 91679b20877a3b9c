//! WOE analysis export and rendering

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Table};
use serde::Serialize;

use crate::scoring::{information_value, TargetMapping, WoeRow};

/// Metadata about the fitting run
#[derive(Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Riskrate version
    pub riskrate_version: String,
    /// Input file path
    pub input_file: String,
    /// Target column name
    pub target_column: String,
    /// Raw value counted as a good outcome
    pub good_value: String,
    /// Raw value counted as a bad outcome
    pub bad_value: String,
}

/// One feature's fitted WOE table with its total information value
#[derive(Serialize)]
pub struct FeatureWoe {
    /// Feature name
    pub feature: String,
    /// Total information value (sum of per-bin contributions)
    pub information_value: f64,
    /// Per-bin statistics, sorted ascending by WOE
    pub rows: Vec<WoeRow>,
}

impl FeatureWoe {
    pub fn new(feature: impl Into<String>, rows: Vec<WoeRow>) -> Self {
        Self {
            feature: feature.into(),
            information_value: information_value(&rows),
            rows,
        }
    }
}

/// Complete WOE fitting export with metadata
#[derive(Serialize)]
pub struct WoeReport {
    /// Metadata about the fitting run
    pub metadata: ReportMetadata,
    /// Per-feature WOE tables
    pub features: Vec<FeatureWoe>,
}

impl WoeReport {
    pub fn new(
        input_file: &Path,
        target_column: &str,
        mapping: &TargetMapping,
        features: Vec<FeatureWoe>,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                timestamp: Utc::now().to_rfc3339(),
                riskrate_version: env!("CARGO_PKG_VERSION").to_string(),
                input_file: input_file.display().to_string(),
                target_column: target_column.to_string(),
                good_value: mapping.good_value.clone(),
                bad_value: mapping.bad_value.clone(),
            },
            features,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize WOE report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write WOE report to {}", path.display()))?;
        Ok(())
    }
}

/// Render one feature's WOE table for the terminal.
pub fn woe_table(rows: &[WoeRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("value").add_attribute(Attribute::Bold),
        Cell::new("good").add_attribute(Attribute::Bold),
        Cell::new("bad").add_attribute(Attribute::Bold),
        Cell::new("woe").add_attribute(Attribute::Bold),
        Cell::new("info_val").add_attribute(Attribute::Bold),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.value),
            Cell::new(format!("{:.4}", row.good)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.bad)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.woe)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.info_val)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<WoeRow> {
        vec![
            WoeRow {
                value: "(-inf, 37)".to_string(),
                good: 0.3,
                bad: 0.5,
                woe: (0.3f64 / 0.5).ln(),
                info_val: (0.3 - 0.5) * (0.3f64 / 0.5).ln(),
            },
            WoeRow {
                value: "(37, inf)".to_string(),
                good: 0.7,
                bad: 0.5,
                woe: (0.7f64 / 0.5).ln(),
                info_val: (0.7 - 0.5) * (0.7f64 / 0.5).ln(),
            },
        ]
    }

    #[test]
    fn test_feature_woe_totals_information_value() {
        let rows = sample_rows();
        let expected: f64 = rows.iter().map(|r| r.info_val).sum();
        let feature = FeatureWoe::new("customer_age", rows);
        assert!((feature.information_value - expected).abs() < 1e-15);
    }

    #[test]
    fn test_write_json_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("woe.json");

        let report = WoeReport::new(
            Path::new("data.csv"),
            "status",
            &TargetMapping::default(),
            vec![FeatureWoe::new("customer_age", sample_rows())],
        );
        report.write_json(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["metadata"]["target_column"], "status");
        assert_eq!(parsed["features"][0]["feature"], "customer_age");
        assert_eq!(parsed["features"][0]["rows"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_woe_table_renders_values() {
        let rendered = woe_table(&sample_rows()).to_string();
        assert!(rendered.contains("(-inf, 37)"));
        assert!(rendered.contains("info_val"));
    }
}

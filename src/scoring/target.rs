//! Target column partitioning.
//!
//! Historical datasets carry a binary outcome column whose raw values are
//! arbitrary (0/1 integers, "G"/"B" strings, booleans). A [`TargetMapping`]
//! names which raw value means a good outcome and which means a bad one;
//! rows matching neither are ignored by downstream statistics.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{ScoringError, ScoringResult};

/// Outcome side of a historical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The obligor repaid.
    Good,
    /// The obligor defaulted.
    Bad,
}

/// Mapping from raw target-column values to good/bad outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetMapping {
    /// Raw value that counts as a good outcome.
    pub good_value: String,
    /// Raw value that counts as a bad outcome.
    pub bad_value: String,
}

impl TargetMapping {
    /// Create a new target mapping.
    pub fn new(good_value: impl Into<String>, bad_value: impl Into<String>) -> Self {
        Self {
            good_value: good_value.into(),
            bad_value: bad_value.into(),
        }
    }

    /// Classify one raw value.
    pub fn classify(&self, raw: &str) -> Option<Outcome> {
        if raw == self.good_value {
            Some(Outcome::Good)
        } else if raw == self.bad_value {
            Some(Outcome::Bad)
        } else {
            None
        }
    }
}

impl Default for TargetMapping {
    /// The conventional credit-scoring encoding: 0 = good, 1 = bad.
    fn default() -> Self {
        Self::new("0", "1")
    }
}

/// Build the per-row outcome mask for a dataset.
///
/// Returns one entry per row: `Some(Good)` / `Some(Bad)` for rows whose
/// target value matches the mapping, `None` for unmatched or null values
/// (those rows are skipped by the odds statistics).
pub fn outcome_mask(
    df: &DataFrame,
    target: &str,
    mapping: &TargetMapping,
) -> ScoringResult<Vec<Option<Outcome>>> {
    let target_col = df
        .column(target)
        .map_err(|_| ScoringError::MissingColumn(target.to_string()))?;

    let raw_values = column_to_string_values(target_col)?;
    Ok(raw_values
        .iter()
        .map(|v| v.as_deref().and_then(|s| mapping.classify(s)))
        .collect())
}

/// Convert any supported column dtype to per-row `Option<String>` values.
///
/// Numeric values are rendered without a trailing `.0` for whole integers,
/// so a mapping key of "1" matches both an Int64 column and the same data
/// re-read as Float64. Used for both target partitioning and the raw
/// feature keys of the WOE lookup, so fit and transform agree on keys.
pub fn column_to_string_values(col: &Column) -> ScoringResult<Vec<Option<String>>> {
    let values: Vec<Option<String>> = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
            let cast = col.cast(&DataType::Int64)?;
            cast.i64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
            let cast = col.cast(&DataType::UInt64)?;
            cast.u64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::Float32 | DataType::Float64 => {
            let cast = col.cast(&DataType::Float64)?;
            cast.f64()?
                .into_iter()
                .map(|v| v.map(format_numeric))
                .collect()
        }
        DataType::Boolean => col
            .bool()?
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect(),
        _ => {
            // For other types, try to cast to string.
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };

    Ok(values)
}

/// Render a float the way an integer column would render the same value.
fn format_numeric(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Count how many rows fall on each outcome side (and how many match
/// neither value).
pub fn count_outcomes(
    df: &DataFrame,
    target: &str,
    mapping: &TargetMapping,
) -> ScoringResult<(usize, usize, usize)> {
    let mask = outcome_mask(df, target, mapping)?;

    let good = mask.iter().filter(|v| **v == Some(Outcome::Good)).count();
    let bad = mask.iter().filter(|v| **v == Some(Outcome::Bad)).count();
    let ignored = mask.iter().filter(|v| v.is_none()).count();

    Ok((good, bad, ignored))
}

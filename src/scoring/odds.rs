//! Good/bad odds and Weight-of-Evidence statistics.
//!
//! Each distinct value of a feature column is a bucket; partitioning the
//! dataset by the target outcome gives per-bucket good and bad counts,
//! per-group proportions, and finally the log-odds WOE encoding with its
//! information-value contribution. Buckets observed on only one outcome
//! side get a zero count on the other, never a null.

use std::collections::BTreeMap;

use polars::prelude::*;
use serde::Serialize;

use super::error::{ScoringError, ScoringResult};
use super::target::{column_to_string_values, outcome_mask, Outcome, TargetMapping};

/// Good/bad statistics for one distinct feature value.
///
/// `good` and `bad` are absolute counts out of [`get_absolute_odds`] and
/// per-group proportions out of [`get_odds`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsRow {
    /// The raw feature value (bin label, category, or stringified number).
    pub value: String,
    /// Good-outcome count or proportion.
    pub good: f64,
    /// Bad-outcome count or proportion.
    pub bad: f64,
}

/// An [`OddsRow`] extended with its WOE encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WoeRow {
    /// The raw feature value.
    pub value: String,
    /// Good-outcome proportion of the good group.
    pub good: f64,
    /// Bad-outcome proportion of the bad group.
    pub bad: f64,
    /// Weight of Evidence: ln(good / bad).
    pub woe: f64,
    /// Information-value contribution: (good - bad) * woe.
    pub info_val: f64,
}

/// Count good and bad outcomes for every distinct value of `column`.
///
/// Rows whose target value matches neither side of the mapping, and rows
/// with a null feature value, are skipped. Output is sorted ascending by
/// value.
pub fn get_absolute_odds(
    df: &DataFrame,
    column: &str,
    target: &str,
    mapping: &TargetMapping,
) -> ScoringResult<Vec<OddsRow>> {
    let col = df
        .column(column)
        .map_err(|_| ScoringError::MissingColumn(column.to_string()))?;
    let values = column_to_string_values(col)?;
    let outcomes = outcome_mask(df, target, mapping)?;

    let mut counts: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for (value, outcome) in values.into_iter().zip(outcomes) {
        let (Some(value), Some(outcome)) = (value, outcome) else {
            continue;
        };
        let entry = counts.entry(value).or_insert((0.0, 0.0));
        match outcome {
            Outcome::Good => entry.0 += 1.0,
            Outcome::Bad => entry.1 += 1.0,
        }
    }

    Ok(counts
        .into_iter()
        .map(|(value, (good, bad))| OddsRow { value, good, bad })
        .collect())
}

/// Per-value odds, normalized to proportions of each outcome group's grand
/// total unless `absolute_values` is set.
///
/// # Errors
///
/// [`ScoringError::EmptyOutcome`] when one side has a zero grand total, so
/// proportions would be undefined.
pub fn get_odds(
    df: &DataFrame,
    column: &str,
    target: &str,
    mapping: &TargetMapping,
    absolute_values: bool,
) -> ScoringResult<Vec<OddsRow>> {
    let rows = get_absolute_odds(df, column, target, mapping)?;
    if absolute_values {
        return Ok(rows);
    }

    let total_good: f64 = rows.iter().map(|r| r.good).sum();
    let total_bad: f64 = rows.iter().map(|r| r.bad).sum();
    if total_good <= 0.0 {
        return Err(ScoringError::EmptyOutcome {
            column: target.to_string(),
            outcome: "good",
        });
    }
    if total_bad <= 0.0 {
        return Err(ScoringError::EmptyOutcome {
            column: target.to_string(),
            outcome: "bad",
        });
    }

    Ok(rows
        .into_iter()
        .map(|r| OddsRow {
            value: r.value,
            good: r.good / total_good,
            bad: r.bad / total_bad,
        })
        .collect())
}

/// The WOE encoding of `column`: per-value log relative odds and
/// information-value contributions, sorted ascending by WOE.
///
/// # Errors
///
/// [`ScoringError::DegenerateBin`] when a value has a zero good or bad
/// proportion - the log-odds are undefined there, and this library raises
/// rather than clamping so the caller can merge or drop the offending bin.
pub fn get_woe(
    df: &DataFrame,
    column: &str,
    target: &str,
    mapping: &TargetMapping,
) -> ScoringResult<Vec<WoeRow>> {
    let odds = get_odds(df, column, target, mapping, false)?;

    let mut rows = Vec::with_capacity(odds.len());
    for r in odds {
        if r.good <= 0.0 || r.bad <= 0.0 {
            return Err(ScoringError::DegenerateBin {
                column: column.to_string(),
                value: r.value,
            });
        }
        let woe = (r.good / r.bad).ln();
        rows.push(WoeRow {
            info_val: (r.good - r.bad) * woe,
            value: r.value,
            good: r.good,
            bad: r.bad,
            woe,
        });
    }

    rows.sort_by(|a, b| a.woe.partial_cmp(&b.woe).unwrap_or(std::cmp::Ordering::Equal));
    Ok(rows)
}

/// Total information value of a feature: the sum of its per-bin
/// contributions. Measures the feature's overall predictive power.
pub fn information_value(rows: &[WoeRow]) -> f64 {
    rows.iter().map(|r| r.info_val).sum()
}

//! Interval binning of continuous features.
//!
//! Cut points are configuration, not code: a [`BinningTable`] is built from
//! an external JSON document mapping each feature to an ascending list of
//! `{label, max}` pairs. A value falls into the first bin whose `max` it
//! does not exceed; the last bin of every feature acts as the +inf
//! catch-all (its `max` may simply be omitted in the config).
//!
//! ```json
//! {
//!   "customer_age": [
//!     { "label": "(-inf, 37)", "max": 37 },
//!     { "label": "(37, 40)", "max": 40 },
//!     { "label": "(40, inf)" }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{ScoringError, ScoringResult};

/// A labeled interval with an inclusive upper cut point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinDef {
    /// Human-readable interval label, e.g. "(37, 40)".
    pub label: String,
    /// Inclusive upper bound; omitted in config means unbounded.
    #[serde(default = "unbounded", skip_serializing_if = "is_unbounded")]
    pub max: f64,
}

fn unbounded() -> f64 {
    f64::INFINITY
}

fn is_unbounded(max: &f64) -> bool {
    max.is_infinite()
}

/// Per-feature ordered cut-point definitions.
#[derive(Debug, Clone, Serialize)]
pub struct BinningTable {
    bins: BTreeMap<String, Vec<BinDef>>,
}

impl BinningTable {
    /// Build a table from per-feature bin lists.
    ///
    /// # Errors
    ///
    /// [`ScoringError::UnsortedBins`] when a feature's list is empty or its
    /// cut points are not strictly ascending.
    pub fn new(bins: BTreeMap<String, Vec<BinDef>>) -> ScoringResult<Self> {
        for (feature, defs) in &bins {
            let sorted = !defs.is_empty() && defs.windows(2).all(|w| w[0].max < w[1].max);
            if !sorted {
                return Err(ScoringError::UnsortedBins {
                    feature: feature.clone(),
                });
            }
        }
        Ok(Self { bins })
    }

    /// Parse a table from its JSON configuration document.
    pub fn from_json(text: &str) -> ScoringResult<Self> {
        let bins: BTreeMap<String, Vec<BinDef>> =
            serde_json::from_str(text).map_err(|e| ScoringError::InvalidConfig(e.to_string()))?;
        Self::new(bins)
    }

    /// Features this table defines bins for, in name order.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.bins.keys().map(|k| k.as_str())
    }

    /// The bin definitions for one feature.
    pub fn get(&self, feature: &str) -> Option<&[BinDef]> {
        self.bins.get(feature).map(|defs| defs.as_slice())
    }

    /// The label of the bin `value` falls into: the first bin whose `max`
    /// is not exceeded, or the last (catch-all) label.
    ///
    /// # Errors
    ///
    /// [`ScoringError::UnknownFeature`] when the feature is not configured.
    pub fn label_for(&self, feature: &str, value: f64) -> ScoringResult<&str> {
        let defs = self
            .bins
            .get(feature)
            .ok_or_else(|| ScoringError::UnknownFeature(feature.to_string()))?;
        for bin in defs {
            if value <= bin.max {
                return Ok(&bin.label);
            }
        }
        Ok(&defs.last().expect("bin lists are validated non-empty").label)
    }

    /// Replace every configured numeric column present in the frame with
    /// its bin labels. Unconfigured columns and null values pass through
    /// untouched.
    pub fn apply(&self, df: &DataFrame) -> ScoringResult<DataFrame> {
        let mut out = df.clone();
        for feature in self.bins.keys() {
            let Ok(col) = df.column(feature) else {
                continue;
            };
            if !col.dtype().is_primitive_numeric() {
                continue;
            }
            let values = col.cast(&DataType::Float64)?;
            let labels: Vec<Option<String>> = values
                .f64()?
                .into_iter()
                .map(|v| {
                    v.map(|x| {
                        self.label_for(feature, x)
                            .expect("feature comes from this table")
                            .to_string()
                    })
                })
                .collect();
            out.with_column(Column::new(feature.as_str().into(), labels))?;
        }
        Ok(out)
    }
}

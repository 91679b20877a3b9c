//! Fitted feature -> raw value -> WOE lookup.
//!
//! A [`WoeMapper`] is constructed unfitted, learns an exact-match lookup
//! table from a labeled historical dataset with [`WoeMapper::fit`], and then
//! encodes new frames or single records into model-ready numeric features.
//! The lookup is write-once-then-read-many: re-fitting replaces the whole
//! table, transforming never mutates it.

use std::collections::{BTreeMap, HashMap};

use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::*;
use rayon::prelude::*;

use super::error::{ScoringError, ScoringResult};
use super::odds::get_woe;
use super::target::{column_to_string_values, TargetMapping};

/// Feature encoder mapping raw category values to fitted WOE scores.
#[derive(Debug, Clone)]
pub struct WoeMapper {
    features: Vec<String>,
    target_column: String,
    mapping: TargetMapping,
    mapper: HashMap<String, HashMap<String, f64>>,
}

impl WoeMapper {
    /// Create an unfitted mapper over the given features.
    pub fn new(
        features: Vec<String>,
        target_column: impl Into<String>,
        mapping: TargetMapping,
    ) -> Self {
        Self {
            features,
            target_column: target_column.into(),
            mapping,
            mapper: HashMap::new(),
        }
    }

    /// The configured feature names, in encoding order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Whether [`WoeMapper::fit`] has populated the lookup.
    pub fn is_fitted(&self) -> bool {
        !self.mapper.is_empty()
    }

    /// Fit the lookup from a labeled dataset: one WOE table per configured
    /// feature, computed in parallel across features.
    ///
    /// Idempotent - a second fit replaces the previous table entirely.
    ///
    /// # Errors
    ///
    /// Any [`get_woe`] failure for a feature (missing column, degenerate
    /// bin, empty outcome side) aborts the fit and leaves the previous
    /// lookup in place.
    pub fn fit(&mut self, data: &DataFrame) -> ScoringResult<&mut Self> {
        let pb = ProgressBar::new(self.features.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("   Fitting WOE [{bar:40.cyan/blue}] {pos}/{len} features")
                .unwrap()
                .progress_chars("=>-"),
        );

        let fitted: Vec<(String, HashMap<String, f64>)> = self
            .features
            .par_iter()
            .map(|feature| {
                let rows = get_woe(data, feature, &self.target_column, &self.mapping)?;
                let lookup: HashMap<String, f64> =
                    rows.into_iter().map(|row| (row.value, row.woe)).collect();
                pb.inc(1);
                Ok((feature.clone(), lookup))
            })
            .collect::<ScoringResult<Vec<_>>>()?;
        pb.finish_and_clear();

        self.mapper = fitted.into_iter().collect();
        Ok(self)
    }

    /// The fitted WOE score for one raw value of one feature.
    ///
    /// # Errors
    ///
    /// [`ScoringError::Unfitted`] before fit, [`ScoringError::UnknownFeature`]
    /// for a feature outside the configuration, and
    /// [`ScoringError::UnknownCategory`] for a value the fit never saw.
    pub fn woe_for(&self, feature: &str, value: &str) -> ScoringResult<f64> {
        self.ensure_fitted()?;
        let lookup = self
            .mapper
            .get(feature)
            .ok_or_else(|| ScoringError::UnknownFeature(feature.to_string()))?;
        lookup
            .get(value)
            .copied()
            .ok_or_else(|| ScoringError::UnknownCategory {
                feature: feature.to_string(),
                value: value.to_string(),
            })
    }

    /// Encode a tabular batch: every configured feature column is replaced
    /// by its WOE scores, in configured feature order.
    ///
    /// # Errors
    ///
    /// [`ScoringError::Unfitted`] before fit; [`ScoringError::MissingColumn`]
    /// when the frame lacks a configured feature;
    /// [`ScoringError::UnknownCategory`] on unseen (or null) values - the
    /// lookup has no fallback bucket.
    pub fn transform(&self, data: &DataFrame) -> ScoringResult<DataFrame> {
        self.ensure_fitted()?;

        let mut columns = Vec::with_capacity(self.features.len());
        for feature in &self.features {
            let col = data
                .column(feature)
                .map_err(|_| ScoringError::MissingColumn(feature.clone()))?;
            let raw = column_to_string_values(col)?;
            let mut encoded = Vec::with_capacity(raw.len());
            for value in raw {
                let value = value.ok_or_else(|| ScoringError::UnknownCategory {
                    feature: feature.clone(),
                    value: "null".to_string(),
                })?;
                encoded.push(self.woe_for(feature, &value)?);
            }
            columns.push(Column::new(feature.as_str().into(), encoded));
        }

        Ok(DataFrame::new(columns)?)
    }

    /// Encode a single record into the ordered WOE feature vector.
    ///
    /// The record must carry a value for every configured feature.
    pub fn transform_record(
        &self,
        record: &BTreeMap<String, String>,
    ) -> ScoringResult<Vec<f64>> {
        self.ensure_fitted()?;
        self.features
            .iter()
            .map(|feature| {
                let value = record
                    .get(feature)
                    .ok_or_else(|| ScoringError::MissingColumn(feature.clone()))?;
                self.woe_for(feature, value)
            })
            .collect()
    }

    fn ensure_fitted(&self) -> ScoringResult<()> {
        if self.is_fitted() {
            Ok(())
        } else {
            Err(ScoringError::Unfitted)
        }
    }
}

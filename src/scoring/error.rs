//! Error types for the binning / WOE scoring pipeline.

use thiserror::Error;

/// A specialized Result type for scoring operations.
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Errors that can occur while binning features or fitting/applying WOE
/// encodings.
#[derive(Error, Debug)]
pub enum ScoringError {
    /// The binning configuration could not be parsed.
    #[error("Invalid binning config: {0}")]
    InvalidConfig(String),

    /// A feature's bin list is empty or not sorted ascending by `max`.
    #[error("Bins for feature '{feature}' must be non-empty and sorted ascending by max")]
    UnsortedBins {
        /// Feature whose bin list is malformed.
        feature: String,
    },

    /// A feature was requested that the binning table does not define.
    #[error("Feature '{0}' not found in binning table")]
    UnknownFeature(String),

    /// A column named by the caller is absent from the dataset.
    #[error("Column '{0}' not found in dataset")]
    MissingColumn(String),

    /// No row of the target column mapped onto one of the outcomes, so
    /// group proportions are undefined.
    #[error("No '{outcome}' outcomes found in target column '{column}'")]
    EmptyOutcome {
        /// Target column that was partitioned.
        column: String,
        /// Outcome side with zero total count.
        outcome: &'static str,
    },

    /// A bin has a zero good or bad count; its log-odds are undefined.
    #[error("Bin '{value}' of '{column}' has a zero good or bad count; WOE is undefined")]
    DegenerateBin {
        /// Column the bin belongs to.
        column: String,
        /// Bin value with the zero count.
        value: String,
    },

    /// `transform` was called on a mapper that has not been fitted.
    #[error("Unfitted mapper: call fit before transform")]
    Unfitted,

    /// A value was encountered that the fitted lookup has never seen.
    /// The lookup is exact-match only; there is no fallback bucket.
    #[error("Value '{value}' of feature '{feature}' was not seen during fit")]
    UnknownCategory {
        /// Feature being transformed.
        feature: String,
        /// Unseen raw value.
        value: String,
    },

    /// Underlying dataframe failure.
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}

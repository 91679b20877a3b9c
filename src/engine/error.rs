//! Error types for the loan engine.
//!
//! Every failure in the amortization, IRR and rate-search paths is surfaced
//! synchronously as a typed variant; nothing is retried or recovered
//! internally.

use thiserror::Error;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur in the amortization / IRR / rate-search engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Loan parameters violate the data model (non-positive principal,
    /// zero periods, or a per-period rate at or below -100%).
    #[error("Invalid loan: {reason}")]
    InvalidLoan {
        /// Description of the violated constraint.
        reason: String,
    },

    /// A probability-like input (default probability, loss given default)
    /// falls outside [0, 1].
    #[error("Invalid probability for '{name}': {value} is outside [0, 1]")]
    InvalidProbability {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Cashflow truncation index outside the valid 1..=n window.
    #[error("Truncation period {t} is outside 1..={n}")]
    InvalidRange {
        /// Requested truncation period.
        t: u32,
        /// Number of amortization periods.
        n: u32,
    },

    /// An IRR was requested for an empty cashflow series.
    #[error("Cannot compute IRR of an empty cashflow series")]
    EmptyCashflows,

    /// The cashflow polynomial has no usable real root.
    #[error("No real-valued rate solves the cashflow series")]
    NoRealSolution,

    /// The polynomial root iteration did not converge.
    #[error("Root finding did not converge after {iterations} iterations")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
    },

    /// Rate-search bounds are inverted or non-finite.
    #[error("Invalid search bounds: [{lower}, {upper}]")]
    InvalidBounds {
        /// Lower bound of the search interval.
        lower: f64,
        /// Upper bound of the search interval.
        upper: f64,
    },
}

impl EngineError {
    /// Creates an invalid loan error.
    pub fn invalid_loan(reason: impl Into<String>) -> Self {
        Self::InvalidLoan {
            reason: reason.into(),
        }
    }
}

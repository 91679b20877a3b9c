//! Loan engine - amortization schedules, IRR extraction and rate search.

pub mod amortization;
pub mod cashflow;
pub mod error;
pub mod irr;
pub mod optimizer;

pub use amortization::{Amortization, EnrichedRow, ScheduleRow};
pub use cashflow::Cashflow;
pub use error::{EngineError, EngineResult};
pub use irr::irr;
pub use optimizer::{
    minimize_bounded, search_optimal_rate, Minimum, OptimizerConfig, RateSearch,
    RateSearchParams,
};

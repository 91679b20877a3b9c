//! Scoring pipeline - binning, odds/WOE statistics and applicant encoding.

pub mod binning;
pub mod client;
pub mod error;
pub mod loader;
pub mod mapper;
pub mod odds;
pub mod target;

pub use binning::{BinDef, BinningTable};
pub use client::{Client, ClientField, ProbabilityModel};
pub use error::{ScoringError, ScoringResult};
pub use loader::{load_dataframe, load_dataset};
pub use mapper::WoeMapper;
pub use odds::{get_absolute_odds, get_odds, get_woe, information_value, OddsRow, WoeRow};
pub use target::{count_outcomes, outcome_mask, Outcome, TargetMapping};

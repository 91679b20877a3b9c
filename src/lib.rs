//! Riskrate: Loan Pricing and WOE Scorecard Library
//!
//! A library for credit-risk analysis: amortization schedules with
//! survival-weighted IRRs, risk-adjusted loan pricing via bounded rate
//! search, and Weight-of-Evidence feature encoding from historical
//! default data.

pub mod cli;
pub mod engine;
pub mod report;
pub mod scoring;
pub mod utils;

//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Riskrate - price loan rates against default risk and build WOE scorecards
#[derive(Parser, Debug)]
#[command(name = "riskrate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the amortization schedule of a loan
    Schedule {
        /// Loan principal disbursed at t = 0
        #[arg(long)]
        amount: f64,

        /// Per-period interest rate (e.g. 0.01 for 1%)
        #[arg(long)]
        rate: f64,

        /// Number of repayment periods
        #[arg(long)]
        periods: u32,

        /// Per-period probability of default.
        /// When given, the schedule is enriched with truncated IRRs,
        /// default probabilities and expected losses.
        #[arg(long)]
        pd: Option<f64>,

        /// Loss given default as a fraction of the outstanding balance
        #[arg(long, default_value = "1.0")]
        lgd: f64,

        /// Write the schedule rows as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Search the loan rate whose expected IRR hits a target
    Price {
        /// Loan principal disbursed at t = 0
        #[arg(long)]
        amount: f64,

        /// Number of repayment periods
        #[arg(long)]
        periods: u32,

        /// Per-period probability of default
        #[arg(long)]
        pd: f64,

        /// Loss given default as a fraction of the outstanding balance
        #[arg(long, default_value = "1.0")]
        lgd: f64,

        /// Lower bound of the rate search interval
        #[arg(long, default_value = "0.001")]
        min_rate: f64,

        /// Upper bound of the rate search interval
        #[arg(long, default_value = "1.0")]
        max_rate: f64,

        /// Risk-adjusted yield the search aims for
        #[arg(long, default_value = "0.0")]
        target: f64,
    },

    /// Fit Weight-of-Evidence tables from a historical dataset
    Woe {
        /// Input file path (CSV or Parquet)
        #[arg(short, long)]
        input: PathBuf,

        /// Target column name
        #[arg(short, long, default_value = "status")]
        target: String,

        /// Value in the target column that represents a GOOD outcome
        #[arg(long, default_value = "0")]
        good_value: String,

        /// Value in the target column that represents a BAD outcome
        #[arg(long, default_value = "1")]
        bad_value: String,

        /// Feature columns to encode (comma-separated).
        /// Defaults to every column except the target.
        #[arg(short, long, value_delimiter = ',')]
        features: Vec<String>,

        /// JSON binning config applied to numeric features before fitting
        #[arg(long)]
        bins: Option<PathBuf>,

        /// Export the fitted WOE tables as JSON
        #[arg(long)]
        export: Option<PathBuf>,

        /// Write the WOE-transformed dataset as CSV
        #[arg(long)]
        transform: Option<PathBuf>,
    },
}

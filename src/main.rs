//! Riskrate CLI
//!
//! A command-line tool for pricing loan rates against default risk and
//! building Weight-of-Evidence scorecards from historical datasets.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use riskrate::cli::{run_price, run_schedule, run_woe, Cli, Commands};
use riskrate::utils::{print_banner, print_completion};

fn main() -> Result<()> {
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));
    let started = Instant::now();

    match &cli.command {
        Commands::Schedule {
            amount,
            rate,
            periods,
            pd,
            lgd,
            json,
        } => run_schedule(*amount, *rate, *periods, *pd, *lgd, json.as_deref())?,
        Commands::Price {
            amount,
            periods,
            pd,
            lgd,
            min_rate,
            max_rate,
            target,
        } => run_price(*amount, *periods, *pd, *lgd, *min_rate, *max_rate, *target)?,
        Commands::Woe {
            input,
            target,
            good_value,
            bad_value,
            features,
            bins,
            export,
            transform,
        } => run_woe(
            input,
            target,
            good_value,
            bad_value,
            features,
            bins.as_deref(),
            export.as_deref(),
            transform.as_deref(),
        )?,
    }

    print_completion(started.elapsed());
    Ok(())
}

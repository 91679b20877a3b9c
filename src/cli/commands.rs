//! Subcommand runners wiring the engine and scoring pipeline to the terminal

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::engine::{search_optimal_rate, Amortization, RateSearchParams};
use crate::report::{
    enriched_table, schedule_table, woe_table, FeatureWoe, PricingSummary, WoeReport,
};
use crate::scoring::{
    count_outcomes, get_woe, load_dataframe, BinningTable, TargetMapping, WoeMapper,
};
use crate::utils::{
    create_spinner, finish_with_success, print_info, print_metric, print_saved,
    print_step_header, print_success,
};

fn print_table(table: &comfy_table::Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

fn write_json<T: serde::Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Build and print a (possibly enriched) amortization schedule.
pub fn run_schedule(
    amount: f64,
    rate: f64,
    periods: u32,
    pd: Option<f64>,
    lgd: f64,
    json: Option<&Path>,
) -> Result<()> {
    let loan = Amortization::new(amount, rate, periods)?;

    print_step_header(1, "Amortization schedule");
    print_info(&format!("Annuity per period: {:.2}", loan.annuity()));
    println!();

    match pd {
        Some(pd) => {
            let rows = loan.enriched_schedule(pd, lgd)?;
            print_table(&enriched_table(&rows));

            let expected = loan.expected_irr(pd, lgd)?;
            println!();
            print_metric("Expected IRR", format!("{:.4}", expected));

            if let Some(path) = json {
                write_json(&rows, path)?;
                print_saved("Enriched schedule", path);
            }
        }
        None => {
            let rows = loan.schedule();
            print_table(&schedule_table(&rows));

            if let Some(path) = json {
                write_json(&rows, path)?;
                print_saved("Schedule", path);
            }
        }
    }

    Ok(())
}

/// Run the optimal-rate search and print the pricing summary.
#[allow(clippy::too_many_arguments)]
pub fn run_price(
    amount: f64,
    periods: u32,
    pd: f64,
    lgd: f64,
    min_rate: f64,
    max_rate: f64,
    target: f64,
) -> Result<()> {
    print_step_header(1, "Optimal rate search");

    let params = RateSearchParams {
        amount,
        periods,
        prob_of_default: pd,
        loss_given_default: lgd,
        min_rate,
        max_rate,
        target_expected_irr: target,
    };

    let spinner = create_spinner(&format!(
        "Searching rate in [{:.4}, {:.4}]...",
        min_rate, max_rate
    ));
    let result = search_optimal_rate(&params)?;
    finish_with_success(
        &spinner,
        &format!("Converged in {} iterations", result.iterations),
    );

    PricingSummary::new(params, result).display();
    Ok(())
}

/// Fit WOE tables from a historical dataset, print and optionally export.
#[allow(clippy::too_many_arguments)]
pub fn run_woe(
    input: &Path,
    target: &str,
    good_value: &str,
    bad_value: &str,
    features: &[String],
    bins: Option<&Path>,
    export: Option<&Path>,
    transform: Option<&Path>,
) -> Result<()> {
    // Step 1: load
    print_step_header(1, "Loading dataset");
    let spinner = create_spinner(&format!("Reading {}...", input.display()));
    let mut df = load_dataframe(input)?;
    let (rows, cols) = df.shape();
    finish_with_success(&spinner, &format!("Loaded {} rows x {} columns", rows, cols));

    let mapping = TargetMapping::new(good_value, bad_value);
    let (good, bad, ignored) = count_outcomes(&df, target, &mapping)?;
    print_info(&format!(
        "Outcomes in '{}': {} good, {} bad, {} unmatched",
        target, good, bad, ignored
    ));

    // Step 2: optional binning of continuous features
    if let Some(config_path) = bins {
        print_step_header(2, "Applying binning table");
        let text = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read binning config {}", config_path.display()))?;
        let table = BinningTable::from_json(&text)?;
        df = table.apply(&df)?;
        print_success(&format!(
            "Binned {} configured features",
            table.features().count()
        ));
    }

    // Step 3: fit and display
    print_step_header(3, "Fitting WOE tables");
    let features: Vec<String> = if features.is_empty() {
        df.get_columns()
            .iter()
            .map(|c| c.name().to_string())
            .filter(|name| name != target)
            .collect()
    } else {
        features.to_vec()
    };

    let mut tables = Vec::with_capacity(features.len());
    for feature in &features {
        let rows = get_woe(&df, feature, target, &mapping)?;
        tables.push(FeatureWoe::new(feature.clone(), rows));
    }
    // Strongest features first in the printout.
    tables.sort_by(|a, b| {
        b.information_value
            .partial_cmp(&a.information_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for table in &tables {
        println!();
        print_info(&format!(
            "{} (IV = {:.4})",
            table.feature, table.information_value
        ));
        print_table(&woe_table(&table.rows));
    }
    print_success(&format!("Fitted {} features", tables.len()));

    if let Some(path) = export {
        WoeReport::new(input, target, &mapping, tables).write_json(path)?;
        print_saved("WOE report", path);
    }

    // Step 4: optional transform of the full dataset
    if let Some(path) = transform {
        print_step_header(4, "Transforming dataset");
        let mut mapper = WoeMapper::new(features, target, mapping);
        mapper.fit(&df)?;
        let mut encoded = mapper.transform(&df)?;

        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        CsvWriter::new(&mut file)
            .finish(&mut encoded)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        print_saved("Encoded dataset", path);
    }

    Ok(())
}

//! Pricing summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::engine::{RateSearch, RateSearchParams};

/// Summary of an optimal-rate search run.
#[derive(Debug, Serialize)]
pub struct PricingSummary {
    /// The inputs the search ran with.
    pub params: RateSearchParams,
    /// The search outcome.
    pub result: RateSearch,
}

impl PricingSummary {
    pub fn new(params: RateSearchParams, result: RateSearch) -> Self {
        Self { params, result }
    }

    /// Whether the residual suggests the target was actually reached.
    pub fn converged(&self, tolerance: f64) -> bool {
        self.result.residual.sqrt() <= tolerance
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PRICING SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("💰 Principal"),
            Cell::new(format!("{:.2}", self.params.amount)),
        ]);
        table.add_row(vec![
            Cell::new("📅 Periods"),
            Cell::new(self.params.periods),
        ]);
        table.add_row(vec![
            Cell::new("⚠️  Default probability"),
            Cell::new(format!("{:.4}", self.params.prob_of_default)),
        ]);
        table.add_row(vec![
            Cell::new("🔥 Loss given default"),
            Cell::new(format!("{:.4}", self.params.loss_given_default)),
        ]);
        table.add_row(vec![
            Cell::new("🎯 Target expected IRR"),
            Cell::new(format!("{:.4}", self.params.target_expected_irr)),
        ]);
        table.add_row(vec![
            Cell::new("✅ Optimal rate"),
            Cell::new(format!("{:.6}", self.result.rate))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("📈 Achieved expected IRR"),
            Cell::new(format!("{:.4}", self.result.expected_irr)),
        ]);
        table.add_row(vec![
            Cell::new("📉 Residual"),
            Cell::new(format!("{:.2e}", self.result.residual)).fg(
                if self.converged(1e-4) {
                    Color::White
                } else {
                    Color::Red
                },
            ),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }
        println!();
    }
}

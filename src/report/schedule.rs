//! Amortization schedule rendering

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Table};

use crate::engine::{EnrichedRow, ScheduleRow};

fn money(value: f64) -> Cell {
    Cell::new(format!("{:.2}", value)).set_alignment(CellAlignment::Right)
}

fn rate(value: f64) -> Cell {
    Cell::new(format!("{:.4}", value)).set_alignment(CellAlignment::Right)
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|t| Cell::new(*t).add_attribute(Attribute::Bold))
        .collect()
}

/// Render a plain amortization schedule as a terminal table.
pub fn schedule_table(rows: &[ScheduleRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header(&["t", "balance", "principal", "interest", "annuity"]));

    for row in rows {
        if row.t == 0 {
            // Opening row: only the balance is meaningful.
            table.add_row(vec![
                Cell::new(row.t),
                money(row.balance),
                Cell::new(""),
                Cell::new(""),
                Cell::new(""),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(row.t),
                money(row.balance),
                money(row.principal),
                money(row.interest),
                money(row.annuity),
            ]);
        }
    }
    table
}

/// Render an enriched schedule, including the survival-weighted IRR,
/// default probability and expected loss columns.
pub fn enriched_table(rows: &[EnrichedRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header(&[
        "t", "balance", "principal", "interest", "annuity", "irr", "prob", "exp_loss",
    ]));

    for row in rows {
        let (principal, interest, annuity) = if row.t == 0 {
            (Cell::new(""), Cell::new(""), Cell::new(""))
        } else {
            (money(row.principal), money(row.interest), money(row.annuity))
        };
        table.add_row(vec![
            Cell::new(row.t),
            money(row.balance),
            principal,
            interest,
            annuity,
            rate(row.irr),
            rate(row.prob),
            money(row.exp_loss),
        ]);
    }
    table
}

//! Terminal styling utilities for a modern, visually appealing CLI

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗ ██╗███████╗██╗  ██╗██████╗  █████╗ ████████╗███████╗
    ██╔══██╗██║██╔════╝██║ ██╔╝██╔══██╗██╔══██╗╚══██╔══╝██╔════╝
    ██████╔╝██║███████╗█████╔╝ ██████╔╝███████║   ██║   █████╗
    ██╔══██╗██║╚════██║██╔═██╗ ██╔══██╗██╔══██║   ██║   ██╔══╝
    ██║  ██║██║███████║██║  ██╗██║  ██║██║  ██║   ██║   ███████╗
    ╚═╝  ╚═╝╚═╝╚══════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝   ╚═╝   ╚══════╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Risk-adjusted loan pricing and WOE scorecards").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a labeled value line
pub fn print_metric(label: &str, value: impl std::fmt::Display) {
    println!(
        "      {} {}",
        style(format!("{}:", label)).dim(),
        style(value).yellow().bold()
    );
}

/// Print a saved-artifact line
pub fn print_saved(what: &str, path: &Path) {
    println!(
        "    {} {} written to {}",
        SAVE,
        what,
        style(path.display()).cyan()
    );
}

/// Print the final completion message
pub fn print_completion(elapsed: std::time::Duration) {
    println!();
    println!(
        "    {} {} {}",
        ROCKET,
        style("Riskrate run complete!").green().bold(),
        style(format!("({:.2?})", elapsed)).dim()
    );
    println!();
}

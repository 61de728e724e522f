//! Terminal styling utilities for a modern, visually appealing CLI

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
     ██████╗██╗  ██╗██╗   ██╗██████╗ ███╗   ██╗
    ██╔════╝██║  ██║██║   ██║██╔══██╗████╗  ██║
    ██║     ███████║██║   ██║██████╔╝██╔██╗ ██║
    ██║     ██╔══██║██║   ██║██╔══██╗██║╚██╗██║
    ╚██████╗██║  ██║╚██████╔╝██║  ██║██║ ╚████║
     ╚═════╝╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═══╝  prep
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("⚒").magenta().bold(),
        style("Churn dataset cleaning and preprocessing").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the run configuration card
pub fn print_config(
    input: &Path,
    label_column: &str,
    label_policy: &str,
    tenure_column: &str,
    distinct_threshold: usize,
    iqr_multiplier: f64,
) {
    println!("    {}", style("⚙  Configuration").cyan().bold());
    println!("    {}", style("─".repeat(50)).dim());
    println!("      {} Input:   {}", FOLDER, input.display());
    println!(
        "      {} Label:   {} (policy: {})",
        TARGET,
        label_column,
        style(label_policy).yellow()
    );
    println!("      {} Tenure:  {}", CHART, tenure_column);
    println!(
        "      {} Winsorize: distinct > {}, fences at {} × IQR",
        SAVE,
        style(distinct_threshold).yellow(),
        style(iqr_multiplier).yellow()
    );
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

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!(
            "      Found {} {}",
            style(count).yellow().bold(),
            description
        );
    }
}

/// Print the elapsed time for a step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "      {}",
        style(format!("⏱  {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Churnprep run complete!").green().bold()
    );
    println!();
}

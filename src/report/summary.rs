//! Prep run summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of a full prep run
#[derive(Debug, Default)]
pub struct PrepSummary {
    pub rows_in: usize,
    pub rows_out: usize,
    pub duplicates_removed: usize,
    pub values_imputed: usize,
    pub values_clipped: usize,
    pub label_coerced: usize,
    pub transform_width: usize,
    pub load_time: Duration,
    pub clean_time: Duration,
    pub engineer_time: Duration,
    pub fit_time: Duration,
    pub save_time: Duration,
}

impl PrepSummary {
    pub fn new(rows_in: usize) -> Self {
        Self {
            rows_in,
            rows_out: rows_in,
            ..Default::default()
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PREP SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Input Rows"), Cell::new(self.rows_in)]);

        table.add_row(vec![
            Cell::new("🗑️  Duplicates Removed"),
            Cell::new(self.duplicates_removed).fg(if self.duplicates_removed == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("🩹 Values Imputed"),
            Cell::new(self.values_imputed),
        ]);

        table.add_row(vec![
            Cell::new("✂️  Values Clipped"),
            Cell::new(self.values_clipped),
        ]);

        if self.label_coerced > 0 {
            table.add_row(vec![
                Cell::new("⚠️  Labels Coerced to 0"),
                Cell::new(self.label_coerced).fg(Color::Red),
            ]);
        }

        table.add_row(vec![
            Cell::new("✅ Output Rows"),
            Cell::new(self.rows_out)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🔢 Transform Width"),
            Cell::new(self.transform_width)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ]);

        let total = self.load_time
            + self.clean_time
            + self.engineer_time
            + self.fit_time
            + self.save_time;
        table.add_row(vec![
            Cell::new("⏱  Total Time"),
            Cell::new(format!("{:.2}s", total.as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}

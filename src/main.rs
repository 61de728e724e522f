//! Churnprep: Churn Dataset Preparation CLI
//!
//! A command-line tool that cleans a churn export, engineers the tenure-bin
//! feature, fits the preprocessing transform, and writes all three artifacts.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use churnprep::cli::apply::run_apply;
use churnprep::cli::{Cli, Commands};
use churnprep::pipeline::{
    bin_tenure, estimated_memory_mb, load_dataset, run_cleaning, save_dataset, CleaningOptions,
    LabelPolicy, Preprocessor, TENURE_BIN_COLUMN,
};
use churnprep::report::PrepSummary;
use churnprep::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Apply {
                input,
                preprocessor,
                output,
                infer_schema_length,
            } => run_apply(
                input,
                preprocessor,
                output.as_deref(),
                *infer_schema_length,
            ),
        };
    }

    // Main prep pipeline - require input
    let input = cli.input.clone().ok_or_else(|| {
        anyhow::anyhow!("Input file is required. Use -i/--input to specify a file.")
    })?;

    let label_policy: LabelPolicy = cli
        .label_policy
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    // Output paths derived from the input when not provided
    let cleaned_path = cli.cleaned_path().unwrap();
    let engineered_path = cli.engineered_path().unwrap();
    let preprocessor_path = cli.preprocessor_path().unwrap();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        &input,
        &cli.label_column,
        &cli.label_policy,
        &cli.tenure_column,
        cli.distinct_threshold,
        cli.iqr_multiplier,
    );

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(&input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", estimated_memory_mb(&df));

    let mut summary = PrepSummary::new(rows);
    summary.load_time = step_start.elapsed();
    print_step_time(summary.load_time);

    // Step 2: Cleaning pipeline
    print_step_header(2, "Cleaning Pipeline");

    let step_start = Instant::now();
    let options = CleaningOptions {
        schema: cli.schema(),
        label_policy,
        distinct_threshold: cli.distinct_threshold,
        iqr_multiplier: cli.iqr_multiplier,
    };

    let spinner = create_spinner("Running cleaning stages...");
    let (clean_df, report) = run_cleaning(df, &options)?;
    finish_with_success(&spinner, "Cleaning complete");

    print_count("duplicate row(s)", report.duplicates_removed, Some("removed"));
    print_count("missing value(s)", report.imputed.total_filled(), Some("imputed"));
    print_count("outlier value(s)", report.total_clipped(), Some("clipped to IQR fences"));
    match &report.label {
        Some(outcome) => {
            println!(
                "      Label: {} positive / {} negative",
                style(outcome.positives).yellow().bold(),
                style(outcome.negatives).yellow().bold()
            );
            if outcome.coerced > 0 {
                print_info(&format!(
                    "{} unrecognized label value(s) coerced to 0",
                    outcome.coerced
                ));
            }
            summary.label_coerced = outcome.coerced;
        }
        None => print_info(&format!(
            "Label column '{}' not present; stage skipped",
            options.schema.label
        )),
    }

    summary.duplicates_removed = report.duplicates_removed;
    summary.values_imputed = report.imputed.total_filled();
    summary.values_clipped = report.total_clipped();
    summary.rows_out = report.rows_out;
    summary.clean_time = step_start.elapsed();
    print_step_time(summary.clean_time);

    // Step 3: Feature engineering
    print_step_header(3, "Feature Engineering");

    let step_start = Instant::now();
    let mut engineered = clean_df.clone();
    let binning = bin_tenure(&mut engineered, &options.schema.tenure)?;
    print_success(&format!(
        "Added '{}' with {} bins",
        TENURE_BIN_COLUMN,
        binning.labels.len()
    ));
    println!("      Bins: {}", binning.labels.join(", "));
    if binning.out_of_range > 0 {
        print_info(&format!(
            "{} tenure value(s) outside the bin range mapped to 'Unknown'",
            binning.out_of_range
        ));
    }
    summary.engineer_time = step_start.elapsed();
    print_step_time(summary.engineer_time);

    // Step 4: Fit preprocessor
    print_step_header(4, "Fit Preprocessor");

    let step_start = Instant::now();
    // Fit on the declared columns present in the engineered table; the label
    // and identifier columns are not declared and are dropped by the transform
    let numeric = options.schema.numeric_present(&engineered);
    let categorical = options.schema.categorical_present(&engineered);
    let preprocessor = Preprocessor::fit(&engineered, &numeric, &categorical)?;
    print_success(&format!(
        "Fitted transform: {} numeric, {} categorical group(s), output width {}",
        preprocessor.numeric.len(),
        preprocessor.categorical.len(),
        preprocessor.output_width()
    ));
    summary.transform_width = preprocessor.output_width();
    summary.fit_time = step_start.elapsed();
    print_step_time(summary.fit_time);

    // Step 5: Save outputs
    print_step_header(5, "Save Results");

    let step_start = Instant::now();
    let spinner = create_spinner("Writing output files...");
    let mut clean_out = clean_df;
    save_dataset(&mut clean_out, &cleaned_path)?;
    let mut engineered_out = engineered;
    save_dataset(&mut engineered_out, &engineered_path)?;
    preprocessor.save(&preprocessor_path)?;
    finish_with_success(&spinner, "Outputs written");

    println!("      Cleaned:      {}", cleaned_path.display());
    println!("      Engineered:   {}", engineered_path.display());
    println!("      Preprocessor: {}", preprocessor_path.display());
    summary.save_time = step_start.elapsed();
    print_step_time(summary.save_time);

    // Display summary
    summary.display();

    print_completion();

    Ok(())
}

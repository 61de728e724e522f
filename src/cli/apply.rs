//! Apply subcommand: run a persisted preprocessor over a dataset

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::cli::args::derive_path;
use crate::pipeline::{load_dataset, save_dataset, Preprocessor};
use crate::utils::create_spinner;

/// Load a fitted preprocessor and a dataset, apply the transform, and write
/// the resulting design matrix (CSV or Parquet by extension).
pub fn run_apply(
    input: &Path,
    preprocessor_path: &Path,
    output: Option<&Path>,
    infer_schema_length: usize,
) -> Result<()> {
    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => derive_path(input, "_matrix", None),
    };

    println!(
        "\n {} Applying fitted preprocessor",
        style("◆").cyan().bold()
    );
    println!("   Input:        {}", style(input.display()).dim());
    println!(
        "   Preprocessor: {}",
        style(preprocessor_path.display()).dim()
    );
    println!("   Output:       {}", style(output_path.display()).dim());
    println!();

    let spinner = create_spinner("Loading preprocessor...");
    let preprocessor = Preprocessor::load(preprocessor_path)?;
    spinner.finish_with_message(format!(
        "{} Preprocessor loaded ({} numeric, {} categorical, width {})",
        style("✓").green(),
        preprocessor.numeric.len(),
        preprocessor.categorical.len(),
        preprocessor.output_width()
    ));

    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(input, infer_schema_length)?;
    spinner.finish_with_message(format!(
        "{} Dataset loaded ({} rows)",
        style("✓").green(),
        df.height()
    ));

    let spinner = create_spinner("Transforming...");
    let mut matrix = preprocessor.apply(&df)?;
    spinner.finish_with_message(format!(
        "{} Transformed to {} rows × {} columns",
        style("✓").green(),
        matrix.height(),
        matrix.width()
    ));

    save_dataset(&mut matrix, &output_path)?;

    println!();
    println!(
        " {} Design matrix written to {}",
        style("✓").green().bold(),
        output_path.display()
    );

    Ok(())
}

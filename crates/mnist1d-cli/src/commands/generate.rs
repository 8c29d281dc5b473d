//! Generate command implementation
//!
//! Assembles a dataset in memory and prints summary statistics. Nothing is
//! written to disk.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use mnist1d_augment::{make_dataset, make_dataset_parallel, AugmentResult, Dataset};
use mnist1d_spec::{canonical_config_hash, validate_dataset_config, DatasetConfig, NUM_CLASSES};
use tracing::info;

use super::json_output::{error_codes, DatasetSummary, GenerateOutput, JsonError, JsonWarning};
use super::tagged;
use super::validate::print_validation_results;
use crate::input::load_config;

/// Run the generate command
///
/// # Arguments
/// * `config_path` - Optional path to the config file (defaults otherwise)
/// * `seed` - Optional seed override
/// * `workers` - Parallel worker count; serial generation when `None`
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the config is invalid or generation fails
pub fn run(
    config_path: Option<&str>,
    seed: Option<u64>,
    workers: Option<usize>,
    json_output: bool,
) -> Result<ExitCode> {
    let config = load_config(config_path, seed)?;
    if json_output {
        run_json(&config, workers)
    } else {
        run_human(&config, workers)
    }
}

fn build(config: &DatasetConfig, workers: Option<usize>) -> AugmentResult<Dataset> {
    match workers {
        Some(n) => make_dataset_parallel(config, n),
        None => make_dataset(config),
    }
}

/// Run generate with human-readable (colored) output
fn run_human(config: &DatasetConfig, workers: Option<usize>) -> Result<ExitCode> {
    let start = Instant::now();
    let hash = canonical_config_hash(config).context("Failed to hash config")?;

    println!("{} {} examples", "Generating:".cyan().bold(), config.num_samples);
    println!("{} {}", "Seed:".dimmed(), config.seed);
    if let Some(n) = workers {
        println!("{} {}", "Workers:".dimmed(), n);
    }
    println!("{} {}", "Config hash:".dimmed(), hash);

    let validation = validate_dataset_config(config);
    print_validation_results(&validation);
    if !validation.is_ok() {
        println!(
            "\n{} Config has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let dataset = match build(config, workers) {
        Ok(dataset) => dataset,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), tagged(&e));
            return Ok(ExitCode::from(1));
        }
    };
    let summary = summarize(&dataset);
    let duration_ms = start.elapsed().as_millis() as u64;
    info!(examples = summary.num_examples, duration_ms, "dataset generated");

    println!("\n{}", "Summary:".green().bold());
    println!("  examples:   {}", summary.num_examples);
    println!("  seq length: {}", summary.seq_length);
    println!("  mean / std: {:.6} / {:.6}", summary.mean, summary.std);
    println!("  min / max:  {:.6} / {:.6}", summary.min, summary.max);
    println!("  per class:");
    for (label, count) in summary.class_counts.iter().enumerate() {
        println!("    {}: {}", label, count);
    }

    println!(
        "\n{} Generated {} examples ({}ms)",
        "SUCCESS".green().bold(),
        summary.num_examples,
        duration_ms
    );
    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(config: &DatasetConfig, workers: Option<usize>) -> Result<ExitCode> {
    let output = generate_output(config, workers);
    let success = output.success;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn generate_output(config: &DatasetConfig, workers: Option<usize>) -> GenerateOutput {
    let start = Instant::now();
    let validation = validate_dataset_config(config);
    let mut errors: Vec<JsonError> = validation.errors.iter().map(JsonError::from).collect();
    let warnings = validation.warnings.iter().map(JsonWarning::from).collect();

    let summary = if errors.is_empty() {
        match build(config, workers) {
            Ok(dataset) => Some(summarize(&dataset)),
            Err(e) => {
                errors.push(JsonError::new(error_codes::GENERATION_ERROR, tagged(&e)));
                None
            }
        }
    } else {
        None
    };

    GenerateOutput {
        success: errors.is_empty(),
        errors,
        warnings,
        config_hash: canonical_config_hash(config).ok(),
        seed: config.seed,
        workers,
        summary,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

/// Computes the summary statistics printed by `generate`.
pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let flat: Vec<f64> = dataset.x.iter().flatten().copied().collect();
    let n = flat.len().max(1) as f64;
    let mean = flat.iter().sum::<f64>() / n;
    let var = flat.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

    DatasetSummary {
        num_examples: dataset.len(),
        seq_length: dataset.x.first().map_or(0, Vec::len),
        class_counts: (0..NUM_CLASSES as u8)
            .map(|label| dataset.count_label(label))
            .collect(),
        mean,
        std: var.sqrt(),
        min: flat.iter().copied().fold(f64::INFINITY, f64::min),
        max: flat.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

//! Validate command implementation
//!
//! Parses a dataset config file, validates every field, and checks that the
//! augmentation pipeline accepts it.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use mnist1d_augment::Rules;
use mnist1d_spec::{canonical_config_hash, validate_dataset_config, DatasetConfig, ValidationResult};

use super::json_output::{error_codes, JsonError, JsonWarning, ValidateOutput};
use super::tagged;

/// Run the validate command
///
/// # Arguments
/// * `config_path` - Path to the config file (JSON)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(config_path)
    } else {
        run_human(config_path)
    }
}

/// Runs field validation, then asks the pipeline to build rules from the
/// config. Returns the validation result and the pipeline's rejection, if any.
fn check(config: &DatasetConfig) -> (ValidationResult, Option<String>) {
    let result = validate_dataset_config(config);
    let rejection = if result.is_ok() {
        Rules::from_seed(config.rules.clone(), config.seed)
            .err()
            .map(|e| tagged(&e))
    } else {
        None
    };
    (result, rejection)
}

/// Run validate with human-readable (colored) output
fn run_human(config_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), config_path);

    let config = match DatasetConfig::from_path(Path::new(config_path)) {
        Ok(config) => config,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(ExitCode::from(1));
        }
    };

    let (result, rejection) = check(&config);
    print_validation_results(&result);

    if let Some(message) = &rejection {
        println!("\n{}", "Errors:".red().bold());
        println!("  {} [{}]: {}", "x".red(), error_codes::RULES_REJECTED.red(), message);
    }

    if result.is_ok() && rejection.is_none() {
        let hash = canonical_config_hash(&config)?;
        println!("{} {}", "Config hash:".dimmed(), hash);
        println!("\n{} Config is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        let count = result.errors.len() + usize::from(rejection.is_some());
        println!("\n{} Config has {} error(s)", "FAILED".red().bold(), count);
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(config_path: &str) -> Result<ExitCode> {
    let output = validate_output(config_path);
    let success = output.success;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn validate_output(config_path: &str) -> ValidateOutput {
    let config = match DatasetConfig::from_path(Path::new(config_path)) {
        Ok(config) => config,
        Err(e) => {
            return ValidateOutput {
                success: false,
                errors: vec![JsonError::new(error_codes::CONFIG_LOAD, e.to_string())],
                warnings: Vec::new(),
                config_hash: None,
            }
        }
    };

    let (result, rejection) = check(&config);
    let mut errors: Vec<JsonError> = result.errors.iter().map(JsonError::from).collect();
    if let Some(message) = rejection {
        errors.push(JsonError::new(error_codes::RULES_REJECTED, message));
    }
    let warnings = result.warnings.iter().map(JsonWarning::from).collect();

    ValidateOutput {
        success: errors.is_empty(),
        errors,
        warnings,
        config_hash: canonical_config_hash(&config).ok(),
    }
}

/// Prints the errors and warnings of a validation result.
pub(crate) fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

//! Config validation logic.

pub mod common;

#[cfg(test)]
mod tests;

use crate::config::{DatasetConfig, RulesConfig, NUM_CLASSES};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};

pub use common::{validate_finite, validate_min_len, validate_non_negative, CommonValidationError};

/// Validates a rules config and returns a validation result.
///
/// Covers every field-level rule. The kernel-length check on the working
/// length happens when the pipeline is built.
///
/// # Example
/// ```
/// use mnist1d_spec::RulesConfig;
/// use mnist1d_spec::validation::validate_rules_config;
///
/// let result = validate_rules_config(&RulesConfig::default());
/// assert!(result.is_ok());
/// ```
pub fn validate_rules_config(rules: &RulesConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_padding(rules, &mut result);
    validate_lengths(rules, &mut result);
    validate_translation(rules, &mut result);
    validate_intensities(rules, &mut result);

    result
}

/// Validates a dataset config, including its embedded rules.
pub fn validate_dataset_config(config: &DatasetConfig) -> ValidationResult {
    let mut result = validate_rules_config(&config.rules);

    if config.num_samples < NUM_CLASSES {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleCount,
            format!(
                "num_samples must be at least {} (one per class), got {}",
                NUM_CLASSES, config.num_samples
            ),
            "num_samples",
        ));
    } else if config.num_samples % NUM_CLASSES != 0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnevenClassSplit,
            format!(
                "num_samples {} is not a multiple of {}; {} example(s) will be dropped",
                config.num_samples,
                NUM_CLASSES,
                config.num_samples % NUM_CLASSES
            ),
            "num_samples",
        ));
    }

    result
}

/// Validates that a worker count is usable for parallel generation.
pub fn validate_worker_count(workers: usize) -> ValidationResult {
    let mut result = ValidationResult::default();
    if workers == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidWorkerCount,
            "worker count must be at least 1",
            "workers",
        ));
    }
    result
}

fn validate_padding(rules: &RulesConfig, result: &mut ValidationResult) {
    match rules.padding_bounds() {
        None => result.add_error(ValidationError::with_path(
            ErrorCode::InvalidPadding,
            format!(
                "padding must have exactly two entries [low, high], got {}",
                rules.padding.len()
            ),
            "padding",
        )),
        Some((low, high)) if low > high => result.add_error(ValidationError::with_path(
            ErrorCode::PaddingRangeInverted,
            format!("padding low ({}) must not exceed high ({})", low, high),
            "padding",
        )),
        Some(_) => {}
    }
}

fn validate_lengths(rules: &RulesConfig, result: &mut ValidationResult) {
    if let Err(e) = validate_min_len("template_len", rules.template_len) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTemplateLength,
            e.message,
            "template_len",
        ));
    }
    if let Err(e) = validate_min_len("final_seq_length", rules.final_seq_length) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFinalLength,
            e.message,
            "final_seq_length",
        ));
    }
}

fn validate_translation(rules: &RulesConfig, result: &mut ValidationResult) {
    if let Err(e) = validate_min_len("max_translation", rules.max_translation) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidMaxTranslation,
            e.message,
            "max_translation",
        ));
        return;
    }

    // Translation happens at the working length, so it must fit there.
    if let Some(working_len) = rules.working_len() {
        if rules.max_translation > working_len {
            result.add_error(ValidationError::with_path(
                ErrorCode::TranslationExceedsWorkingLength,
                format!(
                    "max_translation ({}) exceeds the working length template_len + padding[1] ({})",
                    rules.max_translation, working_len
                ),
                "max_translation",
            ));
        }
    }
}

fn validate_intensities(rules: &RulesConfig, result: &mut ValidationResult) {
    for (name, value) in [
        ("corr_noise_scale", rules.corr_noise_scale),
        ("iid_noise_scale", rules.iid_noise_scale),
    ] {
        if let Err(e) = validate_non_negative(name, value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidNoiseScale,
                e.message,
                name,
            ));
        }
    }

    for (name, value) in [
        ("scale_coeff", rules.scale_coeff),
        ("shear_scale", rules.shear_scale),
    ] {
        if let Err(e) = validate_finite(name, value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonFiniteCoefficient,
                e.message,
                name,
            ));
        }
    }

    // factor = 1 + scale_coeff * (u - 0.5) with u in [0, 1)
    if rules.scale_coeff.is_finite() && rules.scale_coeff.abs() >= 2.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ScaleMayFlipSign,
            format!(
                "scale_coeff {} can produce a non-positive scale factor",
                rules.scale_coeff
            ),
            "scale_coeff",
        ));
    }
}

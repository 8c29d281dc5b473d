use super::*;

fn codes(result: &ValidationResult) -> Vec<ErrorCode> {
    result.errors.iter().map(|e| e.code).collect()
}

#[test]
fn test_default_rules_are_valid() {
    let result = validate_rules_config(&RulesConfig::default());
    assert!(result.is_ok());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_padding_must_have_two_entries() {
    let rules = RulesConfig {
        padding: vec![1, 2, 3],
        ..Default::default()
    };
    let result = validate_rules_config(&rules);
    assert_eq!(codes(&result), vec![ErrorCode::InvalidPadding]);
    assert_eq!(result.errors[0].path.as_deref(), Some("padding"));
}

#[test]
fn test_padding_low_above_high() {
    let rules = RulesConfig {
        padding: vec![10, 1],
        ..Default::default()
    };
    let result = validate_rules_config(&rules);
    assert_eq!(codes(&result), vec![ErrorCode::PaddingRangeInverted]);
}

#[test]
fn test_equal_padding_bounds_allowed() {
    let rules = RulesConfig {
        padding: vec![5, 5],
        ..Default::default()
    };
    assert!(validate_rules_config(&rules).is_ok());
}

#[test]
fn test_zero_lengths_rejected() {
    let rules = RulesConfig {
        template_len: 0,
        final_seq_length: 0,
        ..Default::default()
    };
    let result = validate_rules_config(&rules);
    assert!(codes(&result).contains(&ErrorCode::InvalidTemplateLength));
    assert!(codes(&result).contains(&ErrorCode::InvalidFinalLength));
}

#[test]
fn test_zero_max_translation_rejected() {
    let rules = RulesConfig {
        max_translation: 0,
        ..Default::default()
    };
    assert_eq!(
        codes(&validate_rules_config(&rules)),
        vec![ErrorCode::InvalidMaxTranslation]
    );
}

#[test]
fn test_translation_larger_than_working_length() {
    let rules = RulesConfig {
        padding: vec![1, 2],
        template_len: 3,
        max_translation: 6,
        ..Default::default()
    };
    assert_eq!(
        codes(&validate_rules_config(&rules)),
        vec![ErrorCode::TranslationExceedsWorkingLength]
    );

    let rules = RulesConfig {
        max_translation: 5,
        ..rules
    };
    assert!(validate_rules_config(&rules).is_ok());
}

#[test]
fn test_negative_noise_scale_rejected() {
    let rules = RulesConfig {
        iid_noise_scale: -0.1,
        corr_noise_scale: f64::INFINITY,
        ..Default::default()
    };
    let result = validate_rules_config(&rules);
    assert_eq!(
        codes(&result),
        vec![ErrorCode::InvalidNoiseScale, ErrorCode::InvalidNoiseScale]
    );
}

#[test]
fn test_non_finite_coefficients_rejected() {
    let rules = RulesConfig {
        shear_scale: f64::NAN,
        ..Default::default()
    };
    assert_eq!(
        codes(&validate_rules_config(&rules)),
        vec![ErrorCode::NonFiniteCoefficient]
    );
}

#[test]
fn test_large_scale_coeff_warns() {
    let rules = RulesConfig {
        scale_coeff: 2.5,
        ..Default::default()
    };
    let result = validate_rules_config(&rules);
    assert!(result.is_ok());
    assert_eq!(result.warnings[0].code, WarningCode::ScaleMayFlipSign);
}

#[test]
fn test_dataset_sample_count() {
    let config = DatasetConfig {
        num_samples: 9,
        ..Default::default()
    };
    assert_eq!(
        codes(&validate_dataset_config(&config)),
        vec![ErrorCode::InvalidSampleCount]
    );

    let config = DatasetConfig {
        num_samples: 25,
        ..Default::default()
    };
    let result = validate_dataset_config(&config);
    assert!(result.is_ok());
    assert_eq!(result.warnings[0].code, WarningCode::UnevenClassSplit);
}

#[test]
fn test_worker_count() {
    assert!(validate_worker_count(4).is_ok());
    assert_eq!(
        codes(&validate_worker_count(0)),
        vec![ErrorCode::InvalidWorkerCount]
    );
}

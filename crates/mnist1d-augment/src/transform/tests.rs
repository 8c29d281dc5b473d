use mnist1d_spec::{BackendError, RulesConfig};
use pretty_assertions::assert_eq;

use super::*;
use crate::error::AugmentError;
use crate::filter::gaussian_filter_1d;
use crate::interpolate::interpolate;
use crate::rng::{create_rng, RandomSource};
use crate::sequence::{add, add_scalar, linspace, mul, mul_scalar, nonzero_mask, rotate_right, sub};

fn small_config() -> RulesConfig {
    RulesConfig {
        padding: vec![1, 10],
        template_len: 5,
        scale_coeff: 0.5,
        max_translation: 2,
        corr_noise_scale: 0.1,
        iid_noise_scale: 0.1,
        shear_scale: 0.1,
        shuffle_seq: false,
        final_seq_length: 16,
    }
}

fn ramp() -> Vec<f64> {
    (1..=12).map(f64::from).collect()
}

#[test]
fn test_pad_adds_bounded_padding() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 42).unwrap();
    let x = [1.0, 2.0, 3.0];
    for _ in 0..50 {
        let padded = rules.pad(&x, 1, 3).unwrap();
        assert!(padded.len() >= 4 && padded.len() <= 6);
        assert_eq!(&padded[..3], &x);
        assert!(padded[3..].iter().all(|&v| v == 0.0));
    }
}

#[test]
fn test_pad_hits_both_bounds() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 1).unwrap();
    let lens: Vec<usize> = (0..200)
        .map(|_| rules.pad(&[1.0], 2, 4).unwrap().len())
        .collect();
    assert!(lens.contains(&3));
    assert!(lens.contains(&5));
}

#[test]
fn test_pad_rejects_inverted_range() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 1).unwrap();
    assert!(matches!(
        rules.pad(&[1.0], 4, 2),
        Err(AugmentError::InvalidParameter { .. })
    ));
}

#[test]
fn test_pad_rejects_range_spanning_usize() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 1).unwrap();
    let err = rules.pad(&[1.0], 0, usize::MAX).unwrap_err();
    assert!(matches!(err, AugmentError::InvalidParameter { .. }));
    assert_eq!(err.code(), "AUG_008");
}

#[test]
fn test_scale_stays_in_range() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 5).unwrap();
    for _ in 0..100 {
        let out = rules.scale(&[2.0], 0.4);
        // factor in [0.8, 1.2)
        assert!(out[0] >= 1.6 && out[0] < 2.4, "{}", out[0]);
    }
}

#[test]
fn test_translate_is_a_rotation() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 42).unwrap();
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let mut seen_shift = false;
    for _ in 0..50 {
        let out = rules.translate(&x, 3).unwrap();
        let k = out.iter().position(|&v| v == 1.0).unwrap();
        assert!(k < 3);
        let expected: Vec<f64> = x[5 - k..].iter().chain(&x[..5 - k]).copied().collect();
        assert_eq!(out, expected);
        seen_shift |= k > 0;
    }
    assert!(seen_shift);
}

#[test]
fn test_translate_rejects_window_larger_than_signal() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 42).unwrap();
    let err = rules.translate(&[1.0, 2.0, 3.0], 4).unwrap_err();
    assert!(matches!(
        err,
        AugmentError::TranslationWindowTooLarge {
            max_translation: 4,
            len: 3
        }
    ));
    assert!(rules.translate(&[1.0, 2.0, 3.0], 0).is_err());
}

#[test]
fn test_iid_noise_like_shape_and_scale() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 42).unwrap();
    let noise = rules.iid_noise_like(&[1.0, 2.0, 3.0, 4.0], 2e-2);
    assert_eq!(noise.len(), 4);
    assert!(noise.iter().all(|v| v.abs() < 0.2));

    let zeros = rules.iid_noise_like(&[1.0; 8], 0.0);
    assert!(zeros.iter().all(|&v| v == 0.0));
}

#[test]
fn test_corr_noise_is_smoother_than_iid() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 9).unwrap();
    let template = vec![0.0; 400];
    let corr = rules.corr_noise_like(&template, 1.0).unwrap();
    let iid = rules.iid_noise_like(&template, 1.0);
    let roughness =
        |v: &[f64]| v.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f64>() / v.len() as f64;
    assert_eq!(corr.len(), 400);
    assert!(roughness(&corr) < roughness(&iid) / 4.0);
}

#[test]
fn test_corr_noise_needs_kernel_room() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 9).unwrap();
    assert!(matches!(
        rules.corr_noise_like(&[0.0; 4], 1.0),
        Err(AugmentError::KernelRadiusTooLarge { .. })
    ));
}

#[test]
fn test_shear_adds_a_linear_ramp() {
    let mut rules = Rules::from_seed(RulesConfig::default(), 42).unwrap();
    let x = [
        0.0, 0.23693955, 0.35540933, 0.41464421, 0.4738791, 0.4738791, 0.4738791, 0.4738791,
        0.41464421, 0.35540933, 0.23693955, 0.0,
    ];
    let sheared = rules.shear(&x, 0.75).unwrap();
    let diff: Vec<f64> = sheared.iter().zip(&x).map(|(s, v)| s - v).collect();

    // diff = -coeff * linspace(-0.5, 0.5, n): antisymmetric and linear.
    let ramp = linspace(-0.5, 0.5, x.len());
    let coeff = -diff[0] / ramp[0];
    assert!(coeff.abs() <= 0.375);
    for (d, r) in diff.iter().zip(&ramp) {
        assert!((d + coeff * r).abs() < 1e-12);
    }
}

#[test]
fn test_new_rejects_bad_configuration() {
    let config = RulesConfig {
        padding: vec![10, 1],
        ..small_config()
    };
    let err = Rules::from_seed(config, 0).unwrap_err();
    assert!(matches!(err, AugmentError::InvalidRulesConfiguration { .. }));
    assert!(err.to_string().contains("E002"));
}

#[test]
fn test_new_rejects_working_length_shorter_than_kernel() {
    let config = RulesConfig {
        padding: vec![0, 2],
        template_len: 3,
        max_translation: 1,
        ..small_config()
    };
    let err = Rules::from_seed(config, 0).unwrap_err();
    assert!(matches!(
        err,
        AugmentError::KernelRadiusTooLarge { radius: 8, len: 5 }
    ));
}

#[test]
fn test_new_rejects_translation_window_past_working_length() {
    let config = RulesConfig {
        max_translation: 100,
        ..RulesConfig::default()
    };
    let err = Rules::from_seed(config, 0).unwrap_err();
    assert!(matches!(
        err,
        AugmentError::TranslationWindowTooLarge {
            max_translation: 100,
            len: 72
        }
    ));
}

#[test]
fn test_new_reports_other_errors_before_translation_window() {
    let config = RulesConfig {
        max_translation: 100,
        final_seq_length: 0,
        ..RulesConfig::default()
    };
    let err = Rules::from_seed(config, 0).unwrap_err();
    assert!(matches!(err, AugmentError::InvalidRulesConfiguration { .. }));
    assert!(err.to_string().contains("E006"));
    assert!(!err.to_string().contains("E005"));
}

#[test]
fn test_transform_matches_hand_composed_steps() {
    let config = small_config();
    let x = ramp();
    let mut rules = Rules::from_seed(config.clone(), 42).unwrap();
    let (out_x, out_t) = rules.transform(&x, &x).unwrap();

    // Same stream, same draws, in order: pad, scale, translate, correlated
    // noise, iid noise, shear.
    let mut rng = create_rng(42);
    let working = 15;

    let mut padded = add_scalar(&x, ZERO_OFFSET);
    let k = 1 + rng.uniform_int(10);
    padded.resize(x.len() + k, 0.0);
    let signal = interpolate(&padded, working).unwrap();
    let t = interpolate(&x, working).unwrap();

    let signal = mul_scalar(&signal, 1.0 + config.scale_coeff * (rng.uniform_float() - 0.5));
    let signal = rotate_right(&signal, rng.uniform_int(config.max_translation));

    let mask = nonzero_mask(&signal);
    let inverse: Vec<f64> = mask.iter().map(|m| 1.0 - m).collect();
    let corr = gaussian_filter_1d(
        &mul_scalar(&rng.standard_normal_vector(working), config.corr_noise_scale),
        CORR_NOISE_SIGMA,
    )
    .unwrap();
    let signal = add(&mul(&signal, &mask).unwrap(), &mul(&corr, &inverse).unwrap()).unwrap();

    let iid = mul_scalar(&rng.standard_normal_vector(working), config.iid_noise_scale);
    let signal = add(&signal, &iid).unwrap();

    let coeff = config.shear_scale * (rng.uniform_float() - 0.5);
    let signal = sub(&signal, &mul_scalar(&linspace(-0.5, 0.5, working), coeff)).unwrap();

    let expected_x = interpolate(&signal, 16).unwrap();
    let expected_t = interpolate(&t, 16).unwrap();

    let bits = |v: &[f64]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&out_x), bits(&expected_x));
    assert_eq!(bits(&out_t), bits(&expected_t));

    // Both streams end in the same state.
    assert_eq!(rules.into_rng().uniform_float(), rng.uniform_float());
}

#[test]
fn test_transform_small_scenario_lengths() {
    let mut rules = Rules::from_seed(small_config(), 42).unwrap();
    let x = ramp();
    let (new_x, new_t) = rules.transform(&x, &x).unwrap();
    assert_eq!(new_x.len(), 16);
    assert_eq!(new_t.len(), 16);
    assert_eq!(x, ramp());
}

#[test]
fn test_transform_axis_is_resampled_deterministically() {
    let mut rules = Rules::from_seed(small_config(), 3).unwrap();
    let x = ramp();
    let (_, t1) = rules.transform(&x, &x).unwrap();
    let (_, t2) = rules.transform(&x, &x).unwrap();
    assert_eq!(t1, t2);
    assert!((t1[0] - 1.0).abs() < 1e-12);
    assert!((t1[15] - 12.0).abs() < 1e-12);
}

#[test]
fn test_transform_is_reproducible() {
    let x = ramp();
    let run = |seed| {
        let mut rules = Rules::from_seed(small_config(), seed).unwrap();
        (0..5)
            .map(|_| rules.transform(&x, &x).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

#[test]
fn test_transform_with_default_rules() {
    let mut rules = Rules::new(RulesConfig::default(), create_rng(7)).unwrap();
    assert_eq!(rules.working_len(), 72);
    let template = vec![0.0, 0.1, 0.3, 0.2, 0.0];
    let axis = linspace(-1.0, 1.0, 5);
    for _ in 0..20 {
        let (x, t) = rules.transform(&template, &axis).unwrap();
        assert_eq!(x.len(), 40);
        assert_eq!(t.len(), 40);
        assert!(x.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_transform_rejects_empty_input() {
    let mut rules = Rules::from_seed(small_config(), 1).unwrap();
    assert!(matches!(
        rules.transform(&[], &[1.0]),
        Err(AugmentError::InvalidLength { .. })
    ));
}

#[test]
fn test_display_lists_every_field() {
    let rules = Rules::from_seed(small_config(), 0).unwrap();
    assert_eq!(
        rules.to_string(),
        "Rules{padding: [1, 10], template_len: 5, scale_coeff: 0.5, max_translation: 2, corr_noise_scale: 0.1, iid_noise_scale: 0.1, shear_scale: 0.1, shuffle_seq: false, final_seq_length: 16}"
    );
}

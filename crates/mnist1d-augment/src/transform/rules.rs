//! The [`Rules`] value and its individual augmentation steps.

use std::fmt;

use mnist1d_spec::{validate_rules_config, ErrorCode, RulesConfig};
use rand_pcg::Pcg32;

use crate::error::{AugmentError, AugmentResult};
use crate::filter::{gaussian_filter_1d, kernel_radius};
use crate::interpolate::interpolate;
use crate::rng::{create_rng, RandomSource};
use crate::sequence::{linspace, mul_scalar, rotate_right, sub};

/// Smoothing width of the correlated-noise step.
pub const CORR_NOISE_SIGMA: f64 = 2.0;

/// Offset added to every input sample so real zeros survive the mask step.
pub const ZERO_OFFSET: f64 = 1e-8;

/// Validated pipeline configuration plus the random state it draws from.
///
/// The state is owned exclusively: every step that draws takes `&mut self`,
/// so one `Rules` can never be driven from two threads at once. Parallel
/// generation builds one `Rules` per worker instead.
pub struct Rules<R = Pcg32> {
    pub(crate) config: RulesConfig,
    pub(crate) padding_low: usize,
    pub(crate) padding_high: usize,
    pub(crate) working_len: usize,
    pub(crate) rng: R,
}

impl Rules<Pcg32> {
    /// Builds rules drawing from a PCG32 stream seeded with `seed`.
    pub fn from_seed(config: RulesConfig, seed: u64) -> AugmentResult<Self> {
        Self::new(config, create_rng(seed))
    }
}

impl<R: RandomSource> Rules<R> {
    /// Validates `config` and takes ownership of `rng`.
    ///
    /// # Errors
    /// - [`AugmentError::InvalidRulesConfiguration`] listing every validation
    ///   error other than an oversized translation window.
    /// - [`AugmentError::TranslationWindowTooLarge`] if `max_translation`
    ///   exceeds the working length `template_len + padding[1]`.
    /// - [`AugmentError::KernelRadiusTooLarge`] if the working length is
    ///   shorter than the correlated-noise kernel radius.
    pub fn new(config: RulesConfig, rng: R) -> AugmentResult<Self> {
        if let Err(errors) = validate_rules_config(&config).into_result() {
            let message = errors
                .iter()
                .filter(|e| e.code != ErrorCode::TranslationExceedsWorkingLength)
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            if !message.is_empty() {
                return Err(AugmentError::invalid_rules(message));
            }
        }

        let (padding_low, padding_high) = config
            .padding_bounds()
            .ok_or_else(|| AugmentError::invalid_rules("padding must be [low, high]"))?;
        let working_len = config
            .working_len()
            .ok_or_else(|| AugmentError::invalid_rules("working length overflows"))?;

        if config.max_translation > working_len {
            return Err(AugmentError::TranslationWindowTooLarge {
                max_translation: config.max_translation,
                len: working_len,
            });
        }

        let radius = kernel_radius(CORR_NOISE_SIGMA);
        if working_len < radius {
            return Err(AugmentError::KernelRadiusTooLarge {
                radius,
                len: working_len,
            });
        }

        Ok(Self {
            config,
            padding_low,
            padding_high,
            working_len,
            rng,
        })
    }

    /// The configuration these rules were built from.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Fixed length of the signal between the two resampling steps.
    pub fn working_len(&self) -> usize {
        self.working_len
    }

    /// Mutable access to the random state.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consumes the rules, returning the random state.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Appends `k` zeros, `k` drawn uniformly from `[low, high]`.
    ///
    /// # Errors
    /// [`AugmentError::InvalidParameter`] if `low > high` or the range spans
    /// every `usize`.
    pub fn pad(&mut self, x: &[f64], low: usize, high: usize) -> AugmentResult<Vec<f64>> {
        if low > high {
            return Err(AugmentError::invalid_param(
                "padding",
                format!("low ({}) must not exceed high ({})", low, high),
            ));
        }
        let span = (high - low).checked_add(1).ok_or_else(|| {
            AugmentError::invalid_param(
                "padding",
                format!("range [{}, {}] is too wide", low, high),
            )
        })?;
        let k = low + self.rng.uniform_int(span);
        let mut out = Vec::with_capacity(x.len() + k);
        out.extend_from_slice(x);
        out.resize(x.len() + k, 0.0);
        Ok(out)
    }

    /// Multiplies by `1 + coeff * (u - 0.5)`.
    pub fn scale(&mut self, x: &[f64], coeff: f64) -> Vec<f64> {
        let factor = 1.0 + coeff * (self.rng.uniform_float() - 0.5);
        mul_scalar(x, factor)
    }

    /// Rotates right by `k`, `k` drawn uniformly from `[0, max_translation)`.
    ///
    /// # Errors
    /// - [`AugmentError::TranslationWindowTooLarge`] if `max_translation > len(x)`.
    /// - [`AugmentError::InvalidParameter`] if `max_translation == 0`.
    pub fn translate(&mut self, x: &[f64], max_translation: usize) -> AugmentResult<Vec<f64>> {
        if max_translation > x.len() {
            return Err(AugmentError::TranslationWindowTooLarge {
                max_translation,
                len: x.len(),
            });
        }
        if max_translation == 0 {
            return Err(AugmentError::invalid_param(
                "max_translation",
                "must be at least 1",
            ));
        }
        let k = self.rng.uniform_int(max_translation);
        Ok(rotate_right(x, k))
    }

    /// Gaussian noise shaped like `x`, scaled then smoothed with sigma 2.
    pub fn corr_noise_like(&mut self, x: &[f64], scale: f64) -> AugmentResult<Vec<f64>> {
        let noise = mul_scalar(&self.rng.standard_normal_vector(x.len()), scale);
        gaussian_filter_1d(&noise, CORR_NOISE_SIGMA)
    }

    /// Independent Gaussian noise shaped like `x`.
    pub fn iid_noise_like(&mut self, x: &[f64], scale: f64) -> Vec<f64> {
        mul_scalar(&self.rng.standard_normal_vector(x.len()), scale)
    }

    /// Subtracts `scale * (u - 0.5) * linspace(-0.5, 0.5, len(x))`.
    pub fn shear(&mut self, x: &[f64], scale: f64) -> AugmentResult<Vec<f64>> {
        let coeff = scale * (self.rng.uniform_float() - 0.5);
        sub(x, &mul_scalar(&linspace(-0.5, 0.5, x.len()), coeff))
    }

    /// Resamples `x` to `n` samples.
    pub fn interpolate(&self, x: &[f64], n: usize) -> AugmentResult<Vec<f64>> {
        interpolate(x, n)
    }
}

impl<R> fmt::Debug for Rules<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("config", &self.config)
            .field("working_len", &self.working_len)
            .finish_non_exhaustive()
    }
}

impl<R> fmt::Display for Rules<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.config;
        write!(
            f,
            "Rules{{padding: [{}, {}], template_len: {}, scale_coeff: {}, max_translation: {}, corr_noise_scale: {}, iid_noise_scale: {}, shear_scale: {}, shuffle_seq: {}, final_seq_length: {}}}",
            self.padding_low,
            self.padding_high,
            c.template_len,
            c.scale_coeff,
            c.max_translation,
            c.corr_noise_scale,
            c.iid_noise_scale,
            c.shear_scale,
            c.shuffle_seq,
            c.final_seq_length,
        )
    }
}

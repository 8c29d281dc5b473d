//! The ordered augmentation pipeline.

use tracing::debug;

use crate::error::{AugmentError, AugmentResult};
use crate::rng::RandomSource;
use crate::sequence::{add, add_scalar, mul, nonzero_mask};

use super::rules::{Rules, ZERO_OFFSET};

impl<R: RandomSource> Rules<R> {
    /// Augments one template signal and its position axis.
    ///
    /// Steps, in order: offset, pad, resample to the working length, scale,
    /// translate, mask, correlated-noise blend, iid noise, shear, resample to
    /// `final_seq_length`. Draws happen in the order pad, scale, translate,
    /// correlated noise, iid noise, shear; reordering any of them changes
    /// every seeded output.
    ///
    /// Inputs are not modified. Both outputs have length `final_seq_length`.
    ///
    /// # Errors
    /// [`AugmentError::InvalidLength`] if `signal` or `axis` is empty. Any
    /// error aborts the call before an output is produced.
    pub fn transform(&mut self, signal: &[f64], axis: &[f64]) -> AugmentResult<(Vec<f64>, Vec<f64>)> {
        if signal.is_empty() || axis.is_empty() {
            return Err(AugmentError::invalid_length(format!(
                "signal and axis must be non-empty, got {} and {}",
                signal.len(),
                axis.len()
            )));
        }

        let working_len = self.working_len;
        let final_len = self.config.final_seq_length;

        let x = add_scalar(signal, ZERO_OFFSET);
        let x = self.pad(&x, self.padding_low, self.padding_high)?;
        debug!(padded_len = x.len(), "padded signal");

        let x = self.interpolate(&x, working_len)?;
        let t = self.interpolate(axis, working_len)?;

        let x = self.scale(&x, self.config.scale_coeff);
        let x = self.translate(&x, self.config.max_translation)?;

        let mask = nonzero_mask(&x);
        let inverse_mask: Vec<f64> = mask.iter().map(|m| 1.0 - m).collect();
        let corr = self.corr_noise_like(&x, self.config.corr_noise_scale)?;
        let x = add(&mul(&x, &mask)?, &mul(&corr, &inverse_mask)?)?;
        debug!(
            masked = inverse_mask.iter().filter(|&&m| m == 1.0).count(),
            "blended correlated noise"
        );

        let iid = self.iid_noise_like(&x, self.config.iid_noise_scale);
        let x = add(&x, &iid)?;

        let x = self.shear(&x, self.config.shear_scale)?;

        let x = self.interpolate(&x, final_len)?;
        let t = self.interpolate(&t, final_len)?;

        Ok((x, t))
    }
}

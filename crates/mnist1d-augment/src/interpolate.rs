//! Piecewise-linear resampling.

use crate::error::{AugmentError, AugmentResult};
use crate::sequence::linspace;

/// Resamples `x` to exactly `target_len` samples.
///
/// Both the source and the target are parametrized over `[0, 1]`, so the
/// first and last samples are always preserved. `target_len == x.len()`
/// still goes through interpolation.
///
/// # Errors
/// [`AugmentError::InvalidLength`] if `x` is empty or `target_len` is 0.
///
/// # Example
/// ```
/// use mnist1d_augment::interpolate::interpolate;
///
/// let out = interpolate(&[0.0, 1.0], 5).unwrap();
/// assert_eq!(out, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn interpolate(x: &[f64], target_len: usize) -> AugmentResult<Vec<f64>> {
    if x.is_empty() {
        return Err(AugmentError::invalid_length("cannot interpolate an empty sequence"));
    }
    if target_len == 0 {
        return Err(AugmentError::invalid_length("target length must be at least 1"));
    }

    let scale = linspace(0.0, 1.0, x.len());
    let new_scale = linspace(0.0, 1.0, target_len);
    linear_interpolate(&scale, x, &new_scale)
}

/// Evaluates the piecewise-linear function through `(xp[i], fp[i])` at each
/// point of `x`.
///
/// `xp` must be non-decreasing. Points left of `xp[0]` take `fp[0]` and
/// points right of the last knot take the last value.
pub fn linear_interpolate(xp: &[f64], fp: &[f64], x: &[f64]) -> AugmentResult<Vec<f64>> {
    if xp.len() != fp.len() {
        return Err(AugmentError::LengthMismatch {
            left: xp.len(),
            right: fp.len(),
        });
    }
    if xp.is_empty() {
        return Err(AugmentError::invalid_length("no interpolation knots"));
    }

    let last = xp.len() - 1;
    Ok(x.iter()
        .map(|&t| {
            if t <= xp[0] {
                return fp[0];
            }
            if t >= xp[last] {
                return fp[last];
            }
            // First knot strictly greater than t; always in 1..=last here.
            let hi = xp.partition_point(|&k| k <= t);
            let lo = hi - 1;
            let span = xp[hi] - xp[lo];
            if span == 0.0 {
                return fp[hi];
            }
            let w = (t - xp[lo]) / span;
            fp[lo] + w * (fp[hi] - fp[lo])
        })
        .collect())
}

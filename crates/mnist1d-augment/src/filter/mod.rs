//! Gaussian smoothing.
//!
//! [`gaussian_kernel`] builds the taps, [`convolve_1d`] applies them with
//! mirror boundaries, and [`gaussian_filter_1d`] composes the two.

mod convolve;
mod kernel;

pub use convolve::convolve_1d;
pub use kernel::{gaussian_kernel, gaussian_kernel_with_radius, kernel_radius, Kernel, TRUNCATION};

use crate::error::AugmentResult;

/// Smooths `input` with a Gaussian of standard deviation `sigma`.
///
/// Output has the same length as the input.
///
/// # Errors
/// - [`AugmentError::InvalidSigma`](crate::AugmentError::InvalidSigma) for a non-positive sigma.
/// - [`AugmentError::KernelRadiusTooLarge`](crate::AugmentError::KernelRadiusTooLarge) when
///   the input is shorter than `floor(4 * sigma + 0.5)`.
pub fn gaussian_filter_1d(input: &[f64], sigma: f64) -> AugmentResult<Vec<f64>> {
    let kernel = gaussian_kernel(sigma)?;
    convolve_1d(input, &kernel)
}

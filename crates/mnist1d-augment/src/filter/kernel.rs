//! Discrete Gaussian kernel construction.

use std::ops::Deref;

use crate::error::{AugmentError, AugmentResult};

/// Kernel half-width in standard deviations.
pub const TRUNCATION: f64 = 4.0;

/// A normalized, symmetric, odd-length smoothing kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    values: Vec<f64>,
}

impl Kernel {
    /// Number of taps on each side of the center.
    pub fn radius(&self) -> usize {
        self.values.len() / 2
    }

    /// Kernel taps, index 0 at `-radius`.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the kernel, returning its taps.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for Kernel {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

/// Kernel radius for `sigma`: `floor(4 * sigma + 0.5)`.
///
/// Computed with a truncating cast, not `f64::round`.
pub fn kernel_radius(sigma: f64) -> usize {
    (TRUNCATION * sigma + 0.5) as usize
}

/// Builds a normalized Gaussian kernel of radius `floor(4 * sigma + 0.5)`.
///
/// # Errors
/// [`AugmentError::InvalidSigma`] if `sigma` is not finite and positive.
pub fn gaussian_kernel(sigma: f64) -> AugmentResult<Kernel> {
    validate_sigma(sigma)?;
    gaussian_kernel_with_radius(sigma, kernel_radius(sigma))
}

/// Builds a normalized Gaussian kernel with an explicit radius.
///
/// Taps are `exp(-0.5 * i^2 / sigma^2)` for `i` in `[-radius, radius]`,
/// divided by their sum.
pub fn gaussian_kernel_with_radius(sigma: f64, radius: usize) -> AugmentResult<Kernel> {
    validate_sigma(sigma)?;

    let sigma2 = sigma * sigma;
    let r = radius as f64;
    let mut values: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let x = i as f64 - r;
            (-0.5 / sigma2 * x * x).exp()
        })
        .collect();

    let total: f64 = values.iter().sum();
    for v in &mut values {
        *v /= total;
    }

    Ok(Kernel { values })
}

fn validate_sigma(sigma: f64) -> AugmentResult<()> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(AugmentError::InvalidSigma { sigma });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGMA_2_REFERENCE: [f64; 17] = [
        6.69162896e-05,
        4.36349021e-04,
        2.21596317e-03,
        8.76430436e-03,
        2.69959580e-02,
        6.47599366e-02,
        1.20987490e-01,
        1.76035759e-01,
        1.99474648e-01,
        1.76035759e-01,
        1.20987490e-01,
        6.47599366e-02,
        2.69959580e-02,
        8.76430436e-03,
        2.21596317e-03,
        4.36349021e-04,
        6.69162896e-05,
    ];

    #[test]
    fn test_sigma_2_matches_reference() {
        let kernel = gaussian_kernel(2.0).unwrap();
        assert_eq!(kernel.len(), 17);
        assert_eq!(kernel.radius(), 8);

        for (i, (got, want)) in kernel.iter().zip(SIGMA_2_REFERENCE).enumerate() {
            assert!((got - want).abs() < 1e-4, "tap {i}: {got} vs {want}");
        }
        assert!((kernel.iter().sum::<f64>() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_kernel_is_symmetric_and_non_negative() {
        for sigma in [0.3, 1.0, 2.0, 3.7] {
            let kernel = gaussian_kernel(sigma).unwrap();
            let n = kernel.len();
            assert_eq!(n % 2, 1);
            for i in 0..n {
                assert!(kernel[i] >= 0.0);
                assert!((kernel[i] - kernel[n - 1 - i]).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn test_radius_rounds_half_up() {
        assert_eq!(kernel_radius(2.0), 8);
        assert_eq!(kernel_radius(0.125), 1);
        assert_eq!(kernel_radius(0.1), 0);
        assert_eq!(kernel_radius(0.375), 2);
    }

    #[test]
    fn test_tiny_sigma_is_identity() {
        let kernel = gaussian_kernel(0.1).unwrap();
        assert_eq!(kernel.as_slice(), &[1.0]);
    }

    #[test]
    fn test_invalid_sigma() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                gaussian_kernel(sigma),
                Err(AugmentError::InvalidSigma { .. })
            ));
        }
    }
}

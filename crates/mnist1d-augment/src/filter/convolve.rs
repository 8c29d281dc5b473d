//! Mirror-padded 1D convolution.

use crate::error::{AugmentError, AugmentResult};
use crate::sequence::{dot, mirror};

/// Convolves `input` with an odd-length `kernel`, reflecting at both edges.
///
/// The input is extended to `reverse(input) ++ input ++ reverse(input)` and
/// output `i` is the dot product of the kernel with the window of the
/// extension centered on `i + len(input)`. The kernel is applied as given
/// (no flip), so asymmetric kernels act as correlations.
///
/// # Errors
/// - [`AugmentError::InvalidKernel`] if the kernel is empty or even-length.
/// - [`AugmentError::KernelRadiusTooLarge`] if `len(kernel) / 2 > len(input)`.
///
/// # Example
/// ```
/// use mnist1d_augment::filter::convolve_1d;
///
/// let out = convolve_1d(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 0.0, -1.0]).unwrap();
/// assert_eq!(out, vec![-1.0, -2.0, -2.0, -2.0, -1.0]);
/// ```
pub fn convolve_1d(input: &[f64], kernel: &[f64]) -> AugmentResult<Vec<f64>> {
    if kernel.is_empty() || kernel.len() % 2 == 0 {
        return Err(AugmentError::InvalidKernel { len: kernel.len() });
    }

    let n = input.len();
    let radius = kernel.len() / 2;
    if radius > n {
        return Err(AugmentError::KernelRadiusTooLarge { radius, len: n });
    }

    let extended = mirror(input);
    (0..n)
        .map(|i| {
            let start = i + n - radius;
            let end = i + n + radius + 1;
            dot(&extended[start..end], kernel)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_difference_kernel_at_boundaries() {
        let out = convolve_1d(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 0.0, -1.0]).unwrap();
        assert_eq!(out, vec![-1.0, -2.0, -2.0, -2.0, -1.0]);
    }

    #[test]
    fn test_even_kernel_rejected() {
        let err = convolve_1d(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 0.0, -1.0, 1.0]).unwrap_err();
        assert!(matches!(err, AugmentError::InvalidKernel { len: 4 }));
        assert!(convolve_1d(&[1.0], &[]).is_err());
    }

    #[test]
    fn test_radius_larger_than_input_rejected() {
        let kernel = [1.0, 0.0, -1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 2.0, 0.5];
        let err = convolve_1d(&[1.0, 2.0, 3.0, 4.0, 5.0], &kernel).unwrap_err();
        assert!(matches!(
            err,
            AugmentError::KernelRadiusTooLarge { radius: 6, len: 5 }
        ));
    }

    #[test]
    fn test_radius_equal_to_input_allowed() {
        let kernel = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
        let input = [4.0, 5.0, 6.0];
        assert_eq!(convolve_1d(&input, &kernel).unwrap(), input.to_vec());
    }

    #[test]
    fn test_identity_kernel() {
        let input = [0.5, -1.0, 2.0];
        assert_eq!(convolve_1d(&input, &[1.0]).unwrap(), input.to_vec());
    }

    #[test]
    fn test_empty_input_with_unit_kernel() {
        assert!(convolve_1d(&[], &[1.0]).unwrap().is_empty());
    }
}

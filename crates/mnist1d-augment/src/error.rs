//! Error types for the augmentation pipeline.

use mnist1d_spec::BackendError;
use thiserror::Error;

/// Result type for augmentation operations.
pub type AugmentResult<T> = Result<T, AugmentError>;

/// Errors that can occur while building kernels or transforming signals.
///
/// None of these are transient. Nothing in this crate retries or recovers
/// from them.
#[derive(Debug, Error)]
pub enum AugmentError {
    /// Smoothing width is not a positive finite number.
    #[error("invalid sigma: {sigma} (must be finite and > 0)")]
    InvalidSigma {
        /// The rejected sigma.
        sigma: f64,
    },

    /// The kernel cannot be mirrored into the extended buffer.
    #[error("kernel radius {radius} exceeds input length {len}")]
    KernelRadiusTooLarge {
        /// Kernel radius (`len(kernel) / 2`).
        radius: usize,
        /// Input length.
        len: usize,
    },

    /// Kernel is empty or has an even number of taps.
    #[error("kernel must have an odd, non-zero length, got {len}")]
    InvalidKernel {
        /// Kernel length.
        len: usize,
    },

    /// Translation span exceeds the signal length.
    #[error("max_translation {max_translation} exceeds signal length {len}")]
    TranslationWindowTooLarge {
        /// Requested translation span.
        max_translation: usize,
        /// Signal length.
        len: usize,
    },

    /// Rules configuration is malformed.
    #[error("invalid rules configuration: {message}")]
    InvalidRulesConfiguration {
        /// Description of every problem found.
        message: String,
    },

    /// A sequence or target length is unusable.
    #[error("invalid length: {message}")]
    InvalidLength {
        /// Error message.
        message: String,
    },

    /// Elementwise operation on sequences of different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl AugmentError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid rules configuration error.
    pub fn invalid_rules(message: impl Into<String>) -> Self {
        Self::InvalidRulesConfiguration {
            message: message.into(),
        }
    }

    /// Creates an invalid length error.
    pub fn invalid_length(message: impl Into<String>) -> Self {
        Self::InvalidLength {
            message: message.into(),
        }
    }
}

impl BackendError for AugmentError {
    fn code(&self) -> &'static str {
        match self {
            AugmentError::InvalidSigma { .. } => "AUG_001",
            AugmentError::KernelRadiusTooLarge { .. } => "AUG_002",
            AugmentError::InvalidKernel { .. } => "AUG_003",
            AugmentError::TranslationWindowTooLarge { .. } => "AUG_004",
            AugmentError::InvalidRulesConfiguration { .. } => "AUG_005",
            AugmentError::InvalidLength { .. } => "AUG_006",
            AugmentError::LengthMismatch { .. } => "AUG_007",
            AugmentError::InvalidParameter { .. } => "AUG_008",
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AugmentError::invalid_param("workers", "must be at least 1");
        assert!(err.to_string().contains("workers"));
        assert!(err.to_string().contains("at least 1"));
        assert_eq!(err.code(), "AUG_008");
    }

    #[test]
    fn test_kernel_error_code_and_message() {
        let err = AugmentError::KernelRadiusTooLarge { radius: 8, len: 5 };
        assert_eq!(err.code(), "AUG_002");
        assert_eq!(err.to_string(), "kernel radius 8 exceeds input length 5");
        assert_eq!(AugmentError::InvalidSigma { sigma: 0.0 }.code(), "AUG_001");
    }

    #[test]
    fn test_rules_error_message() {
        let err = AugmentError::invalid_rules("E002: padding low (9) must not exceed high (1)");
        assert_eq!(err.code(), "AUG_005");
        assert!(err.to_string().contains("E002"));
    }
}

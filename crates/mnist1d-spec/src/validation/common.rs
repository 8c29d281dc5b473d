//! Common validation utilities shared by the config validators.

use std::fmt;

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a value is finite.
///
/// # Example
/// ```
/// use mnist1d_spec::validation::common::validate_finite;
///
/// assert!(validate_finite("shear_scale", -0.75).is_ok());
/// assert!(validate_finite("shear_scale", f64::NAN).is_err());
/// ```
pub fn validate_finite(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is non-negative (>= 0).
///
/// # Arguments
/// * `name` - Name of the parameter (for error messages)
/// * `value` - Value to validate
///
/// # Returns
/// * `Ok(())` if value is non-negative
/// * `Err(CommonValidationError)` if value is < 0 or not finite
///
/// # Example
/// ```
/// use mnist1d_spec::validation::common::validate_non_negative;
///
/// assert!(validate_non_negative("iid_noise_scale", 0.0).is_ok());
/// assert!(validate_non_negative("iid_noise_scale", 0.02).is_ok());
/// assert!(validate_non_negative("iid_noise_scale", -1.0).is_err());
/// ```
pub fn validate_non_negative(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value < 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a length-like field is at least 1.
///
/// # Example
/// ```
/// use mnist1d_spec::validation::common::validate_min_len;
///
/// assert!(validate_min_len("final_seq_length", 40).is_ok());
/// assert!(validate_min_len("final_seq_length", 0).is_err());
/// ```
pub fn validate_min_len(name: &str, value: usize) -> Result<(), CommonValidationError> {
    if value == 0 {
        return Err(CommonValidationError::new(format!(
            "{} must be at least 1, got 0",
            name
        )));
    }
    Ok(())
}

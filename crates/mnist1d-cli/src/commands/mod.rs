//! CLI command implementations

use std::fmt;

use mnist1d_spec::BackendError;

pub mod generate;
pub mod json_output;
pub mod preview;
pub mod validate;

/// Formats a backend error as `[CODE] message`.
pub fn tagged<E: BackendError + fmt::Display>(error: &E) -> String {
    format!("[{}] {}", error.code(), error)
}

//! MNIST-1D End-to-End Test Infrastructure
//!
//! This crate provides integration tests across the workspace:
//!
//! - **Pipeline**: templates through `Rules::transform` to fixed-length output
//! - **Config**: JSON files through validation and the CLI commands
//! - **Determinism**: bit-identical output across runs with the same seed
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p mnist1d-tests
//!
//! # Property tests only
//! cargo test -p mnist1d-tests --test proptest_transform
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use mnist1d_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| rules_output(42), 3);
//! result.assert_deterministic();
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{
    compute_hash, signal_bytes, verify_determinism, DeterminismResult, DiffInfo,
};

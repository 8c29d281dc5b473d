//! Configuration library for 1D signal augmentation.
//!
//! This crate provides the typed configuration records consumed by the
//! augmentation pipeline, their validation, and canonical hashing.
//!
//! # Example
//!
//! ```
//! use mnist1d_spec::{DatasetConfig, validate_dataset_config};
//! use mnist1d_spec::hash::canonical_config_hash;
//!
//! let config = DatasetConfig::from_json(r#"{ "seed": 7, "padding": [30, 50] }"#).unwrap();
//! assert_eq!(config.rules.template_len, 12);
//!
//! let result = validate_dataset_config(&config);
//! assert!(result.is_ok());
//!
//! let hash = canonical_config_hash(&config).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`config`]: `RulesConfig` and `DatasetConfig` with their defaults
//! - [`error`]: Error codes, validation errors, and the backend error trait
//! - [`hash`]: Canonical config hashing and seed derivation
//! - [`validation`]: Config validation functions

pub mod config;
pub mod error;
pub mod hash;
pub mod validation;

pub use config::{DatasetConfig, RulesConfig, NUM_CLASSES};
pub use error::{
    BackendError, ConfigError, ErrorCode, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::{canonical_config_hash, derive_worker_seed};
pub use validation::{validate_dataset_config, validate_rules_config};

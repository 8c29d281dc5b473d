//! MNIST-1D Augmentation Pipeline
//!
//! This crate turns ten fixed 12-sample digit prototypes into labeled,
//! fixed-length synthetic signals for ML experiments.
//!
//! # Overview
//!
//! Every example goes through the same ordered sequence of randomized steps:
//!
//! - **Pad** - append a random number of zeros
//! - **Resample** - piecewise-linear interpolation to a working length
//! - **Scale** - random amplitude factor around 1
//! - **Translate** - circular shift right
//! - **Correlated noise** - Gaussian-smoothed noise fills the zero regions
//! - **IID noise** - independent Gaussian noise everywhere
//! - **Shear** - random linear ramp
//! - **Resample** - interpolation to the final sequence length
//!
//! The correlated-noise step uses a mirror-padded Gaussian convolution from
//! the [`filter`] module.
//!
//! # Determinism
//!
//! All randomness comes from an owned PCG32 stream. Given the same config and
//! seed the output is bit-identical across runs (on the same platform).
//! Parallel generation derives one seed per worker via BLAKE3, so its output
//! depends on the seed and worker count only.
//!
//! # Example
//!
//! ```
//! use mnist1d_augment::{Rules, Templates};
//! use mnist1d_spec::RulesConfig;
//!
//! let templates = Templates::digits();
//! let mut rules = Rules::from_seed(RulesConfig::default(), 42).unwrap();
//! let (x, t) = rules.transform(&templates.x[3], &templates.t).unwrap();
//! assert_eq!(x.len(), 40);
//! assert_eq!(t.len(), 40);
//! ```
//!
//! # Crate Structure
//!
//! - [`transform`] - [`Rules`] and the augmentation pipeline
//! - [`filter`] - Gaussian kernel and mirror-padded convolution
//! - [`interpolate`] - Linear resampling
//! - [`dataset`] - Dataset assembly, serial and parallel
//! - [`templates`] - The digit prototypes
//! - [`rng`] - Seeded random source
//! - [`sequence`] - Elementwise helpers over `&[f64]`
//! - [`render`] - Debug ASCII rendering

pub mod dataset;
pub mod error;
pub mod filter;
pub mod interpolate;
pub mod render;
pub mod rng;
pub mod sequence;
pub mod templates;
pub mod transform;

// Re-export main types at crate root
pub use dataset::{make_dataset, make_dataset_parallel, Dataset};
pub use error::{AugmentError, AugmentResult};
pub use render::render_ascii;
pub use rng::{create_rng, RandomSource};
pub use templates::Templates;
pub use transform::Rules;

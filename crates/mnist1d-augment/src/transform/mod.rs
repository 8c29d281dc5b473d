//! Augmentation rules and the transform pipeline.
//!
//! A [`Rules`] value owns a validated [`RulesConfig`](mnist1d_spec::RulesConfig)
//! and a [`RandomSource`](crate::rng::RandomSource). Each public step is
//! exposed on its own; [`Rules::transform`] runs them in the fixed order.

mod pipeline;
mod rules;

#[cfg(test)]
mod tests;

pub use rules::{Rules, CORR_NOISE_SIGMA, ZERO_OFFSET};

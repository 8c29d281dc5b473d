//! MNIST-1D CLI library.
//!
//! This crate provides the core functionality for the `mnist1d` binary:
//! config loading, logging setup, and the `validate`, `preview` and
//! `generate` commands.

pub mod commands;
pub mod input;
pub mod logging;

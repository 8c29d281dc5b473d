//! Deterministic randomness for the augmentation pipeline.
//!
//! All randomness flows through [`RandomSource`]. The default generator is
//! PCG32; parallel workers get independent streams through BLAKE3 seed
//! derivation (see [`mnist1d_spec::derive_worker_seed`]).

use mnist1d_spec::derive_worker_seed;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg32;

/// The three kinds of draw the pipeline makes.
///
/// Every call advances one shared state, so the output of a run depends on
/// the seed and on the exact order of calls.
pub trait RandomSource {
    /// A uniform float in `[0, 1)`.
    fn uniform_float(&mut self) -> f64;

    /// `n` independent standard-normal draws.
    fn standard_normal_vector(&mut self, n: usize) -> Vec<f64>;

    /// A uniform integer in `[0, n)`. Returns 0 without drawing when `n == 0`.
    fn uniform_int(&mut self, n: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn uniform_float(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn standard_normal_vector(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample::<f64, _>(StandardNormal)).collect()
    }

    fn uniform_int(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.gen_range(0..n)
    }
}

/// Creates a PCG32 RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Creates the RNG for one parallel worker.
///
/// # Arguments
/// * `master_seed` - The run's seed
/// * `worker_index` - The 0-indexed worker number
pub fn create_worker_rng(master_seed: u64, worker_index: u32) -> Pcg32 {
    create_rng(derive_worker_seed(master_seed, worker_index))
}

/// Draws a uniformly random permutation of `0..n` (Fisher-Yates).
pub fn permutation<R: RandomSource + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = rng.uniform_int(i + 1);
        perm.swap(i, j);
    }
    perm
}

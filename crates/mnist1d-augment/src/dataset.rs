//! Dataset assembly: many augmented copies of each template.
//!
//! The assembler calls [`Rules::transform`] once per example, shuffles the
//! batch dimension, optionally shuffles the sequence dimension, and whitens
//! across the whole set. Nothing here is persisted.

use mnist1d_spec::validation::validate_worker_count;
use mnist1d_spec::{validate_dataset_config, DatasetConfig, ErrorCode, ValidationResult};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{AugmentError, AugmentResult};
use crate::rng::{create_rng, create_worker_rng, permutation, RandomSource};
use crate::sequence::{div_scalar, mean, permute, std_dev};
use crate::templates::Templates;
use crate::transform::Rules;

/// One generated example: label, signal, axis.
type Example = (u8, Vec<f64>, Vec<f64>);

/// A generated dataset held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Augmented signals, one row per example.
    pub x: Vec<Vec<f64>>,
    /// Class label of each row.
    pub y: Vec<u8>,
    /// Position axis shared by every row, divided by its standard deviation.
    pub t: Vec<f64>,
    /// Prototypes the rows were generated from.
    pub templates: Templates,
}

impl Dataset {
    /// Number of examples.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Returns true if there are no examples.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Number of examples carrying `label`.
    pub fn count_label(&self, label: u8) -> usize {
        self.y.iter().filter(|&&y| y == label).count()
    }
}

/// Generates a dataset on the current thread from one seeded stream.
///
/// # Errors
/// [`AugmentError::InvalidRulesConfiguration`] if the config fails
/// validation, [`AugmentError::TranslationWindowTooLarge`] or
/// [`AugmentError::KernelRadiusTooLarge`] if the rules cannot be built; any
/// transform error is propagated unchanged.
pub fn make_dataset(config: &DatasetConfig) -> AugmentResult<Dataset> {
    ensure_valid(validate_dataset_config(config))?;

    let templates = Templates::digits();
    let per_class = config.samples_per_class();
    let mut rules = Rules::from_seed(config.rules.clone(), config.seed)?;

    info!(
        num_samples = per_class * templates.len(),
        seed = config.seed,
        "generating dataset"
    );

    let mut rows = Vec::with_capacity(per_class * templates.len());
    let mut labels = Vec::with_capacity(per_class * templates.len());
    let mut axis = Vec::new();
    for (label, template) in templates.y.iter().zip(&templates.x) {
        for _ in 0..per_class {
            let (x, t) = rules.transform(template, &templates.t)?;
            rows.push(x);
            labels.push(*label);
            axis = t;
        }
    }

    let mut rng = rules.into_rng();
    finish(config, rows, labels, axis, templates, &mut rng)
}

/// Generates a dataset with `workers` independent streams in parallel.
///
/// The examples are split into `workers` contiguous chunks in label order.
/// Chunk `w` is produced by its own rules seeded with
/// `derive_worker_seed(seed, w)`, and the final shuffle draws from the master
/// seed, so the result depends on `seed` and `workers` only, never on thread
/// scheduling.
pub fn make_dataset_parallel(config: &DatasetConfig, workers: usize) -> AugmentResult<Dataset> {
    let mut validation = validate_dataset_config(config);
    validation.merge(validate_worker_count(workers));
    ensure_valid(validation)?;

    let templates = Templates::digits();
    let per_class = config.samples_per_class();
    let jobs: Vec<u8> = templates
        .y
        .iter()
        .flat_map(|&label| std::iter::repeat(label).take(per_class))
        .collect();
    let chunk_len = jobs.len().div_ceil(workers).max(1);

    info!(
        num_samples = jobs.len(),
        workers,
        seed = config.seed,
        "generating dataset in parallel"
    );

    let chunks: Vec<(usize, &[u8])> = jobs.chunks(chunk_len).enumerate().collect();
    let results: Vec<AugmentResult<Vec<Example>>> = chunks
        .into_par_iter()
        .map(|(worker, labels)| -> AugmentResult<Vec<Example>> {
            let rng = create_worker_rng(config.seed, worker as u32);
            let mut rules = Rules::new(config.rules.clone(), rng)?;
            debug!(worker, examples = labels.len(), "worker started");
            labels
                .iter()
                .map(|&label| -> AugmentResult<Example> {
                    let (x, t) = rules.transform(&templates.x[label as usize], &templates.t)?;
                    Ok((label, x, t))
                })
                .collect()
        })
        .collect();

    let mut rows = Vec::with_capacity(jobs.len());
    let mut labels = Vec::with_capacity(jobs.len());
    let mut axis = Vec::new();
    for chunk in results {
        for (label, x, t) in chunk? {
            rows.push(x);
            labels.push(label);
            axis = t;
        }
    }

    let mut rng = create_rng(config.seed);
    finish(config, rows, labels, axis, templates, &mut rng)
}

fn finish(
    config: &DatasetConfig,
    rows: Vec<Vec<f64>>,
    labels: Vec<u8>,
    axis: Vec<f64>,
    templates: Templates,
    rng: &mut impl RandomSource,
) -> AugmentResult<Dataset> {
    let batch_perm = permutation(rng, labels.len());
    let mut x = permute(&rows, &batch_perm);
    let y = permute(&labels, &batch_perm);

    if config.rules.shuffle_seq {
        let seq_perm = permutation(rng, config.rules.final_seq_length);
        x = x.iter().map(|row| permute(row, &seq_perm)).collect();
    }

    let t_std = std_dev(&axis);
    let t = if t_std > 0.0 { div_scalar(&axis, t_std) } else { axis };

    // Whitening spans the whole set, unlike the per-row template normalization.
    let flat: Vec<f64> = x.iter().flatten().copied().collect();
    let m = mean(&flat);
    let s = std_dev(&flat);
    if s > 0.0 {
        for row in &mut x {
            for v in row.iter_mut() {
                *v = (*v - m) / s;
            }
        }
    }

    debug!(mean = m, std = s, "whitened dataset");

    Ok(Dataset { x, y, t, templates })
}

/// Rejects every validation error except an oversized translation window,
/// which building the rules reports as its own kind.
fn ensure_valid(result: ValidationResult) -> AugmentResult<()> {
    let message = result
        .errors
        .iter()
        .filter(|e| e.code != ErrorCode::TranslationExceedsWorkingLength)
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    if message.is_empty() {
        Ok(())
    } else {
        Err(AugmentError::invalid_rules(message))
    }
}

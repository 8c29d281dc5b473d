//! Configuration records for the augmentation pipeline and dataset assembly.
//!
//! Both records deserialize from flat snake_case JSON. Every field is
//! optional in the document and falls back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of digit classes produced by the dataset assembler.
pub const NUM_CLASSES: usize = 10;

/// Transform intensities and lengths for the augmentation pipeline.
///
/// Constructed once before any transform call and never mutated by the
/// pipeline itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Inclusive `[low, high]` range of zero samples appended before resampling.
    #[serde(default = "default_padding")]
    pub padding: Vec<usize>,
    /// Target length of the template part after the first resample.
    #[serde(default = "default_template_len")]
    pub template_len: usize,
    /// Amplitude scaling intensity.
    #[serde(default = "default_scale_coeff")]
    pub scale_coeff: f64,
    /// Exclusive upper bound of the circular shift.
    #[serde(default = "default_max_translation")]
    pub max_translation: usize,
    /// Standard deviation of the correlated noise before smoothing.
    #[serde(default = "default_corr_noise_scale")]
    pub corr_noise_scale: f64,
    /// Standard deviation of the independent noise.
    #[serde(default = "default_iid_noise_scale")]
    pub iid_noise_scale: f64,
    /// Shear ramp intensity.
    #[serde(default = "default_shear_scale")]
    pub shear_scale: f64,
    /// Whether the dataset assembler permutes the sequence dimension.
    #[serde(default)]
    pub shuffle_seq: bool,
    /// Length of every augmented output.
    #[serde(default = "default_final_seq_length")]
    pub final_seq_length: usize,
}

fn default_padding() -> Vec<usize> {
    vec![36, 60]
}

fn default_template_len() -> usize {
    12
}

fn default_scale_coeff() -> f64 {
    0.4
}

fn default_max_translation() -> usize {
    48
}

fn default_corr_noise_scale() -> f64 {
    0.25
}

fn default_iid_noise_scale() -> f64 {
    0.02
}

fn default_shear_scale() -> f64 {
    0.75
}

fn default_final_seq_length() -> usize {
    40
}

fn default_num_samples() -> usize {
    5000
}

fn default_seed() -> u64 {
    42
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            template_len: default_template_len(),
            scale_coeff: default_scale_coeff(),
            max_translation: default_max_translation(),
            corr_noise_scale: default_corr_noise_scale(),
            iid_noise_scale: default_iid_noise_scale(),
            shear_scale: default_shear_scale(),
            shuffle_seq: false,
            final_seq_length: default_final_seq_length(),
        }
    }
}

impl RulesConfig {
    /// Parses a rules config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the `(low, high)` padding bounds, or `None` if `padding`
    /// does not hold exactly two entries.
    pub fn padding_bounds(&self) -> Option<(usize, usize)> {
        match self.padding.as_slice() {
            [low, high] => Some((*low, *high)),
            _ => None,
        }
    }

    /// Returns the fixed working length `template_len + padding[high]`.
    pub fn working_len(&self) -> Option<usize> {
        let (_, high) = self.padding_bounds()?;
        self.template_len.checked_add(high)
    }
}

/// Full dataset assembly configuration.
///
/// In JSON the rules fields sit next to `num_samples` and `seed` at the top
/// level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatDatasetConfig", into = "FlatDatasetConfig")]
pub struct DatasetConfig {
    /// Total number of examples, split evenly across classes.
    pub num_samples: usize,
    /// Master seed for the whole run.
    pub seed: u64,
    /// Pipeline configuration.
    pub rules: RulesConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            num_samples: default_num_samples(),
            seed: default_seed(),
            rules: RulesConfig::default(),
        }
    }
}

impl DatasetConfig {
    /// Parses a dataset config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a dataset config from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the config to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, ConfigError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of examples generated per class.
    pub fn samples_per_class(&self) -> usize {
        self.num_samples / NUM_CLASSES
    }
}

/// On-disk shape of [`DatasetConfig`]: every field at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FlatDatasetConfig {
    #[serde(default = "default_num_samples")]
    num_samples: usize,
    #[serde(default = "default_seed")]
    seed: u64,
    #[serde(default = "default_padding")]
    padding: Vec<usize>,
    #[serde(default = "default_template_len")]
    template_len: usize,
    #[serde(default = "default_scale_coeff")]
    scale_coeff: f64,
    #[serde(default = "default_max_translation")]
    max_translation: usize,
    #[serde(default = "default_corr_noise_scale")]
    corr_noise_scale: f64,
    #[serde(default = "default_iid_noise_scale")]
    iid_noise_scale: f64,
    #[serde(default = "default_shear_scale")]
    shear_scale: f64,
    #[serde(default)]
    shuffle_seq: bool,
    #[serde(default = "default_final_seq_length")]
    final_seq_length: usize,
}

impl From<FlatDatasetConfig> for DatasetConfig {
    fn from(flat: FlatDatasetConfig) -> Self {
        Self {
            num_samples: flat.num_samples,
            seed: flat.seed,
            rules: RulesConfig {
                padding: flat.padding,
                template_len: flat.template_len,
                scale_coeff: flat.scale_coeff,
                max_translation: flat.max_translation,
                corr_noise_scale: flat.corr_noise_scale,
                iid_noise_scale: flat.iid_noise_scale,
                shear_scale: flat.shear_scale,
                shuffle_seq: flat.shuffle_seq,
                final_seq_length: flat.final_seq_length,
            },
        }
    }
}

impl From<DatasetConfig> for FlatDatasetConfig {
    fn from(config: DatasetConfig) -> Self {
        let rules = config.rules;
        Self {
            num_samples: config.num_samples,
            seed: config.seed,
            padding: rules.padding,
            template_len: rules.template_len,
            scale_coeff: rules.scale_coeff,
            max_translation: rules.max_translation,
            corr_noise_scale: rules.corr_noise_scale,
            iid_noise_scale: rules.iid_noise_scale,
            shear_scale: rules.shear_scale,
            shuffle_seq: rules.shuffle_seq,
            final_seq_length: rules.final_seq_length,
        }
    }
}

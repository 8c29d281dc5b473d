//! Shared configs, signals and config files for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use mnist1d_spec::{DatasetConfig, RulesConfig};
use tempfile::TempDir;

/// Small rules used across the end-to-end tests: working length 15, final
/// length 16.
pub fn small_rules() -> RulesConfig {
    RulesConfig {
        padding: vec![1, 10],
        template_len: 5,
        scale_coeff: 0.5,
        max_translation: 2,
        corr_noise_scale: 0.1,
        iid_noise_scale: 0.1,
        shear_scale: 0.1,
        shuffle_seq: false,
        final_seq_length: 16,
    }
}

/// A dataset config with default rules.
pub fn dataset_config(num_samples: usize, seed: u64) -> DatasetConfig {
    DatasetConfig {
        num_samples,
        seed,
        rules: RulesConfig::default(),
    }
}

/// `[1, 2, ..., n]` as floats.
pub fn ramp(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

/// A temporary directory holding config files.
pub struct ConfigDir {
    pub root: TempDir,
}

impl ConfigDir {
    /// Create a new empty directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the directory path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write raw JSON to `name` and return its path.
    pub fn write(&self, name: &str, json: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, json).expect("Failed to write config file");
        path
    }

    /// Serialize `config` to `name` and return its path.
    pub fn write_config(&self, name: &str, config: &DatasetConfig) -> PathBuf {
        let json = config
            .to_json_pretty()
            .expect("Failed to serialize config");
        self.write(name, &json)
    }
}

impl Default for ConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

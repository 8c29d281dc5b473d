//! Config loading shared by every command.
//!
//! A command either reads a `DatasetConfig` JSON file or starts from the
//! built-in defaults, then applies command-line overrides on top.

use std::path::Path;

use anyhow::{Context, Result};
use mnist1d_spec::DatasetConfig;

/// Loads a dataset config, falling back to defaults when `path` is `None`.
///
/// `seed` replaces the config's seed when given.
pub fn load_config(path: Option<&str>, seed: Option<u64>) -> Result<DatasetConfig> {
    let mut config = match path {
        Some(p) => DatasetConfig::from_path(Path::new(p))
            .with_context(|| format!("Failed to load config file: {}", p))?,
        None => DatasetConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_path() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config, DatasetConfig::default());
    }

    #[test]
    fn test_seed_override() {
        let config = load_config(None, Some(9)).unwrap();
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_reads_file_and_overrides_seed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{ "num_samples": 100, "seed": 1 }"#).unwrap();

        let config = load_config(path.to_str(), Some(5)).unwrap();
        assert_eq!(config.num_samples, 100);
        assert_eq!(config.seed, 5);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_config(Some("/nonexistent/config.json"), None).unwrap_err();
        assert!(err.to_string().contains("Failed to load config file"));
    }
}

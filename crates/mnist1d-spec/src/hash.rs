//! Canonical hashing and seed derivation.
//!
//! - Config canonicalization (sorted keys, no whitespace, JCS number format)
//! - BLAKE3 hashing for config hashes
//! - Seed derivation for parallel workers

use crate::config::DatasetConfig;
use crate::error::ConfigError;

/// Computes the canonical BLAKE3 hash of a dataset config.
///
/// ```text
/// config_hash = hex(BLAKE3(canonical_json(config)))
/// ```
///
/// Two configs that describe the same run hash identically regardless of the
/// key order or whitespace of the documents they were parsed from.
///
/// # Example
/// ```
/// use mnist1d_spec::DatasetConfig;
/// use mnist1d_spec::hash::canonical_config_hash;
///
/// let a = DatasetConfig::from_json(r#"{"seed": 1, "num_samples": 50}"#).unwrap();
/// let b = DatasetConfig::from_json(r#"{"num_samples": 50, "seed": 1}"#).unwrap();
/// assert_eq!(canonical_config_hash(&a).unwrap(), canonical_config_hash(&b).unwrap());
/// ```
pub fn canonical_config_hash(config: &DatasetConfig) -> Result<String, ConfigError> {
    let value = config.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_value(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Produces a deterministic JSON string with sorted keys and no whitespace.
pub fn canonicalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_jcs_number(n),
        serde_json::Value::String(s) => format_jcs_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_value).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| format!("{}:{}", format_jcs_string(k), canonicalize_value(v)))
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn format_jcs_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            if f == 0.0 {
                return "0".to_string();
            }
            if f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
            let s = format!("{}", f);
            if s.contains('.') && !s.contains('e') && !s.contains('E') {
                return s.trim_end_matches('0').trim_end_matches('.').to_string();
            }
            s
        }
        _ => "null".to_string(),
    }
}

fn format_jcs_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Derives an independent seed for one generation worker.
///
/// ```text
/// worker_seed = truncate_u64(BLAKE3(master_seed || worker_index))
/// ```
///
/// # Example
/// ```
/// use mnist1d_spec::hash::derive_worker_seed;
///
/// let w0 = derive_worker_seed(42, 0);
/// let w1 = derive_worker_seed(42, 1);
/// assert_ne!(w0, w1);
/// assert_eq!(w0, derive_worker_seed(42, 0));
/// ```
pub fn derive_worker_seed(master_seed: u64, worker_index: u32) -> u64 {
    let mut input = Vec::with_capacity(12);
    input.extend_from_slice(&master_seed.to_le_bytes());
    input.extend_from_slice(&worker_index.to_le_bytes());

    let hash = blake3::hash(&input);

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[0..8]);
    u64::from_le_bytes(bytes)
}

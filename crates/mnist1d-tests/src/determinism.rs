//! Determinism testing helpers.
//!
//! Signals are compared through their exact little-endian bit patterns, so
//! `-0.0` vs `0.0` or two different NaN payloads count as differences.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Number of samples in the reference output.
    pub output_len: usize,
    /// BLAKE3 hash of the reference output bytes.
    pub hash: String,
    /// If non-deterministic, the first differing sample.
    pub diff_info: Option<DiffInfo>,
}

/// The first sample that differs between two runs.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffInfo {
    /// Sample index, or the shorter length when the lengths differ.
    pub index: usize,
    /// Value from the first run.
    pub expected: Option<f64>,
    /// Value from the differing run.
    pub actual: Option<f64>,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at sample {}: expected {:?}, got {:?} (run {})",
            self.index, self.expected, self.actual, self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output length: {}\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_len, self.hash, diff
            );
        }
    }
}

/// Little-endian bytes of every sample, in order.
pub fn signal_bytes(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// BLAKE3 hex digest of `data`.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Runs `generate_fn` `runs` times and compares every output with the first.
///
/// # Panics
/// If `runs < 2`.
pub fn verify_determinism<F>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> Vec<f64>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let hash = compute_hash(&signal_bytes(&reference));

    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = find_first_difference(&reference, &output, run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_len: reference.len(),
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_len: reference.len(),
        hash,
        diff_info: None,
    }
}

fn find_first_difference(expected: &[f64], actual: &[f64], run_index: usize) -> Option<DiffInfo> {
    let mismatch = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e.to_bits() != a.to_bits());

    match mismatch {
        Some(index) => Some(DiffInfo {
            index,
            expected: Some(expected[index]),
            actual: Some(actual[index]),
            run_index,
        }),
        None if expected.len() != actual.len() => {
            let index = expected.len().min(actual.len());
            Some(DiffInfo {
                index,
                expected: expected.get(index).copied(),
                actual: actual.get(index).copied(),
                run_index,
            })
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identical_runs() {
        let result = verify_determinism(|| vec![1.0, 2.0, 3.0], 3);
        assert!(result.is_deterministic);
        assert_eq!(result.output_len, 3);
        assert_eq!(result.hash.len(), 64);
        result.assert_deterministic();
    }

    #[test]
    fn test_detects_value_change() {
        let counter = Cell::new(0.0);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1.0);
                vec![0.0, counter.get()]
            },
            2,
        );
        assert!(!result.is_deterministic);
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.index, 1);
        assert_eq!(diff.expected, Some(1.0));
        assert_eq!(diff.actual, Some(2.0));
    }

    #[test]
    fn test_detects_length_change() {
        let diff = find_first_difference(&[1.0, 2.0], &[1.0], 1).unwrap();
        assert_eq!(diff.index, 1);
        assert_eq!(diff.expected, Some(2.0));
        assert_eq!(diff.actual, None);
    }

    #[test]
    fn test_signed_zero_differs() {
        assert!(find_first_difference(&[0.0], &[-0.0], 1).is_some());
    }

    #[test]
    #[should_panic(expected = "at least 2")]
    fn test_requires_two_runs() {
        verify_determinism(Vec::new, 1);
    }
}

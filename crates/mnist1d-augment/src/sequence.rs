//! Numeric helpers over `f64` sequences.
//!
//! Sequences are plain `Vec<f64>` / `&[f64]`. Every helper returns a new
//! vector; inputs are never modified.

use crate::error::{AugmentError, AugmentResult};

/// `count` evenly spaced values over `[start, end]`, endpoints included.
///
/// `count == 1` yields `[start]`, `count == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut out: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            out[count - 1] = end;
            out
        }
    }
}

/// Adds `value` to every element.
pub fn add_scalar(x: &[f64], value: f64) -> Vec<f64> {
    x.iter().map(|v| v + value).collect()
}

/// Multiplies every element by `value`.
pub fn mul_scalar(x: &[f64], value: f64) -> Vec<f64> {
    x.iter().map(|v| v * value).collect()
}

/// Divides every element by `value`.
pub fn div_scalar(x: &[f64], value: f64) -> Vec<f64> {
    x.iter().map(|v| v / value).collect()
}

fn zip_with(a: &[f64], b: &[f64], f: impl Fn(f64, f64) -> f64) -> AugmentResult<Vec<f64>> {
    if a.len() != b.len() {
        return Err(AugmentError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| f(*x, *y)).collect())
}

/// Elementwise `a + b`.
pub fn add(a: &[f64], b: &[f64]) -> AugmentResult<Vec<f64>> {
    zip_with(a, b, |x, y| x + y)
}

/// Elementwise `a - b`.
pub fn sub(a: &[f64], b: &[f64]) -> AugmentResult<Vec<f64>> {
    zip_with(a, b, |x, y| x - y)
}

/// Elementwise `a * b`.
pub fn mul(a: &[f64], b: &[f64]) -> AugmentResult<Vec<f64>> {
    zip_with(a, b, |x, y| x * y)
}

/// Dot product of two equal-length sequences.
pub fn dot(a: &[f64], b: &[f64]) -> AugmentResult<f64> {
    if a.len() != b.len() {
        return Err(AugmentError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Sum of all elements.
pub fn sum(x: &[f64]) -> f64 {
    x.iter().sum()
}

/// Arithmetic mean. Empty input yields 0.
pub fn mean(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    sum(x) / x.len() as f64
}

/// Population standard deviation (divides by `n`). Empty input yields 0.
pub fn std_dev(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let m = mean(x);
    let var = x.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / x.len() as f64;
    var.sqrt()
}

/// 1.0 where the sample is nonzero, 0.0 where it is exactly zero.
pub fn nonzero_mask(x: &[f64]) -> Vec<f64> {
    x.iter().map(|&v| if v != 0.0 { 1.0 } else { 0.0 }).collect()
}

/// Reversed copy of `x`.
pub fn reverse<T: Clone>(x: &[T]) -> Vec<T> {
    x.iter().rev().cloned().collect()
}

/// `reverse(x) ++ x ++ reverse(x)`, so `abcd` becomes `dcbaabcddcba`.
pub fn mirror<T: Clone>(x: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(x.len() * 3);
    out.extend(x.iter().rev().cloned());
    out.extend_from_slice(x);
    out.extend(x.iter().rev().cloned());
    out
}

/// Right rotation: the last `k` elements move to the front.
pub fn rotate_right<T: Clone>(x: &[T], k: usize) -> Vec<T> {
    let mut out = x.to_vec();
    if !out.is_empty() {
        out.rotate_right(k % x.len());
    }
    out
}

/// Reorders `x` so that `out[i] = x[perm[i]]`.
pub fn permute<T: Clone>(x: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&i| x[i].clone()).collect()
}

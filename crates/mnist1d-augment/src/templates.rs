//! The ten digit prototypes every sample is augmented from.

use crate::sequence::{linspace, mean, std_dev};

/// Raw digit shapes, one 12-sample row per class.
const DIGITS: [[f64; 12]; 10] = [
    [5.0, 6.0, 6.5, 6.75, 7.0, 7.0, 7.0, 7.0, 6.75, 6.5, 6.0, 5.0],
    [5.0, 3.0, 3.0, 3.4, 3.8, 4.2, 4.6, 5.0, 5.4, 5.8, 5.0, 5.0],
    [5.0, 6.0, 6.5, 6.5, 6.0, 5.25, 4.75, 4.0, 3.5, 3.5, 4.0, 5.0],
    [5.0, 6.0, 6.5, 6.5, 6.0, 5.0, 5.0, 6.0, 6.5, 6.5, 6.0, 5.0],
    [5.0, 4.4, 3.8, 3.2, 2.6, 2.6, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0],
    [5.0, 3.0, 3.0, 3.0, 3.0, 5.0, 6.0, 6.5, 6.5, 6.0, 4.5, 5.0],
    [5.0, 4.0, 3.5, 3.25, 3.0, 3.0, 3.0, 3.0, 3.25, 3.5, 4.0, 5.0],
    [5.0, 7.0, 7.0, 6.6, 6.2, 5.8, 5.4, 5.0, 4.6, 4.2, 5.0, 5.0],
    [5.0, 4.0, 3.5, 3.5, 4.0, 5.0, 5.0, 4.0, 3.5, 3.5, 4.0, 5.0],
    [5.0, 4.0, 3.5, 3.5, 4.0, 5.0, 5.0, 5.0, 5.0, 4.7, 4.3, 5.0],
];

/// Normalized digit prototypes with their shared axis and labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Templates {
    /// One prototype per class.
    pub x: Vec<Vec<f64>>,
    /// Position axis shared by every prototype.
    pub t: Vec<f64>,
    /// Class label of each prototype.
    pub y: Vec<u8>,
}

impl Templates {
    /// Builds the ten digit prototypes.
    ///
    /// Each row is whitened on its own, shifted so it starts at zero, and
    /// divided by 6. The axis is `linspace(-5, 5, 12) / 6`.
    pub fn digits() -> Self {
        let x = DIGITS
            .iter()
            .map(|row| {
                let m = mean(row);
                let s = std_dev(row);
                let whitened: Vec<f64> = row.iter().map(|v| (v - m) / s).collect();
                let first = whitened[0];
                whitened.iter().map(|v| (v - first) / 6.0).collect()
            })
            .collect();

        let t = linspace(-5.0, 5.0, DIGITS[0].len())
            .into_iter()
            .map(|v| v / 6.0)
            .collect();

        Self {
            x,
            t,
            y: (0..DIGITS.len() as u8).collect(),
        }
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Returns true if there are no templates.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

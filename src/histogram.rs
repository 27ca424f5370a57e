//! Equal-width histogram over an auto-ranged interval
//!
//! Binning matches the usual array-library convention: `bins + 1` evenly
//! spaced edges spanning `[min, max]` of the data, every bin half-open except
//! the last, which also takes values equal to the upper edge.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Number of bins used by the edge-direction histogram.
pub const DIRECTION_BINS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeHistogram {
    pub counts: Vec<u64>,
    pub edges: Vec<f64>,
}

impl EdgeHistogram {
    /// Bin `values` into `bins` equal-width bins.
    ///
    /// Returns `None` for an empty slice or zero bins. A constant input is
    /// binned over `[v - 0.5, v + 0.5]`.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }

        let (mut first, mut last) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if first == last {
            first -= 0.5;
            last += 0.5;
        }

        let edges = Array1::linspace(first, last, bins + 1).to_vec();
        let norm = bins as f64 / (last - first);
        let mut counts = vec![0u64; bins];

        for &v in values {
            let mut idx = (((v - first) * norm) as usize).min(bins - 1);
            // Rounding in `norm` can land a value one bin off its edges
            if idx > 0 && v < edges[idx] {
                idx -= 1;
            } else if idx < bins - 1 && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        Some(Self { counts, edges })
    }

    /// Histogram of gradient directions with [`DIRECTION_BINS`] bins.
    pub fn from_directions(directions: &[f64]) -> Option<Self> {
        Self::from_values(directions, DIRECTION_BINS)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Population standard deviation of the bin counts.
    pub fn spread(&self) -> f64 {
        let counts: Vec<f64> = self.counts.iter().map(|&c| c as f64).collect();
        population_std_dev(&counts)
    }
}

/// Square root of the mean squared deviation from the mean.
///
/// Divides by `n`, not `n - 1`. Returns `0.0` for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

//! Density-normalised histograms.
//!
//! Bins are equal-width over `[min, max]` of the samples. Every bin is
//! half-open except the last, which also holds `max`. Densities integrate to 1:
//! `density = count / (n * width)`.

use crate::math::grid::{lin_space, min_max};

/// One histogram bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub left: f64,
    pub right: f64,
    pub count: usize,
    pub density: f64,
}

/// Build a density histogram with `bins` equal-width bins.
///
/// Returns an empty vector for empty input or `bins == 0`. Constant samples
/// get a single unit-width bin centred on the value.
pub fn density_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some((min, max)) = min_max(values) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let (lo, hi, bins) = if max > min {
        (min, max, bins)
    } else {
        (min - 0.5, max + 0.5, 1)
    };

    let edges = lin_space(lo, hi, bins + 1);
    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let n = counts.iter().sum::<usize>() as f64;
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBin {
            left: edges[i],
            right: edges[i + 1],
            count,
            density: if n > 0.0 { count as f64 / (n * width) } else { 0.0 },
        })
        .collect()
}

//! Evaluation grid generation.
//!
//! Density curves are drawn by evaluating the fitted pdf on a dense, evenly
//! spaced grid over the sample range. Both endpoints are hit exactly so the
//! curve starts and ends on the observed min/max.

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
///
/// Returns an empty vector for `steps == 0` and `[min]` for `steps == 1`.
pub fn lin_space(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| min + step * i as f64).collect();
            // Accumulated rounding must not push the last point past `max`.
            out[steps - 1] = max;
            out
        }
    }
}

/// Minimum and maximum of a slice, ignoring NaN. `None` when empty.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min <= max { Some((min, max)) } else { None }
}

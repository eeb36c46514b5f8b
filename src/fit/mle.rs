//! Maximum-likelihood estimates with the location fixed at 0.
//!
//! Lognormal has a closed form:
//!
//! ```text
//! μ = mean(ln x)        scale = exp(μ)
//! σ² = mean((ln x - μ)²)   shape = σ      (population variance, not n-1)
//! ```
//!
//! Gamma has no closed form for the shape. With `s = ln(mean x) - mean(ln x)`
//! the MLE shape `k` solves
//!
//! ```text
//! ln k - ψ(k) = s
//! ```
//!
//! and then `scale = mean(x) / k`. We start from the Choi–Wette approximation
//! and refine with Newton steps on `ln k - ψ(k)` (see `math::special`). The
//! left-hand side is strictly decreasing in `k`, so the root is unique.
//!
//! `s` is formed from relative deviations `d = x / m - 1` around the sample
//! mean `m`:
//!
//! ```text
//! s = mean(d - ln(1 + d)) - (d̄ - ln(1 + d̄))
//! ```
//!
//! so samples with a tiny relative spread keep a positive `s` instead of
//! losing it to `ln(mean) - mean(ln x)` cancelling. For small `s` the
//! Choi–Wette start is `≈ 1/(2s)`.

use crate::domain::{DistParams, Family};
use crate::fit::FitError;
use crate::math::{ln_minus_digamma, ln_minus_digamma_deriv, min_max, x_minus_ln_1p};

/// Newton iteration cap for the gamma shape.
const GAMMA_MAX_ITERS: usize = 200;

/// Relative step size at which the gamma shape is considered converged.
const GAMMA_REL_TOL: f64 = 1e-12;

/// Fit a lognormal distribution (location 0) by maximum likelihood.
pub fn fit_lognormal(data: &[f64]) -> Result<DistParams, FitError> {
    let family = Family::Lognormal;
    check_samples(data, family)?;
    let logs: Vec<f64> = data.iter().map(|x| x.ln()).collect();

    let n = logs.len() as f64;
    let mu = logs.iter().sum::<f64>() / n;
    let var = logs.iter().map(|l| (l - mu) * (l - mu)).sum::<f64>() / n;
    let shape = var.sqrt();
    let scale = mu.exp();

    if !(shape.is_finite() && scale.is_finite()) {
        return Err(FitError::NonFiniteEstimate { family, what: "estimate" });
    }
    if shape <= 0.0 {
        return Err(FitError::DegenerateSample { family });
    }

    Ok(DistParams {
        family,
        shape,
        loc: 0.0,
        scale,
    })
}

/// Fit a gamma distribution (location 0) by maximum likelihood.
pub fn fit_gamma(data: &[f64]) -> Result<DistParams, FitError> {
    let family = Family::Gamma;
    check_samples(data, family)?;

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let s = log_mean_gap(data, mean);

    if !s.is_finite() {
        return Err(FitError::NonFiniteEstimate { family, what: "log-mean gap" });
    }
    // Jensen: s > 0 unless every sample is equal.
    if s <= 0.0 {
        return Err(FitError::DegenerateSample { family });
    }

    let shape = solve_gamma_shape(s)?;
    let scale = mean / shape;
    if !(scale.is_finite() && scale > 0.0) {
        return Err(FitError::NonFiniteEstimate { family, what: "scale" });
    }

    Ok(DistParams {
        family,
        shape,
        loc: 0.0,
        scale,
    })
}

/// Dispatch to the estimator for `family`.
pub fn fit_family(family: Family, data: &[f64]) -> Result<DistParams, FitError> {
    match family {
        Family::Lognormal => fit_lognormal(data),
        Family::Gamma => fit_gamma(data),
    }
}

fn check_samples(data: &[f64], family: Family) -> Result<(), FitError> {
    let Some((min, max)) = min_max(data) else {
        return Err(FitError::EmptySample { family });
    };
    if min == max {
        return Err(FitError::DegenerateSample { family });
    }
    match data.iter().position(|&value| !(value > 0.0 && value.is_finite())) {
        Some(index) => Err(FitError::NonPositiveData {
            family,
            index,
            value: data[index],
        }),
        None => Ok(()),
    }
}

/// `ln(mean x) - mean(ln x)` for positive samples with mean `mean`.
fn log_mean_gap(data: &[f64], mean: f64) -> f64 {
    let n = data.len() as f64;
    let mut drift = 0.0;
    let mut gap = 0.0;
    for &x in data {
        let d = (x - mean) / mean;
        drift += d;
        // Far from the mean, ln(x / m) keeps values that are tiny next to m.
        gap += if d.abs() < 0.5 { x_minus_ln_1p(d) } else { d - (x / mean).ln() };
    }
    gap / n - x_minus_ln_1p(drift / n)
}

/// Solve `ln k - ψ(k) = s` for `k > 0`.
fn solve_gamma_shape(s: f64) -> Result<f64, FitError> {
    let family = Family::Gamma;

    let mut k = (3.0 - s + ((s - 3.0) * (s - 3.0) + 24.0 * s).sqrt()) / (12.0 * s);

    for _ in 0..GAMMA_MAX_ITERS {
        let g = ln_minus_digamma(k) - s;
        let dg = ln_minus_digamma_deriv(k);
        if !(g.is_finite() && dg.is_finite()) || dg == 0.0 {
            return Err(FitError::NonFiniteEstimate { family, what: "shape" });
        }

        let mut next = k - g / dg;
        if next <= 0.0 {
            // Overshot below the support; back off towards zero instead.
            next = k / 2.0;
        }

        if (next - k).abs() <= GAMMA_REL_TOL * k {
            return Ok(next);
        }
        k = next;
    }

    Err(FitError::NoConvergence {
        family,
        iterations: GAMMA_MAX_ITERS,
    })
}

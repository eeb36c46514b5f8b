//! Density evaluation for the lognormal and gamma families.
//!
//! Parameters follow the shape/location/scale convention of [`DistParams`];
//! with location fixed at 0 they map onto `statrs` as:
//!
//! - lognormal: `LogNormal::new(ln(scale), shape)`
//! - gamma: `Gamma::new(shape, 1 / scale)` (statrs takes a rate)
//!
//! Gamma shapes from samples with a tiny relative spread can reach 1e16, where
//! `ln Γ(k)` and `k ln(x/θ)` are both huge and their difference is lost. From
//! `k = 10` on, the gamma density is evaluated around its mean instead:
//!
//! ```text
//! ln f(x) = ½ ln(k / 2π) - c(k) - k (u - ln(1 + u)) - ln x,   u = x / (kθ) - 1
//! ```
//!
//! with `c` the Stirling correction of `ln Γ`.

use std::f64::consts::PI;

use statrs::distribution::{Continuous, Gamma, LogNormal};

use crate::domain::{DistParams, Family};
use crate::fit::FitError;
use crate::math::{stirling_correction, x_minus_ln_1p};

/// Gamma shapes from here on use the mean-centred form.
const LARGE_GAMMA_SHAPE: f64 = 10.0;

/// Evaluate the fitted density at every point of `grid`.
///
/// Points at or below the location have zero density.
pub fn density_curve(params: &DistParams, grid: &[f64]) -> Result<Vec<f64>, FitError> {
    let invalid = |reason: String| FitError::InvalidParameters {
        family: params.family,
        reason,
    };

    if !(params.shape.is_finite() && params.scale.is_finite() && params.shape > 0.0 && params.scale > 0.0) {
        return Err(invalid(format!(
            "shape={} scale={} (both must be finite and > 0)",
            params.shape, params.scale
        )));
    }

    let pdf: Vec<f64> = match params.family {
        Family::Lognormal => {
            let dist = LogNormal::new(params.scale.ln(), params.shape).map_err(|e| invalid(e.to_string()))?;
            grid.iter().map(|&x| dist.pdf(x - params.loc)).collect()
        }
        Family::Gamma if params.shape >= LARGE_GAMMA_SHAPE => grid
            .iter()
            .map(|&x| large_shape_gamma_pdf(x - params.loc, params.shape, params.scale))
            .collect(),
        Family::Gamma => {
            let dist = Gamma::new(params.shape, 1.0 / params.scale).map_err(|e| invalid(e.to_string()))?;
            grid.iter()
                .map(|&x| {
                    let z = x - params.loc;
                    if z > 0.0 { dist.pdf(z) } else { 0.0 }
                })
                .collect()
        }
    };

    if pdf.iter().any(|v| !v.is_finite()) {
        return Err(FitError::NonFiniteEstimate {
            family: params.family,
            what: "density",
        });
    }
    Ok(pdf)
}

fn large_shape_gamma_pdf(z: f64, shape: f64, scale: f64) -> f64 {
    if z <= 0.0 {
        return 0.0;
    }
    let u = z / (shape * scale) - 1.0;
    let ln_pdf = 0.5 * (shape / (2.0 * PI)).ln() - stirling_correction(shape) - shape * x_minus_ln_1p(u) - z.ln();
    ln_pdf.exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lognormal(shape: f64, scale: f64) -> DistParams {
        DistParams {
            family: Family::Lognormal,
            shape,
            loc: 0.0,
            scale,
        }
    }

    #[test]
    fn lognormal_density_matches_closed_form() {
        let params = lognormal(0.5, 20.0);
        let x = 15.0_f64;
        let z = (x.ln() - 20.0_f64.ln()) / 0.5;
        let expected = (-0.5 * z * z).exp() / (x * 0.5 * (2.0 * std::f64::consts::PI).sqrt());

        let pdf = density_curve(&params, &[x]).unwrap();
        assert!((pdf[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn gamma_shape_one_is_exponential() {
        let params = DistParams {
            family: Family::Gamma,
            shape: 1.0,
            loc: 0.0,
            scale: 4.0,
        };
        let pdf = density_curve(&params, &[0.0, 2.0, 8.0]).unwrap();
        assert_eq!(pdf[0], 0.0);
        assert!((pdf[1] - 0.25 * (-0.5_f64).exp()).abs() < 1e-12);
        assert!((pdf[2] - 0.25 * (-2.0_f64).exp()).abs() < 1e-12);
    }

    fn gamma(shape: f64, scale: f64) -> DistParams {
        DistParams {
            family: Family::Gamma,
            shape,
            loc: 0.0,
            scale,
        }
    }

    #[test]
    fn large_shape_gamma_agrees_with_statrs() {
        for (shape, scale) in [(10.0, 2.0), (37.5, 0.4), (400.0, 0.25)] {
            let dist = Gamma::new(shape, 1.0 / scale).unwrap();
            let mean = shape * scale;
            let grid = [0.5 * mean, 0.9 * mean, mean, 1.2 * mean];
            let pdf = density_curve(&gamma(shape, scale), &grid).unwrap();
            for (x, v) in grid.iter().zip(&pdf) {
                let expected = dist.pdf(*x);
                assert!((v - expected).abs() <= 1e-9 * expected.max(1e-300), "k={shape} x={x}: {v} vs {expected}");
            }
        }
    }

    #[test]
    fn huge_gamma_shape_stays_finite() {
        // Mean 100, standard deviation sqrt(k)·θ = 1e-4: a near-normal peak.
        let params = gamma(1e12, 1e-10);
        let pdf = density_curve(&params, &[0.0, 99.9999, 100.0, 100.0001, 250.0]).unwrap();
        let peak = 1.0 / (1e-4 * (2.0 * PI).sqrt());
        assert_eq!(pdf[0], 0.0);
        assert!((pdf[2] / peak - 1.0).abs() < 1e-6, "peak {}", pdf[2]);
        // One standard deviation out on either side: exp(-1/2) of the peak.
        assert!((pdf[1] / pdf[2] - (-0.5_f64).exp()).abs() < 1e-4);
        assert!((pdf[3] / pdf[2] - (-0.5_f64).exp()).abs() < 1e-4);
        assert_eq!(pdf[4], 0.0);
    }

    #[test]
    fn density_is_zero_off_support() {
        let pdf = density_curve(&lognormal(1.0, 1.0), &[-3.0, 0.0]).unwrap();
        assert!(pdf.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(matches!(
            density_curve(&lognormal(0.0, 1.0), &[1.0]),
            Err(FitError::InvalidParameters { .. })
        ));
        assert!(density_curve(&lognormal(1.0, f64::NAN), &[1.0]).is_err());
    }
}

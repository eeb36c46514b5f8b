//! Special functions not covered by `statrs`.
//!
//! `statrs::function::gamma` provides `digamma` and `ln_gamma`; the gamma MLE
//! Newton step also needs the trigamma function `ψ'(x)` and a cancellation-free
//! form of `ln x - ψ(x)` for large `x`. Samples with a tiny relative spread
//! push the gamma shape very high, so the log-mean gap and the density are
//! evaluated through `x - ln(1 + x)` and the Stirling correction instead of
//! differences of large logarithms.

use statrs::function::gamma::digamma;

/// Shift arguments up to this value before using the asymptotic expansion.
const ASYMPTOTIC_FROM: f64 = 6.0;

/// Above this, `ln x - ψ(x)` is summed from its asymptotic series directly.
const SERIES_FROM: f64 = 10.0;

/// Trigamma function `ψ'(x)` for `x > 0`. Returns NaN otherwise.
///
/// Uses the recurrence `ψ'(x) = ψ'(x + 1) + 1/x²` to reach `x ≥ 6`, then the
/// asymptotic series
/// `1/x + 1/(2x²) + 1/(6x³) - 1/(30x⁵) + 1/(42x⁷) - 1/(30x⁹)`.
pub fn trigamma(x: f64) -> f64 {
    if !(x > 0.0) || !x.is_finite() {
        return f64::NAN;
    }

    let mut x = x;
    let mut acc = 0.0;
    while x < ASYMPTOTIC_FROM {
        acc += 1.0 / (x * x);
        x += 1.0;
    }

    let t = 1.0 / x;
    let t2 = t * t;
    acc + t + t2 / 2.0 + t * t2 * (1.0 / 6.0 - t2 * (1.0 / 30.0 - t2 * (1.0 / 42.0 - t2 / 30.0)))
}

/// `ln x - ψ(x)` for `x > 0`.
///
/// For large `x` both terms agree to many digits, so the difference is taken
/// from the series `1/(2x) + 1/(12x²) - 1/(120x⁴) + 1/(252x⁶) - 1/(240x⁸)
/// + 1/(132x¹⁰) - 691/(32760x¹²)` instead of subtracting.
pub fn ln_minus_digamma(x: f64) -> f64 {
    if !(x > 0.0) || !x.is_finite() {
        return f64::NAN;
    }
    if x < SERIES_FROM {
        return x.ln() - digamma(x);
    }

    let t = 1.0 / x;
    let t2 = t * t;
    t / 2.0
        + t2 * (1.0 / 12.0
            - t2 * (1.0 / 120.0
                - t2 * (1.0 / 252.0 - t2 * (1.0 / 240.0 - t2 * (1.0 / 132.0 - t2 * 691.0 / 32760.0)))))
}

/// Derivative of [`ln_minus_digamma`]: `1/x - ψ'(x)`, always negative.
pub fn ln_minus_digamma_deriv(x: f64) -> f64 {
    if !(x > 0.0) || !x.is_finite() {
        return f64::NAN;
    }
    if x < SERIES_FROM {
        return 1.0 / x - trigamma(x);
    }

    let t = 1.0 / x;
    let t2 = t * t;
    -t2 / 2.0
        - t * t2
            * (1.0 / 6.0
                - t2 * (1.0 / 30.0
                    - t2 * (1.0 / 42.0 - t2 * (1.0 / 30.0 - t2 * (5.0 / 66.0 - t2 * 691.0 / 2730.0)))))
}

/// `x - ln(1 + x)` for `x > -1`, accurate when `x` is close to 0.
pub fn x_minus_ln_1p(x: f64) -> f64 {
    if x.abs() >= 1e-2 {
        return x - x.ln_1p();
    }
    // x²/2 - x³/3 + x⁴/4 - ...; 10 terms reach double precision for |x| < 0.01.
    let mut power = x * x;
    let mut sum = 0.0;
    for n in 2..12 {
        sum += power / n as f64;
        power *= -x;
    }
    sum
}

/// `ln Γ(x) - [(x - 1/2) ln x - x + ln(2π)/2]` for `x ≥ 10`.
///
/// Series `1/(12x) - 1/(360x³) + 1/(1260x⁵) - 1/(1680x⁷)`.
pub fn stirling_correction(x: f64) -> f64 {
    let t = 1.0 / x;
    let t2 = t * t;
    t * (1.0 / 12.0 - t2 * (1.0 / 360.0 - t2 * (1.0 / 1260.0 - t2 / 1680.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigamma_known_values() {
        let pi2 = std::f64::consts::PI * std::f64::consts::PI;
        // ψ'(1) = π²/6, ψ'(1/2) = π²/2
        assert!((trigamma(1.0) - pi2 / 6.0).abs() < 1e-9);
        assert!((trigamma(0.5) - pi2 / 2.0).abs() < 1e-9);
        // ψ'(x) ≈ 1/x for large x
        assert!((trigamma(1e6) - 1e-6).abs() < 1e-11);
    }

    #[test]
    fn ln_minus_digamma_is_continuous_across_series_switch() {
        let below = SERIES_FROM - 1e-9;
        let direct = below.ln() - digamma(below);
        let series = ln_minus_digamma(SERIES_FROM);
        assert!((direct - series).abs() < 1e-10);

        let d_direct = 1.0 / below - trigamma(below);
        let d_series = ln_minus_digamma_deriv(SERIES_FROM);
        assert!((d_direct - d_series).abs() < 1e-10);
    }

    #[test]
    fn ln_minus_digamma_large_argument() {
        // ≈ 1/(2x) + 1/(12x²)
        let x = 1e6;
        let expected = 0.5e-6 + 1.0 / 12.0 * 1e-12;
        assert!(((ln_minus_digamma(x) - expected) / expected).abs() < 1e-12);
        assert!(ln_minus_digamma_deriv(x) < 0.0);
    }

    #[test]
    fn x_minus_ln_1p_matches_direct_form_and_small_limit() {
        for x in [-0.5, -0.02, 0.05, 3.0] {
            assert!((x_minus_ln_1p(x) - (x - f64::ln_1p(x))).abs() < 1e-15);
        }
        // Agrees with the direct form just inside the series branch.
        let x = 0.009;
        assert!(((x_minus_ln_1p(x) - (x - f64::ln_1p(x))) / x_minus_ln_1p(x)).abs() < 1e-12);
        // ≈ x²/2 where the direct form would cancel to nothing.
        let x = 1e-9;
        assert!(((x_minus_ln_1p(x) - 0.5e-18) / 0.5e-18).abs() < 1e-8);
    }

    #[test]
    fn stirling_correction_matches_ln_gamma() {
        use statrs::function::gamma::ln_gamma;
        for x in [10.0_f64, 25.5, 400.0] {
            let stirling = (x - 0.5) * x.ln() - x + 0.5 * (2.0 * std::f64::consts::PI).ln();
            assert!((ln_gamma(x) - stirling - stirling_correction(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn trigamma_rejects_non_positive() {
        assert!(trigamma(0.0).is_nan());
        assert!(trigamma(-2.5).is_nan());
    }
}

//! Per-route stop fitter.
//!
//! A [`RouteStopFitter`] owns every fitted stop of one route. The flow per stop is:
//!
//! 1. `fit`: coerce raw values, run the guards, fit a lognormal (location 0),
//!    evaluate it on an evenly spaced grid and upsert the snapshot
//! 2. `render_comparison` / `draw_comparison`: re-fit lognormal *and* gamma on
//!    the samples above the near-zero threshold and draw both over a histogram
//! 3. `display`: draw the stored lognormal overlay on a caller surface
//!
//! Degenerate input is never an error. Guards emit a tagged [`Diagnostic`] and
//! return a `Skipped` outcome; only numeric failures that slip past them are
//! returned as `Err`.

use std::collections::HashMap;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{DrawingArea, DrawingBackend};
use tracing::{debug, info};

use crate::domain::{
    DistParams, Family, FitOutcome, FittedStop, FitterConfig, RawValue, RenderOutcome, SkipReason,
};
use crate::fit::{FitError, coerce_all, fit_family, fit_lognormal};
use crate::math::{lin_space, min_max};
use crate::models::density_curve;
use crate::plot::{DensityChart, PlotError, comparison_path, draw_density_chart, write_chart};
use crate::report::{Diagnostic, DiagnosticSink, StdoutSink};

/// Lognormal and gamma fits of the same filtered samples on a shared grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonFit {
    pub data: Vec<f64>,
    pub grid: Vec<f64>,
    pub lognormal: DistParams,
    pub lognormal_pdf: Vec<f64>,
    pub gamma: DistParams,
    pub gamma_pdf: Vec<f64>,
}

impl ComparisonFit {
    /// Fit both families on `data` and evaluate them on `grid_points` points
    /// spanning `[min(data), max(data)]`.
    ///
    /// `data` must be strictly positive and non-constant.
    pub fn new(data: Vec<f64>, grid_points: usize) -> Result<Self, FitError> {
        let Some((lo, hi)) = min_max(&data) else {
            return Err(FitError::EmptySample { family: Family::Lognormal });
        };
        let grid = lin_space(lo, hi, grid_points);
        let fit_on = |family| -> Result<(DistParams, Vec<f64>), FitError> {
            let params = fit_family(family, &data)?;
            let pdf = density_curve(&params, &grid)?;
            Ok((params, pdf))
        };
        let (lognormal, lognormal_pdf) = fit_on(Family::Lognormal)?;
        let (gamma, gamma_pdf) = fit_on(Family::Gamma)?;

        Ok(Self {
            data,
            grid,
            lognormal,
            lognormal_pdf,
            gamma,
            gamma_pdf,
        })
    }
}

enum Comparison {
    Ready(ComparisonFit),
    Skipped(SkipReason),
}

/// Fits and renders break-duration distributions for the stops of one route.
pub struct RouteStopFitter<S: DiagnosticSink = StdoutSink> {
    route_id: String,
    stops: HashMap<String, FittedStop>,
    config: FitterConfig,
    sink: S,
}

impl RouteStopFitter<StdoutSink> {
    /// Default configuration, diagnostics printed to stdout.
    pub fn new(route_id: impl Into<String>) -> Self {
        Self::with_config_and_sink(route_id, FitterConfig::default(), StdoutSink)
    }
}

impl<S: DiagnosticSink> RouteStopFitter<S> {
    pub fn with_config_and_sink(route_id: impl Into<String>, config: FitterConfig, sink: S) -> Self {
        Self {
            route_id: route_id.into(),
            stops: HashMap::new(),
            config,
            sink,
        }
    }

    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn config(&self) -> &FitterConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Fit a lognormal (location 0) to one stop's raw samples and store it.
    ///
    /// Values that do not coerce to a finite number are dropped first. Empty,
    /// constant, and (almost) non-positive samples are skipped with a
    /// diagnostic and leave any existing entry for the stop untouched.
    pub fn fit<I, V>(&mut self, stop_id: &str, raw: I) -> Result<FitOutcome, FitError>
    where
        I: IntoIterator<Item = V>,
        V: Into<RawValue>,
    {
        let data = coerce_all(raw);

        let Some((lo, hi)) = min_max(&data) else {
            return Ok(self.skip_fit(stop_id, SkipReason::NoNumericData));
        };
        if lo == hi {
            return Ok(self.skip_fit(stop_id, SkipReason::ConstantData));
        }

        // The density at location 0 has support x > 0 only.
        let positive: Vec<f64> = data.iter().copied().filter(|&v| v > 0.0).collect();
        match min_max(&positive) {
            Some((p_lo, p_hi)) if p_lo < p_hi => {}
            _ => return Ok(self.skip_fit(stop_id, SkipReason::TooFewPositive)),
        }

        // Distinct values can still round to one logarithm.
        let params = match fit_lognormal(&positive) {
            Err(FitError::DegenerateSample { .. }) => return Ok(self.skip_fit(stop_id, SkipReason::ConstantData)),
            other => other?,
        };
        let grid = lin_space(lo, hi, self.config.fit_grid_points);
        let pdf = density_curve(&params, &grid)?;

        debug!(
            route_id = %self.route_id,
            stop_id,
            n = data.len(),
            shape = params.shape,
            scale = params.scale,
            "fitted lognormal"
        );

        self.upsert(FittedStop::new(
            stop_id.to_string(),
            self.route_id.clone(),
            data,
            params,
            grid,
            pdf,
        ));
        Ok(FitOutcome::Fitted(params))
    }

    /// Insert or replace a stop's snapshot, returning the previous one.
    pub fn upsert(&mut self, stop: FittedStop) -> Option<FittedStop> {
        self.stops.insert(stop.stop_id().to_string(), stop)
    }

    pub fn get(&self, stop_id: &str) -> Option<&FittedStop> {
        self.stops.get(stop_id)
    }

    /// Fitted stops ordered by stop id.
    pub fn stops(&self) -> Vec<&FittedStop> {
        let mut stops: Vec<&FittedStop> = self.stops.values().collect();
        stops.sort_by(|a, b| a.stop_id().cmp(b.stop_id()));
        stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Write the lognormal-vs-gamma comparison image for a fitted stop.
    ///
    /// The image goes to `<output_dir>/route_<R>/compare_<R>_<S>.<ext>`. An
    /// existing file is never overwritten.
    pub fn render_comparison(&mut self, stop_id: &str, output_dir: &Path) -> Result<RenderOutcome, PlotError> {
        let fit = match self.comparison(stop_id)? {
            Comparison::Ready(fit) => fit,
            Comparison::Skipped(reason) => return Ok(RenderOutcome::Skipped(reason)),
        };

        let path = comparison_path(output_dir, &self.route_id, stop_id, self.config.image_format);
        if path.exists() {
            self.sink.emit(Diagnostic::FileExists { path: path.clone() });
            return Ok(RenderOutcome::Skipped(SkipReason::FileExists(path)));
        }

        let chart = DensityChart::comparison(&self.route_id, stop_id, &fit, self.config.histogram_bins);
        write_chart(&path, self.config.image_format, self.config.image_size_px(), &chart)?;

        info!(route_id = %self.route_id, stop_id, path = %path.display(), "saved comparison plot");
        self.sink.emit(Diagnostic::Saved { path: path.clone() });
        Ok(RenderOutcome::Saved(path))
    }

    /// Draw the lognormal-vs-gamma comparison on a caller-supplied surface.
    pub fn draw_comparison<DB: DrawingBackend>(
        &mut self,
        stop_id: &str,
        area: &DrawingArea<DB, Shift>,
    ) -> Result<RenderOutcome, PlotError> {
        let fit = match self.comparison(stop_id)? {
            Comparison::Ready(fit) => fit,
            Comparison::Skipped(reason) => return Ok(RenderOutcome::Skipped(reason)),
        };
        let chart = DensityChart::comparison(&self.route_id, stop_id, &fit, self.config.histogram_bins);
        draw_density_chart(area, &chart)?;
        Ok(RenderOutcome::Drawn)
    }

    /// Draw the stored samples and lognormal curve on a caller-supplied surface.
    pub fn display<DB: DrawingBackend>(
        &mut self,
        stop_id: &str,
        area: &DrawingArea<DB, Shift>,
    ) -> Result<RenderOutcome, PlotError> {
        let Some(stop) = self.stops.get(stop_id) else {
            let diagnostic = Diagnostic::NoFittedPdf {
                route_id: self.route_id.clone(),
                stop_id: stop_id.to_string(),
            };
            self.sink.emit(diagnostic);
            return Ok(RenderOutcome::Skipped(SkipReason::NotFitted));
        };

        let chart = DensityChart::overlay(stop, self.config.histogram_bins);
        draw_density_chart(area, &chart)?;
        Ok(RenderOutcome::Drawn)
    }

    fn comparison(&mut self, stop_id: &str) -> Result<Comparison, FitError> {
        let Some(stop) = self.stops.get(stop_id) else {
            let diagnostic = Diagnostic::NoFittedData {
                route_id: self.route_id.clone(),
                stop_id: stop_id.to_string(),
            };
            self.sink.emit(diagnostic);
            return Ok(Comparison::Skipped(SkipReason::NotFitted));
        };

        let threshold = self.config.near_zero_threshold;
        let filtered: Vec<f64> = stop.data().iter().copied().filter(|&v| v > threshold).collect();

        if filtered.len() < self.config.min_compare_points {
            let remaining = filtered.len();
            let diagnostic = Diagnostic::TooFewPoints {
                route_id: self.route_id.clone(),
                stop_id: stop_id.to_string(),
            };
            self.sink.emit(diagnostic);
            return Ok(Comparison::Skipped(SkipReason::TooFewPoints { remaining }));
        }
        if min_max(&filtered).is_some_and(|(lo, hi)| lo == hi) {
            return Ok(self.skip_constant_comparison(stop_id));
        }

        let fit = match ComparisonFit::new(filtered, self.config.compare_grid_points) {
            Ok(fit) => fit,
            // Spread too small to survive rounding in either estimator.
            Err(FitError::DegenerateSample { .. }) => return Ok(self.skip_constant_comparison(stop_id)),
            Err(e) => return Err(e),
        };
        debug!(
            route_id = %self.route_id,
            stop_id,
            lognormal_shape = fit.lognormal.shape,
            lognormal_scale = fit.lognormal.scale,
            gamma_shape = fit.gamma.shape,
            gamma_scale = fit.gamma.scale,
            "fitted comparison"
        );
        Ok(Comparison::Ready(fit))
    }

    fn skip_constant_comparison(&mut self, stop_id: &str) -> Comparison {
        let diagnostic = Diagnostic::ConstantData {
            route_id: self.route_id.clone(),
            stop_id: stop_id.to_string(),
        };
        self.sink.emit(diagnostic);
        Comparison::Skipped(SkipReason::ConstantData)
    }

    fn skip_fit(&mut self, stop_id: &str, reason: SkipReason) -> FitOutcome {
        let route_id = self.route_id.clone();
        let stop_id = stop_id.to_string();
        let diagnostic = match reason {
            SkipReason::NoNumericData => Diagnostic::NoNumericData { route_id, stop_id },
            SkipReason::ConstantData => Diagnostic::ConstantData { route_id, stop_id },
            _ => Diagnostic::TooFewPositive { route_id, stop_id },
        };
        self.sink.emit(diagnostic);
        FitOutcome::Skipped(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageFormat;
    use plotters::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rand_distr::{Distribution, LogNormal};

    fn fitter(route_id: &str) -> RouteStopFitter<Vec<Diagnostic>> {
        let config = FitterConfig {
            image_format: ImageFormat::Svg,
            ..FitterConfig::default()
        };
        RouteStopFitter::with_config_and_sink(route_id, config, Vec::new())
    }

    fn lines(fitter: &RouteStopFitter<Vec<Diagnostic>>) -> Vec<String> {
        fitter.sink().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn fit_drops_unparseable_values_and_stores_grid() {
        let mut f = fitter("R7");
        let outcome = f.fit("stopA", ["10", "20", "abc", "30"]).unwrap();
        assert!(outcome.is_fitted());

        let stop = f.get("stopA").unwrap();
        assert_eq!(stop.data(), &[10.0, 20.0, 30.0]);
        assert_eq!(stop.route_id(), "R7");
        assert_eq!(stop.grid().len(), 200);
        assert_eq!(stop.pdf().len(), 200);
        assert_eq!(stop.grid()[0], 10.0);
        assert_eq!(stop.grid()[199], 30.0);
        assert!(stop.pdf().iter().all(|p| p.is_finite() && *p >= 0.0));

        let logs = [10.0_f64.ln(), 20.0_f64.ln(), 30.0_f64.ln()];
        let mu = logs.iter().sum::<f64>() / 3.0;
        let sigma = (logs.iter().map(|l| (l - mu).powi(2)).sum::<f64>() / 3.0).sqrt();
        assert!((stop.params().shape - sigma).abs() < 1e-12);
        assert!((stop.params().scale - mu.exp()).abs() < 1e-9);
        assert_eq!(stop.params().loc, 0.0);
        assert!(f.sink().is_empty());
    }

    #[test]
    fn constant_and_empty_samples_are_skipped() {
        let mut f = fitter("R7");
        let outcome = f.fit("stopB", ["5", "5", "5"]).unwrap();
        assert_eq!(outcome, FitOutcome::Skipped(SkipReason::ConstantData));

        let outcome = f.fit("stopC", Vec::<f64>::new()).unwrap();
        assert_eq!(outcome, FitOutcome::Skipped(SkipReason::NoNumericData));

        let outcome = f.fit("stopD", [RawValue::Null, RawValue::from("n/a")]).unwrap();
        assert_eq!(outcome, FitOutcome::Skipped(SkipReason::NoNumericData));

        assert!(f.is_empty());
        assert_eq!(
            lines(&f),
            vec![
                "[SKIP] Constant data for stop stopB on route R7",
                "[SKIP] No valid numeric data for stop stopC on route R7",
                "[SKIP] No valid numeric data for stop stopD on route R7",
            ]
        );
    }

    #[test]
    fn samples_without_two_positive_values_are_skipped() {
        let mut f = fitter("R1");
        let outcome = f.fit("s", [-3.0, 0.0, 4.0]).unwrap();
        assert_eq!(outcome, FitOutcome::Skipped(SkipReason::TooFewPositive));
        assert!(f.get("s").is_none());
        assert_eq!(lines(&f), vec!["[SKIP] Too few positive values to fit for stop s on route R1"]);
    }

    #[test]
    fn refit_with_same_input_is_idempotent() {
        let mut f = fitter("R7");
        f.fit("stopA", [12.0, 18.5, 40.0, 7.25]).unwrap();
        let first = f.get("stopA").unwrap().clone();
        f.fit("stopA", [12.0, 18.5, 40.0, 7.25]).unwrap();
        assert_eq!(f.get("stopA").unwrap(), &first);
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn refit_replaces_wholesale_and_skip_keeps_prior() {
        let mut f = fitter("R7");
        f.fit("stopA", [10.0, 20.0, 30.0]).unwrap();
        f.fit("stopA", [1.0, 2.0, 3.0, 4.0]).unwrap();
        let stop = f.get("stopA").unwrap();
        assert_eq!(stop.data(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stop.grid()[0], 1.0);
        assert_eq!(stop.grid()[199], 4.0);

        let before = stop.clone();
        let outcome = f.fit("stopA", ["5", "5"]).unwrap();
        assert!(!outcome.is_fitted());
        assert_eq!(f.get("stopA").unwrap(), &before);
    }

    #[test]
    fn stops_are_listed_in_id_order() {
        let mut f = fitter("R2");
        f.fit("b", [1.0, 2.0]).unwrap();
        f.fit("a", [3.0, 4.0]).unwrap();
        f.fit("c", [5.0, 6.0]).unwrap();
        let ids: Vec<&str> = f.stops().iter().map(|s| s.stop_id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn near_zero_samples_leave_too_few_points() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = fitter("R7");
        assert!(f.fit("z", [0.0, 0.0005, 5.0]).unwrap().is_fitted());

        let outcome = f.render_comparison("z", dir.path()).unwrap();
        assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::TooFewPoints { remaining: 1 }));
        assert_eq!(lines(&f), vec!["[SKIP] Too few data points to plot for stop z on route R7"]);
        assert!(!dir.path().join("route_R7").exists());
    }

    #[test]
    fn constant_after_filter_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = fitter("R7");
        assert!(f.fit("k", [0.0005, 5.0, 5.0, 5.0]).unwrap().is_fitted());

        let outcome = f.render_comparison("k", dir.path()).unwrap();
        assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::ConstantData));
        assert_eq!(lines(&f), vec!["[SKIP] Constant data for stop k on route R7"]);
    }

    #[test]
    fn render_without_fit_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = fitter("R7");
        let outcome = f.render_comparison("ghost", dir.path()).unwrap();
        assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::NotFitted));
        assert_eq!(lines(&f), vec!["[SKIP PLOT] No fitted data for stop ghost on route R7"]);
    }

    #[test]
    fn render_writes_once_then_skips_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = fitter("R7");
        f.fit("stopA", [10.0, 20.0, 30.0, 45.0, 60.0, 12.5]).unwrap();

        let expected = dir.path().join("route_R7").join("compare_R7_stopA.svg");
        let outcome = f.render_comparison("stopA", dir.path()).unwrap();
        assert_eq!(outcome, RenderOutcome::Saved(expected.clone()));
        let written = std::fs::read_to_string(&expected).unwrap();
        assert!(written.contains("R7 – Stop stopA (Lognormal vs Gamma)"));
        assert!(written.contains("Gamma fit"));

        let outcome = f.render_comparison("stopA", dir.path()).unwrap();
        assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::FileExists(expected.clone())));
        assert_eq!(std::fs::read_to_string(&expected).unwrap(), written);

        let lines = lines(&f);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[SAVED] Comparison plot (Lognormal vs Gamma) → "));
        assert!(lines[1].starts_with("[SKIP SAVE] File already exists → "));
        assert!(lines[1].ends_with("compare_R7_stopA.svg"));
    }

    #[test]
    fn default_config_saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = RouteStopFitter::with_config_and_sink("R7", FitterConfig::default(), Vec::new());
        f.fit("stopA", [10.0, 20.0, 30.0, 45.0, 60.0, 12.5]).unwrap();

        let expected = dir.path().join("route_R7").join("compare_R7_stopA.png");
        let outcome = f.render_comparison("stopA", dir.path()).unwrap();
        assert_eq!(outcome, RenderOutcome::Saved(expected.clone()));
        let bytes = std::fs::read(&expected).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
        assert!(lines(&f)[0].ends_with("compare_R7_stopA.png"));
    }

    #[test]
    fn tiny_relative_spread_renders_instead_of_failing() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = fitter("R7");
        assert!(f.fit("tight", [100.0, 100.000001, 100.000002]).unwrap().is_fitted());

        let outcome = f.render_comparison("tight", dir.path()).unwrap();
        let expected = dir.path().join("route_R7").join("compare_R7_tight.svg");
        assert_eq!(outcome, RenderOutcome::Saved(expected.clone()));
        assert!(expected.is_file());
    }

    #[test]
    fn random_samples_fit_or_skip_consistently() {
        let mut rng = StdRng::seed_from_u64(42);
        let durations = LogNormal::new(3.0, 0.8).unwrap();
        let mut f = fitter("P");

        for trial in 0..200 {
            let n = rng.gen_range(1..40);
            let mut data = Vec::with_capacity(n);
            for _ in 0..n {
                let v = durations.sample(&mut rng);
                data.push(if rng.gen_bool(0.15) {
                    0.0
                } else if rng.gen_bool(0.1) {
                    -v
                } else {
                    v
                });
            }
            let stop_id = format!("s{trial}");
            let outcome = f.fit(&stop_id, data.iter().copied()).unwrap();

            let (lo, hi) = min_max(&data).unwrap();
            let positive: Vec<f64> = data.iter().copied().filter(|&v| v > 0.0).collect();
            let expected = if lo == hi {
                Some(SkipReason::ConstantData)
            } else if min_max(&positive).is_none_or(|(p_lo, p_hi)| p_lo == p_hi) {
                Some(SkipReason::TooFewPositive)
            } else {
                None
            };

            match expected {
                Some(reason) => {
                    assert_eq!(outcome, FitOutcome::Skipped(reason), "trial {trial}");
                    assert!(f.get(&stop_id).is_none());
                    continue;
                }
                None => assert!(outcome.is_fitted(), "trial {trial}: {outcome:?}"),
            }

            let stop = f.get(&stop_id).unwrap().clone();
            assert_eq!(stop.data(), data.as_slice());
            assert_eq!(stop.grid().len(), 200);
            assert_eq!(stop.grid()[0], lo);
            assert_eq!(stop.grid()[199], hi);
            for (x, p) in stop.grid().iter().zip(stop.pdf()) {
                assert!(p.is_finite() && *p >= 0.0, "trial {trial}: pdf({x}) = {p}");
                if *x <= 0.0 {
                    assert_eq!(*p, 0.0);
                }
            }

            f.fit(&stop_id, data.iter().copied()).unwrap();
            assert_eq!(f.get(&stop_id).unwrap(), &stop, "trial {trial}");

            // The comparison either skips with a diagnostic or yields finite curves.
            if let Comparison::Ready(fit) = f.comparison(&stop_id).unwrap() {
                assert!(fit.data.iter().all(|&v| v > f.config().near_zero_threshold));
                assert!(fit.gamma_pdf.iter().chain(&fit.lognormal_pdf).all(|p| p.is_finite() && *p >= 0.0));
            }
        }
    }

    #[test]
    fn display_draws_on_caller_surface() {
        let mut f = fitter("R7");
        f.fit("stopA", [10.0, 20.0, 30.0]).unwrap();

        let mut svg = String::new();
        {
            let area = SVGBackend::with_string(&mut svg, (600, 400)).into_drawing_area();
            assert_eq!(f.display("stopA", &area).unwrap(), RenderOutcome::Drawn);
            let outcome = f.display("missing", &area).unwrap();
            assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::NotFitted));
        }
        assert!(svg.contains("R7 - stopA (Empirical vs Fitted PDF)"));
        assert_eq!(lines(&f), vec!["[SKIP PLOT] No fitted PDF for stop missing on route R7"]);
    }

    #[test]
    fn draw_comparison_needs_no_files() {
        let mut f = fitter("9");
        f.fit("s1", [3.0, 7.5, 12.0, 4.2, 9.9, 30.0, 1.1]).unwrap();

        let mut svg = String::new();
        {
            let area = SVGBackend::with_string(&mut svg, (600, 400)).into_drawing_area();
            assert_eq!(f.draw_comparison("s1", &area).unwrap(), RenderOutcome::Drawn);
        }
        assert!(svg.contains("9 – Stop s1 (Lognormal vs Gamma)"));
        assert!(svg.contains("Lognormal fit"));
        assert!(f.sink().is_empty());
    }

    #[test]
    fn comparison_fit_shares_one_grid() {
        let fit = ComparisonFit::new(vec![2.0, 4.0, 8.0, 16.0], 400).unwrap();
        assert_eq!(fit.grid.len(), 400);
        assert_eq!(fit.grid[0], 2.0);
        assert_eq!(fit.grid[399], 16.0);
        assert_eq!(fit.lognormal_pdf.len(), 400);
        assert_eq!(fit.gamma_pdf.len(), 400);
        assert_eq!(fit.gamma.family, Family::Gamma);
    }
}

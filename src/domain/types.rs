//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - built by the fitter from raw samples
//! - read by the plotting and reporting layers without copying
//! - compared in tests (fits are deterministic, so `PartialEq` is meaningful)

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

/// A raw sample value as handed over by an ingestion collaborator.
///
/// Nothing is assumed about the value; the fitter coerces it to a number and
/// silently drops whatever cannot be coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Int(value.into())
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

/// Parametric distribution families the fitter knows how to estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Lognormal,
    Gamma,
}

impl Family {
    pub fn display_name(self) -> &'static str {
        match self {
            Family::Lognormal => "Lognormal",
            Family::Gamma => "Gamma",
        }
    }
}

/// Fitted parameters in the shape/location/scale convention.
///
/// - lognormal: `shape` is σ of `ln x`, `scale` is `exp(μ)`
/// - gamma: `shape` is `k`, `scale` is `θ`
///
/// `loc` is always `0.0`; it is kept so reports show the full triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistParams {
    pub family: Family,
    pub shape: f64,
    pub loc: f64,
    pub scale: f64,
}

/// Snapshot of one successfully fitted stop.
///
/// Only the fitter constructs these, and only from samples that are non-empty
/// and non-constant. A re-fit replaces the whole snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedStop {
    stop_id: String,
    route_id: String,
    data: Vec<f64>,
    params: DistParams,
    grid: Vec<f64>,
    pdf: Vec<f64>,
}

impl FittedStop {
    pub(crate) fn new(
        stop_id: String,
        route_id: String,
        data: Vec<f64>,
        params: DistParams,
        grid: Vec<f64>,
        pdf: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(grid.len(), pdf.len());
        Self {
            stop_id,
            route_id,
            data,
            params,
            grid,
            pdf,
        }
    }

    pub fn stop_id(&self) -> &str {
        &self.stop_id
    }

    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    /// Cleaned samples in input order (duplicates kept).
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Lognormal parameters (location fixed at 0).
    pub fn params(&self) -> &DistParams {
        &self.params
    }

    /// Evaluation grid over `[min(data), max(data)]`.
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Fitted density at each grid point.
    pub fn pdf(&self) -> &[f64] {
        &self.pdf
    }

    /// `(x, density)` pairs, ready for line series.
    pub fn curve(&self) -> Vec<(f64, f64)> {
        self.grid.iter().copied().zip(self.pdf.iter().copied()).collect()
    }
}

/// Output image format for comparison plots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    /// Raster output at the configured DPI.
    #[default]
    Png,
    /// Vector output of the same pixel size.
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// All tunables of a fitting/rendering run.
#[derive(Debug, Clone, PartialEq)]
pub struct FitterConfig {
    /// Points in the grid stored by `fit`.
    pub fit_grid_points: usize,
    /// Points in the shared grid of the lognormal/gamma comparison.
    pub compare_grid_points: usize,
    /// Samples at or below this are treated as zero when rendering.
    pub near_zero_threshold: f64,
    /// Minimum samples left after the near-zero filter to draw a comparison.
    pub min_compare_points: usize,
    /// Histogram bin count.
    pub histogram_bins: usize,
    pub image_format: ImageFormat,
    /// Figure size in inches (width, height).
    pub figure_inches: (f64, f64),
    pub dpi: u32,
}

impl Default for FitterConfig {
    fn default() -> Self {
        Self {
            fit_grid_points: 200,
            compare_grid_points: 400,
            near_zero_threshold: 1e-3,
            min_compare_points: 3,
            histogram_bins: 30,
            image_format: ImageFormat::default(),
            figure_inches: (6.0, 4.0),
            dpi: 300,
        }
    }
}

impl FitterConfig {
    /// Pixel dimensions of the output image.
    pub fn image_size_px(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.figure_inches.0 * dpi).round().max(1.0) as u32,
            (self.figure_inches.1 * dpi).round().max(1.0) as u32,
        )
    }
}

/// Why a fit or render call did nothing.
///
/// These are expected outcomes for real-world samples, not errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Nothing survived numeric coercion.
    NoNumericData,
    /// Every coerced value is identical.
    ConstantData,
    /// Fewer than two distinct strictly positive values.
    TooFewPositive,
    /// Render/display requested for a stop that was never fitted.
    NotFitted,
    /// Too few samples left after the near-zero filter.
    TooFewPoints { remaining: usize },
    /// The output image already exists; nothing was written.
    FileExists(PathBuf),
}

/// Result of a successful `fit` call.
#[derive(Debug, Clone, PartialEq)]
pub enum FitOutcome {
    Fitted(DistParams),
    Skipped(SkipReason),
}

impl FitOutcome {
    pub fn is_fitted(&self) -> bool {
        matches!(self, FitOutcome::Fitted(_))
    }
}

/// Result of a successful render/display call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The comparison image was written to this path.
    Saved(PathBuf),
    /// The chart was drawn on a caller-supplied surface.
    Drawn,
    Skipped(SkipReason),
}

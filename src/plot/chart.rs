//! Plotters-powered density charts.
//!
//! The chart is data-driven: histogram bars, curves, titles and bounds are all
//! computed up front into a [`DensityChart`], and [`draw_density_chart`] only
//! draws. The drawing surface is always passed in by the caller, so the same
//! chart can go to a PNG/SVG file, an in-memory SVG string, or any other
//! Plotters backend.

use plotters::coord::Shift;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::{DashedLineSeries, LineSeries};

use crate::domain::FittedStop;
use crate::fit::ComparisonFit;
use crate::math::{HistogramBin, density_histogram};
use crate::plot::PlotError;

pub const X_LABEL: &str = "Break Duration (seconds)";
pub const Y_LABEL: &str = "Probability Density";

const STEELBLUE: RGBColor = RGBColor(70, 130, 180);
const GREY: RGBColor = RGBColor(128, 128, 128);

/// Dash and gap length of a dashed curve, in backend pixels.
const DASH_PX: u32 = 12;
const GAP_PX: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XScale {
    Linear,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// A fitted density curve.
#[derive(Debug, Clone)]
pub struct CurveSeries {
    pub label: String,
    pub color: RGBColor,
    pub style: LineStyle,
    pub points: Vec<(f64, f64)>,
}

/// A render-only description of an empirical-vs-fitted chart.
#[derive(Debug, Clone)]
pub struct DensityChart {
    pub title: String,
    pub x_scale: XScale,
    pub histogram: Vec<HistogramBin>,
    pub histogram_color: RGBColor,
    pub histogram_opacity: f64,
    pub curves: Vec<CurveSeries>,
    /// Spacing of x tick labels on linear axes.
    pub x_tick_step: Option<f64>,
}

impl DensityChart {
    /// Histogram of the stored samples with the stored lognormal curve.
    pub fn overlay(stop: &FittedStop, bins: usize) -> Self {
        Self {
            title: overlay_title(stop.route_id(), stop.stop_id()),
            x_scale: XScale::Linear,
            histogram: density_histogram(stop.data(), bins),
            histogram_color: STEELBLUE,
            histogram_opacity: 0.5,
            curves: vec![CurveSeries {
                label: format!("{} Fitted Lognormal PDF", stop.stop_id()),
                color: RED,
                style: LineStyle::Solid,
                points: stop.curve(),
            }],
            x_tick_step: Some(100.0),
        }
    }

    /// Histogram of the filtered samples with lognormal and gamma fits, log x axis.
    pub fn comparison(route_id: &str, stop_id: &str, fit: &ComparisonFit, bins: usize) -> Self {
        let pairs = |pdf: &[f64]| -> Vec<(f64, f64)> { fit.grid.iter().copied().zip(pdf.iter().copied()).collect() };
        Self {
            title: comparison_title(route_id, stop_id),
            x_scale: XScale::Log,
            histogram: density_histogram(&fit.data, bins),
            histogram_color: GREY,
            histogram_opacity: 0.4,
            curves: vec![
                CurveSeries {
                    label: "Lognormal fit".to_string(),
                    color: RED,
                    style: LineStyle::Solid,
                    points: pairs(&fit.lognormal_pdf),
                },
                CurveSeries {
                    label: "Gamma fit".to_string(),
                    color: BLUE,
                    style: LineStyle::Dashed,
                    points: pairs(&fit.gamma_pdf),
                },
            ],
            x_tick_step: None,
        }
    }

    /// X bounds covering every bar and curve point.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let bars = self.histogram.iter().flat_map(|b| [b.left, b.right]);
        let curves = self.curves.iter().flat_map(|c| c.points.iter().map(|&(x, _)| x));
        let (lo, hi) = bars
            .chain(curves)
            .filter(|x| x.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| (lo.min(x), hi.max(x)));
        let valid = lo < hi && (self.x_scale == XScale::Linear || lo > 0.0);
        valid.then_some((lo, hi))
    }

    /// Upper y bound with 5% headroom.
    pub fn y_max(&self) -> f64 {
        let bars = self.histogram.iter().map(|b| b.density);
        let curves = self.curves.iter().flat_map(|c| c.points.iter().map(|&(_, y)| y));
        let max = bars.chain(curves).filter(|y| y.is_finite()).fold(0.0_f64, f64::max);
        if max > 0.0 { max * 1.05 } else { 1.0 }
    }
}

pub fn overlay_title(route_id: &str, stop_id: &str) -> String {
    format!("{route_id} - {stop_id} (Empirical vs Fitted PDF)")
}

pub fn comparison_title(route_id: &str, stop_id: &str) -> String {
    format!("{route_id} – Stop {stop_id} (Lognormal vs Gamma)")
}

/// Draw `chart` onto a caller-supplied drawing area and present it.
pub fn draw_density_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &DensityChart,
) -> Result<(), PlotError> {
    let Some((x0, x1)) = chart.x_range() else {
        return Err(PlotError::Drawing(format!("empty or invalid x range for '{}'", chart.title)));
    };
    let y1 = chart.y_max();

    area.fill(&WHITE).map_err(drawing_err)?;

    // Size text relative to the surface so 300 DPI images stay readable.
    let (_, height) = area.dim_in_pixel();
    let font = |frac: f64| ((f64::from(height) * frac).round() as u32).max(8);

    let mut builder = ChartBuilder::on(area);
    builder
        .caption(&chart.title, ("sans-serif", font(0.05)))
        .margin(font(0.03))
        .x_label_area_size(font(0.1))
        .y_label_area_size(font(0.14));

    match chart.x_scale {
        XScale::Linear => {
            let ctx = builder.build_cartesian_2d(x0..x1, 0.0..y1).map_err(drawing_err)?;
            let x_labels = chart
                .x_tick_step
                .map(|step| (((x1 - x0) / step).ceil() as usize + 1).clamp(2, 20))
                .unwrap_or(10);
            draw_layers(ctx, chart, x_labels, font(0.03))?;
        }
        XScale::Log => {
            let ctx = builder
                .build_cartesian_2d((x0..x1).log_scale(), 0.0..y1)
                .map_err(drawing_err)?;
            draw_layers(ctx, chart, 10, font(0.03))?;
        }
    }

    area.present().map_err(drawing_err)?;
    Ok(())
}

fn draw_layers<'a, DB, X>(
    mut ctx: ChartContext<'a, DB, Cartesian2d<X, RangedCoordf64>>,
    chart: &DensityChart,
    x_labels: usize,
    label_size: u32,
) -> Result<(), PlotError>
where
    DB: DrawingBackend + 'a,
    X: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    ctx.configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_labels(x_labels)
        .y_labels(8)
        .x_label_formatter(&format_tick)
        .label_style(("sans-serif", label_size))
        .light_line_style(&BLACK.mix(0.05))
        .bold_line_style(&BLACK.mix(0.2))
        .draw()
        .map_err(drawing_err)?;

    // 1) Empirical histogram: translucent fill plus a black outline per bar.
    let fill = chart.histogram_color.mix(chart.histogram_opacity).filled();
    ctx.draw_series(
        chart
            .histogram
            .iter()
            .map(|b| Rectangle::new([(b.left, 0.0), (b.right, b.density)], fill)),
    )
    .map_err(drawing_err)?
    .label("Empirical Data")
    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], fill));

    ctx.draw_series(
        chart
            .histogram
            .iter()
            .filter(|b| b.count > 0)
            .map(|b| Rectangle::new([(b.left, 0.0), (b.right, b.density)], BLACK.stroke_width(1))),
    )
    .map_err(drawing_err)?;

    // 2) Fitted curves.
    for curve in &chart.curves {
        let style = curve.color.stroke_width(2);
        let color = curve.color;
        let points = curve.points.iter().copied();
        let drawn = match curve.style {
            LineStyle::Solid => ctx.draw_series(LineSeries::new(points, style)),
            LineStyle::Dashed => ctx.draw_series(DashedLineSeries::new(points, DASH_PX, GAP_PX, style)),
        };
        drawn
            .map_err(drawing_err)?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", label_size))
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()
        .map_err(drawing_err)?;

    Ok(())
}

fn format_tick(v: &f64) -> String {
    let a = v.abs();
    if a >= 100.0 || a == 0.0 {
        format!("{v:.0}")
    } else if a >= 1.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.3}")
    }
}

fn drawing_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Drawing(e.to_string())
}

//! Per-route summary tables for terminal output.
//!
//! Formatting lives here so the fitter and pipeline only produce data, and
//! layout changes stay local to this file.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{DistParams, SkipReason};
use crate::io::RowError;

/// What happened to one stop in a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopStatus {
    /// Fitted; no comparison image requested.
    Fitted,
    /// Fitted and the comparison image was written.
    Saved(PathBuf),
    /// Fit or render skipped (the fit may still exist, see `params`).
    Skipped(SkipReason),
}

impl StopStatus {
    pub fn label(&self) -> String {
        match self {
            StopStatus::Fitted => "fitted".to_string(),
            StopStatus::Saved(path) => format!("saved {}", path.display()),
            StopStatus::Skipped(reason) => match reason {
                SkipReason::NoNumericData => "skip: no numeric data".to_string(),
                SkipReason::ConstantData => "skip: constant data".to_string(),
                SkipReason::TooFewPositive => "skip: too few positive values".to_string(),
                SkipReason::NotFitted => "skip: not fitted".to_string(),
                SkipReason::TooFewPoints { remaining } => {
                    format!("skip plot: {remaining} point(s) above threshold")
                }
                SkipReason::FileExists(path) => format!("exists {}", path.display()),
            },
        }
    }
}

/// One row of a route table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopSummary {
    pub stop_id: String,
    /// Samples left after numeric coercion.
    pub n_samples: usize,
    /// Lognormal fit, when one was stored.
    pub params: Option<DistParams>,
    pub status: StopStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub route_id: String,
    pub stops: Vec<StopSummary>,
}

impl RouteSummary {
    pub fn fitted_count(&self) -> usize {
        self.stops.iter().filter(|s| s.params.is_some()).count()
    }
}

/// Format the whole run: ingest counters, then one table per route.
pub fn format_batch_summary(routes: &[RouteSummary], rows_read: usize, row_errors: &[RowError]) -> String {
    let mut out = String::new();

    out.push_str("=== stopfit - Stop Duration Fits (Lognormal) ===\n");
    out.push_str(&format!(
        "Rows: read={rows_read} | errors={} | routes={}\n",
        row_errors.len(),
        routes.len()
    ));
    for err in row_errors.iter().take(10) {
        out.push_str(&format!("  line {}: {}\n", err.line, err.message));
    }
    if row_errors.len() > 10 {
        out.push_str(&format!("  ... and {} more\n", row_errors.len() - 10));
    }

    for route in routes {
        out.push('\n');
        out.push_str(&format_route_summary(route));
    }

    out
}

/// Format a single route table.
pub fn format_route_summary(route: &RouteSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Route {} ({} stops, {} fitted)\n",
        route.route_id,
        route.stops.len(),
        route.fitted_count()
    ));

    out.push_str(format!("{:<16} {:>6} {:>10} {:>10}  {}", "stop", "n", "shape", "scale", "status").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<16} {:-<6} {:-<10} {:-<10}  {:-<6}", "", "", "", "", "").trim_end());
    out.push('\n');

    for stop in &route.stops {
        let (shape, scale) = match &stop.params {
            Some(p) => (format!("{:.4}", p.shape), format!("{:.3}", p.scale)),
            None => ("-".to_string(), "-".to_string()),
        };
        out.push_str(
            format!(
                "{:<16} {:>6} {:>10} {:>10}  {}",
                truncate(&stop.stop_id, 16),
                stop.n_samples,
                shape,
                scale,
                stop.status.label()
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}

//! Rendering of empirical-vs-fitted density charts.
//!
//! - chart description + Plotters drawing on any backend (`chart`)
//! - output paths and file surfaces (`output`)
//! - text rendering for terminals (`ascii`)

use thiserror::Error;

use crate::fit::FitError;

pub mod ascii;
pub mod chart;
pub mod output;

pub use ascii::*;
pub use chart::*;
pub use output::*;

/// Errors that can occur while drawing or writing a chart.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to draw chart: {0}")]
    Drawing(String),

    #[error("Failed to write plot output: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Fit(#[from] FitError),
}

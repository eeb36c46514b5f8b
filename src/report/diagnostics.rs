//! Tagged, single-line diagnostics.
//!
//! Skips and saves are reported on stdout as one line each, prefixed with a
//! tag that log scrapers key on:
//!
//! | tag           | meaning                                   |
//! |---------------|-------------------------------------------|
//! | `[SKIP]`      | no usable data for a fit or a comparison  |
//! | `[SKIP PLOT]` | plot requested for a stop with no fit     |
//! | `[SKIP SAVE]` | output image already exists               |
//! | `[SAVED]`     | comparison image written                  |
//!
//! The fitter emits through a [`DiagnosticSink`] so callers (and tests) can
//! capture the lines instead of printing them.

use std::fmt;
use std::path::PathBuf;

/// One observable diagnostic line.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    NoNumericData { route_id: String, stop_id: String },
    ConstantData { route_id: String, stop_id: String },
    TooFewPositive { route_id: String, stop_id: String },
    /// `display` on a stop without a fit.
    NoFittedPdf { route_id: String, stop_id: String },
    /// `render_comparison` on a stop without a fit.
    NoFittedData { route_id: String, stop_id: String },
    TooFewPoints { route_id: String, stop_id: String },
    FileExists { path: PathBuf },
    Saved { path: PathBuf },
}

impl Diagnostic {
    pub fn tag(&self) -> &'static str {
        match self {
            Diagnostic::NoNumericData { .. }
            | Diagnostic::ConstantData { .. }
            | Diagnostic::TooFewPositive { .. }
            | Diagnostic::TooFewPoints { .. } => "[SKIP]",
            Diagnostic::NoFittedPdf { .. } | Diagnostic::NoFittedData { .. } => "[SKIP PLOT]",
            Diagnostic::FileExists { .. } => "[SKIP SAVE]",
            Diagnostic::Saved { .. } => "[SAVED]",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        match self {
            Diagnostic::NoNumericData { route_id, stop_id } => {
                write!(f, "{tag} No valid numeric data for stop {stop_id} on route {route_id}")
            }
            Diagnostic::ConstantData { route_id, stop_id } => {
                write!(f, "{tag} Constant data for stop {stop_id} on route {route_id}")
            }
            Diagnostic::TooFewPositive { route_id, stop_id } => {
                write!(f, "{tag} Too few positive values to fit for stop {stop_id} on route {route_id}")
            }
            Diagnostic::NoFittedPdf { route_id, stop_id } => {
                write!(f, "{tag} No fitted PDF for stop {stop_id} on route {route_id}")
            }
            Diagnostic::NoFittedData { route_id, stop_id } => {
                write!(f, "{tag} No fitted data for stop {stop_id} on route {route_id}")
            }
            Diagnostic::TooFewPoints { route_id, stop_id } => {
                write!(f, "{tag} Too few data points to plot for stop {stop_id} on route {route_id}")
            }
            Diagnostic::FileExists { path } => {
                write!(f, "{tag} File already exists → {}", path.display())
            }
            Diagnostic::Saved { path } => {
                write!(f, "{tag} Comparison plot (Lognormal vs Gamma) → {}", path.display())
            }
        }
    }
}

/// Destination for diagnostics.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Prints each diagnostic as a line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        println!("{diagnostic}");
    }
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

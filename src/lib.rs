//! `stop-fit` library crate.
//!
//! Fits break-duration distributions per bus stop (lognormal, location 0),
//! compares lognormal and gamma fits in saved plots, and reports guarded
//! skips as tagged stdout lines.
//!
//! The binary (`stopfit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the fitter can be embedded with any diagnostic sink or drawing surface

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;

//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw sample values as handed over by ingestion (`RawValue`)
//! - fitted parameters and per-stop snapshots (`DistParams`, `FittedStop`)
//! - run configuration (`FitterConfig`, `ImageFormat`)
//! - call outcomes (`FitOutcome`, `RenderOutcome`, `SkipReason`)

pub mod types;

pub use types::*;

//! Distribution fitting.
//!
//! Responsibilities:
//!
//! - coerce raw samples to numbers (`coerce`)
//! - maximum-likelihood estimates with location fixed at 0 (`mle`)
//! - per-route stop fitting, guards and rendering entry points (`fitter`)

pub mod coerce;
pub mod errors;
pub mod fitter;
pub mod mle;

pub use coerce::*;
pub use errors::*;
pub use fitter::*;
pub use mle::*;

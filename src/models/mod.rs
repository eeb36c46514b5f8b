//! Parametric density models.
//!
//! Models are implemented as small, pure functions so that the fitter and the
//! plotting code can stay family-agnostic.

pub mod density;

pub use density::*;

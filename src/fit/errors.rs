//! Errors for numeric fitting failures.
//!
//! Degenerate samples (empty, constant, too few positive values) are *not*
//! errors: the fitter guards against them and reports a skip. A [`FitError`]
//! means an estimate failed for a reason the guards do not cover, and it is
//! propagated to the caller.

use thiserror::Error;

use crate::domain::Family;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("{} fit needs at least one sample", family.display_name())]
    EmptySample { family: Family },

    #[error(
        "{} fit with location 0 needs strictly positive samples; found {value} at index {index}",
        family.display_name()
    )]
    NonPositiveData { family: Family, index: usize, value: f64 },

    #[error("{} fit is undefined for samples without spread", family.display_name())]
    DegenerateSample { family: Family },

    #[error("{} shape estimate did not converge after {iterations} iterations", family.display_name())]
    NoConvergence { family: Family, iterations: usize },

    #[error("{} fit produced a non-finite {what}", family.display_name())]
    NonFiniteEstimate { family: Family, what: &'static str },

    #[error("invalid {} parameters: {reason}", family.display_name())]
    InvalidParameters { family: Family, reason: String },
}

//! Reporting: tagged diagnostic lines and per-route summary tables.

pub mod diagnostics;
pub mod format;

pub use diagnostics::*;
pub use format::*;

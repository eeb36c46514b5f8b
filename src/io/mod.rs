//! Input/output helpers.
//!
//! - CSV ingest + grouping by route and stop (`ingest`)
//! - JSON batch summary export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;

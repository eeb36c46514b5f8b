//! Mathematical utilities: evaluation grids, histograms and special functions.

pub mod grid;
pub mod histogram;
pub mod special;

pub use grid::*;
pub use histogram::*;
pub use special::*;

//! Output paths and file-backed drawing surfaces.
//!
//! Comparison images live at
//! `<output_dir>/route_<route_id>/compare_<route_id>_<stop_id>.<ext>`.
//! Every write gets a fresh backend; nothing is shared between calls. PNG goes
//! through the bitmap backend, SVG through the SVG backend.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::domain::ImageFormat;
use crate::plot::{DensityChart, PlotError, draw_density_chart};

/// Deterministic path of a stop's comparison image.
pub fn comparison_path(output_dir: &Path, route_id: &str, stop_id: &str, format: ImageFormat) -> PathBuf {
    output_dir
        .join(format!("route_{route_id}"))
        .join(format!("compare_{route_id}_{stop_id}.{}", format.extension()))
}

/// Draw `chart` into a new image file, creating parent directories.
///
/// Does not check for an existing file; callers decide about overwrites.
pub fn write_chart(path: &Path, format: ImageFormat, size: (u32, u32), chart: &DensityChart) -> Result<(), PlotError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    match format {
        ImageFormat::Svg => {
            let area = SVGBackend::new(path, size).into_drawing_area();
            draw_density_chart(&area, chart)
        }
        ImageFormat::Png => {
            let area = BitMapBackend::new(path, size).into_drawing_area();
            draw_density_chart(&area, chart)
        }
    }
}

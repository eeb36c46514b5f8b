//! Command-line parsing for the stop duration fitter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting and plotting code; `app` maps these args onto a `FitterConfig`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ImageFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "stopfit",
    version,
    about = "Fit lognormal/gamma break-duration distributions per bus stop"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit every stop of every route in a CSV, write comparison plots, print a summary.
    Fit(FitArgs),
    /// Fit one stop and draw its empirical-vs-fitted density in the terminal.
    Show(ShowArgs),
}

/// Options for batch fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Input CSV with `route_id`, `stop_id` and `value` columns.
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Root directory for comparison images.
    #[arg(short = 'o', long, default_value = "results")]
    pub output: PathBuf,

    /// Histogram bins in comparison plots.
    #[arg(long, default_value_t = 30)]
    pub bins: usize,

    /// Image format for comparison plots.
    #[arg(long, value_enum, default_value_t = ImageFormat::default())]
    pub format: ImageFormat,

    /// Fit and summarise only; write no images.
    #[arg(long)]
    pub no_render: bool,

    /// Also write the batch summary as JSON to this path.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

/// Options for the terminal view of one stop.
#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    /// Input CSV with `route_id`, `stop_id` and `value` columns.
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Route id.
    #[arg(short = 'r', long)]
    pub route: String,

    /// Stop id.
    #[arg(short = 's', long)]
    pub stop: String,

    /// Plot width (columns); also the histogram bin count.
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

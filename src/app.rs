//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initialises logging (stderr, so stdout stays for diagnostics and tables)
//! - parses CLI arguments
//! - runs the batch pipeline or the single-stop view
//! - prints summaries/plots

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, FitArgs, ShowArgs};
use crate::domain::FitterConfig;
use crate::error::AppError;
use crate::report::StdoutSink;

pub mod pipeline;

/// Entry point for the `stopfit` binary.
pub fn run() -> Result<(), AppError> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Show(args) => handle_show(args),
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. in tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fitter_config_from_args(&args);
    let options = pipeline::BatchOptions {
        output_dir: args.output.clone(),
        render: !args.no_render,
    };

    let run = pipeline::run_fit(&args.input, &config, &options, &mut StdoutSink)?;

    if let Some(path) = &args.json {
        crate::io::write_summary_json(path, &run.routes, &run.ingest)?;
    }

    println!(
        "{}",
        crate::report::format_batch_summary(&run.routes, run.ingest.rows_read, &run.ingest.row_errors)
    );
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let ingest = crate::io::load_route_samples(&args.input).map_err(|e| e.context(args.input.display()))?;
    let config = FitterConfig::default();

    if let Some(stop) = pipeline::fit_single(&ingest, &args.route, &args.stop, &config, &mut StdoutSink)? {
        let params = stop.params();
        println!(
            "Lognormal fit: shape={:.4} loc={:.1} scale={:.3} (n={})",
            params.shape,
            params.loc,
            params.scale,
            stop.data().len()
        );
        println!("{}", crate::plot::render_ascii_density(&stop, args.width, args.height));
    }
    Ok(())
}

pub fn fitter_config_from_args(args: &FitArgs) -> FitterConfig {
    FitterConfig {
        histogram_bins: args.bins.max(1),
        image_format: args.format,
        ..FitterConfig::default()
    }
}

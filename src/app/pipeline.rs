//! Shared batch pipeline used by the `fit` and `show` commands.
//!
//! Workflow: CSV ingest -> per-route fitter -> fit each stop -> optional
//! comparison render -> summary rows.
//!
//! Routes and stops are processed in id order, so diagnostics and summaries
//! are deterministic. Skips never stop the batch; a fatal numeric error
//! aborts it with the route and stop attached.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{FitOutcome, FittedStop, FitterConfig, RawValue, RenderOutcome};
use crate::error::{AppError, EXIT_NO_DATA};
use crate::fit::{RouteStopFitter, coerce_all};
use crate::io::{IngestedSamples, load_route_samples};
use crate::report::{DiagnosticSink, RouteSummary, StopStatus, StopSummary};

/// Batch-level switches that are not fitter tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    pub output_dir: PathBuf,
    /// Write comparison images (otherwise fit only).
    pub render: bool,
}

/// All computed outputs of a single `stopfit fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedSamples,
    pub routes: Vec<RouteSummary>,
}

/// Load the CSV at `input` and run the batch.
pub fn run_fit<S: DiagnosticSink>(
    input: &Path,
    config: &FitterConfig,
    options: &BatchOptions,
    sink: &mut S,
) -> Result<RunOutput, AppError> {
    let ingest = load_route_samples(input).map_err(|e| e.context(input.display()))?;
    info!(
        rows = ingest.rows_read,
        routes = ingest.routes.len(),
        stops = ingest.stop_count(),
        "ingested samples"
    );
    let routes = run_batch(&ingest, config, options, sink)?;
    Ok(RunOutput { ingest, routes })
}

/// Fit (and optionally render) every stop of every route.
pub fn run_batch<S: DiagnosticSink>(
    ingest: &IngestedSamples,
    config: &FitterConfig,
    options: &BatchOptions,
    sink: &mut S,
) -> Result<Vec<RouteSummary>, AppError> {
    let mut routes = Vec::with_capacity(ingest.routes.len());

    for (route_id, stops) in &ingest.routes {
        let mut fitter = RouteStopFitter::with_config_and_sink(route_id.as_str(), config.clone(), &mut *sink);
        let mut summaries = Vec::with_capacity(stops.len());

        for (stop_id, values) in stops {
            let summary = process_stop(&mut fitter, stop_id, values, options)
                .map_err(|e| e.context(format!("route {route_id}, stop {stop_id}")))?;
            summaries.push(summary);
        }

        info!(route_id = %route_id, stops = summaries.len(), "route done");
        routes.push(RouteSummary {
            route_id: route_id.clone(),
            stops: summaries,
        });
    }

    Ok(routes)
}

fn process_stop<S: DiagnosticSink>(
    fitter: &mut RouteStopFitter<S>,
    stop_id: &str,
    values: &[RawValue],
    options: &BatchOptions,
) -> Result<StopSummary, AppError> {
    let n_samples = coerce_all(values.iter().cloned()).len();

    let params = match fitter.fit(stop_id, values.iter().cloned())? {
        FitOutcome::Fitted(params) => params,
        FitOutcome::Skipped(reason) => {
            return Ok(StopSummary {
                stop_id: stop_id.to_string(),
                n_samples,
                params: None,
                status: StopStatus::Skipped(reason),
            });
        }
    };

    let status = if options.render {
        match fitter.render_comparison(stop_id, &options.output_dir)? {
            RenderOutcome::Saved(path) => StopStatus::Saved(path),
            RenderOutcome::Skipped(reason) => StopStatus::Skipped(reason),
            RenderOutcome::Drawn => StopStatus::Fitted,
        }
    } else {
        StopStatus::Fitted
    };

    Ok(StopSummary {
        stop_id: stop_id.to_string(),
        n_samples,
        params: Some(params),
        status,
    })
}

/// Fit a single stop from an ingested CSV.
///
/// Returns `None` when the stop was skipped; its diagnostic has already gone
/// to `sink`.
pub fn fit_single<S: DiagnosticSink>(
    ingest: &IngestedSamples,
    route_id: &str,
    stop_id: &str,
    config: &FitterConfig,
    sink: &mut S,
) -> Result<Option<FittedStop>, AppError> {
    let values = ingest
        .routes
        .get(route_id)
        .and_then(|stops| stops.get(stop_id))
        .ok_or_else(|| AppError::new(EXIT_NO_DATA, format!("No samples for route {route_id}, stop {stop_id}")))?;

    let mut fitter = RouteStopFitter::with_config_and_sink(route_id, config.clone(), sink);
    fitter
        .fit(stop_id, values.iter().cloned())
        .map_err(|e| AppError::from(e).context(format!("route {route_id}, stop {stop_id}")))?;
    Ok(fitter.get(stop_id).cloned())
}

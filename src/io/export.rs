//! Write the batch summary as JSON.
//!
//! The JSON file mirrors the terminal tables: one entry per route, one per
//! stop, with the stored lognormal parameters and what happened to the stop.
//! Rows rejected at ingest are listed with their CSV line numbers.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::error::{AppError, EXIT_PLOT};
use crate::io::{IngestedSamples, RowError};
use crate::report::RouteSummary;

#[derive(Debug, Serialize)]
struct SummaryFile<'a> {
    tool: &'static str,
    rows_read: usize,
    rows_used: usize,
    row_errors: &'a [RowError],
    routes: &'a [RouteSummary],
}

/// Write a batch summary JSON file, creating parent directories as needed.
pub fn write_summary_json(path: &Path, routes: &[RouteSummary], ingest: &IngestedSamples) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::new(EXIT_PLOT, format!("Failed to create '{}': {e}", parent.display())))?;
    }
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_PLOT, format!("Failed to create summary JSON '{}': {e}", path.display())))?;

    let summary = SummaryFile {
        tool: "stopfit",
        rows_read: ingest.rows_read,
        rows_used: ingest.rows_used,
        row_errors: &ingest.row_errors,
        routes,
    };

    serde_json::to_writer_pretty(file, &summary)
        .map_err(|e| AppError::new(EXIT_PLOT, format!("Failed to write summary JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DistParams, Family, SkipReason};
    use crate::io::read_route_samples;
    use crate::report::{StopStatus, StopSummary};
    use std::path::PathBuf;

    #[test]
    fn summary_json_lists_routes_stops_and_row_errors() {
        let ingest = read_route_samples("route_id,stop_id,value\n12,A,10\n12,A,20\n,B,3\n".as_bytes()).unwrap();
        let routes = vec![RouteSummary {
            route_id: "12".to_string(),
            stops: vec![
                StopSummary {
                    stop_id: "A".to_string(),
                    n_samples: 2,
                    params: Some(DistParams {
                        family: Family::Lognormal,
                        shape: 0.35,
                        loc: 0.0,
                        scale: 14.1,
                    }),
                    status: StopStatus::Saved(PathBuf::from("results/route_12/compare_12_A.png")),
                },
                StopSummary {
                    stop_id: "C".to_string(),
                    n_samples: 3,
                    params: None,
                    status: StopStatus::Skipped(SkipReason::ConstantData),
                },
            ],
        }];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("summary.json");
        write_summary_json(&path, &routes, &ingest).unwrap();

        let json: serde_json::Value = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(json["tool"], "stopfit");
        assert_eq!(json["rows_read"], 3);
        assert_eq!(json["rows_used"], 2);
        assert_eq!(json["row_errors"][0]["line"], 4);

        let stops = &json["routes"][0]["stops"];
        assert_eq!(json["routes"][0]["route_id"], "12");
        assert_eq!(stops[0]["params"]["family"], "lognormal");
        assert_eq!(stops[0]["params"]["shape"], 0.35);
        assert_eq!(stops[0]["status"]["saved"], "results/route_12/compare_12_A.png");
        assert!(stops[1]["params"].is_null());
        assert_eq!(stops[1]["status"]["skipped"], "constant_data");
    }

    #[test]
    fn unwritable_summary_path_is_an_output_error() {
        let ingest = read_route_samples("route_id,stop_id,value\n12,A,10\n".as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "").unwrap();

        let err = write_summary_json(&blocker.join("summary.json"), &[], &ingest).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_PLOT);
    }
}

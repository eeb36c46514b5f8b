//! CSV ingest of per-stop break-duration samples.
//!
//! Expected schema (header names are case-insensitive; a UTF-8 BOM on the
//! first header is ignored; extra columns are allowed):
//!
//! | column     | meaning                                  |
//! |------------|------------------------------------------|
//! | `route_id` | route identifier (required, non-empty)   |
//! | `stop_id`  | stop identifier (required, non-empty)    |
//! | `value`    | one raw sample, passed through unparsed  |
//!
//! Values are *not* validated here: numeric coercion belongs to the fitter,
//! which drops whatever does not read as a number. Rows without ids are
//! reported as row errors and skipped.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Serialize;

use crate::domain::RawValue;
use crate::error::{AppError, EXIT_INPUT, EXIT_NO_DATA};

/// Raw samples keyed by route, then stop. Both levels iterate in id order.
pub type RouteSamples = BTreeMap<String, BTreeMap<String, Vec<RawValue>>>;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: grouped samples + row errors + counters.
#[derive(Debug, Clone)]
pub struct IngestedSamples {
    pub routes: RouteSamples,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

impl IngestedSamples {
    /// Total number of (route, stop) pairs.
    pub fn stop_count(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum()
    }
}

/// Load and group samples from a CSV file.
pub fn load_route_samples(path: &Path) -> Result<IngestedSamples, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_route_samples(file)
}

/// Group samples from any CSV reader.
pub fn read_route_samples<R: Read>(reader: R) -> Result<IngestedSamples, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    let columns = Columns::resolve(&header_map)?;

    let mut routes = RouteSamples::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_used = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, lines are 1-based
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match columns.parse_row(&record) {
            Ok((route_id, stop_id, value)) => {
                routes
                    .entry(route_id)
                    .or_default()
                    .entry(stop_id)
                    .or_default()
                    .push(value);
                rows_used += 1;
            }
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    if rows_used == 0 {
        return Err(AppError::new(EXIT_NO_DATA, "No rows with a route_id and stop_id were found."));
    }

    Ok(IngestedSamples {
        routes,
        row_errors,
        rows_read,
        rows_used,
    })
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    route_id: usize,
    stop_id: usize,
    value: usize,
}

impl Columns {
    fn resolve(header_map: &HashMap<String, usize>) -> Result<Self, AppError> {
        let required = |name: &str| {
            header_map
                .get(name)
                .copied()
                .ok_or_else(|| AppError::new(EXIT_INPUT, format!("Missing required column: `{name}`")))
        };
        Ok(Self {
            route_id: required("route_id")?,
            stop_id: required("stop_id")?,
            value: required("value")?,
        })
    }

    fn parse_row(&self, record: &StringRecord) -> Result<(String, String, RawValue), String> {
        let route_id = get_id(record, self.route_id, "route_id")?;
        let stop_id = get_id(record, self.stop_id, "stop_id")?;
        let value = match record.get(self.value) {
            Some(v) if !v.is_empty() => RawValue::Text(v.to_string()),
            _ => RawValue::Null,
        };
        Ok((route_id, stop_id, value))
    }
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn get_id(record: &StringRecord, idx: usize, name: &str) -> Result<String, String> {
    match record.get(idx) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(format!("Missing `{name}`")),
    }
}

//! CSV results loader.
//!
//! # CSV format
//!
//! One row per simulation run, header row required.  Columns are matched by
//! name (see [`REQUIRED_COLUMNS`]); their order does not matter and extra
//! columns are ignored.
//!
//! ```csv
//! tot_people,nb_of_spectators,nb_of_workers,workers_over_spectators,leader_frac,follower_frac,tot_saved_people,tot_victims,tot_panic_victims,...
//! 500,400,100,0.25,0.2,0.8,420,80,12,...
//! ```
//!
//! Numeric cells may be integers or floats.  Surrounding whitespace in both
//! headers and cells is trimmed.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::record::{REQUIRED_COLUMNS, RunRecord};
use crate::{CoreError, CoreResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every run from the CSV file at `path`, in file row order.
pub fn load_runs_csv(path: &Path) -> CoreResult<Vec<RunRecord>> {
    let file = std::fs::File::open(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let runs = load_runs_reader(file)?;
    info!(path = %path.display(), runs = runs.len(), "loaded results table");
    Ok(runs)
}

/// Like [`load_runs_csv`] but accepts any `Read` source.
pub fn load_runs_reader<R: Read>(reader: R) -> CoreResult<Vec<RunRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // ── Schema check ──────────────────────────────────────────────────────
    let headers = csv_reader
        .headers()
        .map_err(|e| CoreError::Parse(e.to_string()))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CoreError::MissingColumn(column));
        }
    }

    // ── Rows ──────────────────────────────────────────────────────────────
    let mut runs = Vec::new();
    for (row, result) in csv_reader.deserialize::<RunRecord>().enumerate() {
        let record = result.map_err(|e| CoreError::Parse(format!("row {}: {e}", row + 1)))?;
        if !record.is_consistent() {
            debug!(
                row,
                saved = record.tot_saved_people,
                victims = record.tot_victims,
                people = record.tot_people,
                "saved + victims does not match tot_people"
            );
        }
        runs.push(record);
    }

    Ok(runs)
}

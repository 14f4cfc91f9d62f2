//! `ev-core` — foundational types for evacuation run analysis.
//!
//! Every other `ev-*` crate depends on this one.  It owns the fixed table
//! schema, the CSV loader, and the per-row metric derivation.
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`record`]   | `RunRecord`, `Column`, `REQUIRED_COLUMNS`                 |
//! | [`loader`]   | `load_runs_csv`, `load_runs_reader`                       |
//! | [`derive`]   | `SurvivalMetrics`, `DerivedRun`, `DerivedTable`, `percentage` |
//! | [`config`]   | `AnalysisConfig`                                          |
//! | [`error`]    | `CoreError`, `CoreResult`                                 |
//!
//! # Zero denominators
//!
//! A derived percentage whose denominator is zero is `f64::NAN`.  Aggregates
//! in `ev-stats` skip non-finite values, so such rows simply drop out of the
//! statistics for that column.

pub mod config;
pub mod derive;
pub mod error;
pub mod loader;
pub mod record;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::AnalysisConfig;
pub use derive::{DerivedRun, DerivedTable, SurvivalMetrics, derive_metrics, percentage};
pub use error::{CoreError, CoreResult};
pub use loader::{load_runs_csv, load_runs_reader};
pub use record::{Column, REQUIRED_COLUMNS, RunRecord};

//! `ev-report` — text summary of an evacuation analysis.
//!
//! [`Report::build`] computes every statistic up front; the `Display` impl
//! only formats.  Callers can therefore build the report, finish any other
//! fallible work, and print last.
//!
//! ```rust,ignore
//! let report = Report::build(&table)?;
//! println!("{report}");
//! ```

pub mod error;
pub mod format;
pub mod report;

#[cfg(test)]
mod tests;

pub use error::{ReportError, ReportResult};
pub use format::{banner, closing_banner, saved_line};
pub use report::{DatasetInfo, Report, RoleRates};

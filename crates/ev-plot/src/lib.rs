//! `ev-plot` — six-panel PNG figures for evacuation run analysis.
//!
//! Rendering is split in two stages.  [`OverviewData::build`] and
//! [`DetailedData::build`] compute every statistic a panel shows and can fail
//! (empty table, constant trend column).  [`render_overview`] and
//! [`render_detailed`] then lay those values out on a [`FigureContext`] and
//! can only fail on I/O.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`context`]   | `FigureContext`, `ensure_writable`                      |
//! | [`data`]      | `OverviewData`, `DetailedData` and their building blocks |
//! | [`overview`]  | panels 1–6                                              |
//! | [`detailed`]  | panels 7–12                                             |
//! | [`palette`]   | fixed colours, `viridis`                                |
//! | [`error`]     | `RenderError`, `RenderResult`                           |

pub mod context;
pub mod data;
pub mod detailed;
pub mod error;
pub mod overview;
pub mod palette;

mod draw;

#[cfg(test)]
mod tests;

pub use context::{FigureContext, ensure_writable};
pub use data::{CategoryStat, DetailedData, Extremes, Outcome, OverviewData, PairedRuns, Trend};
pub use detailed::render_detailed;
pub use error::{RenderError, RenderResult};
pub use overview::render_overview;

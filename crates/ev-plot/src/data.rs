//! Panel data models.
//!
//! Everything a figure shows is computed here, from the derived table, before
//! any file is opened.  Rendering code only lays these values out.

use tracing::debug;

use ev_core::{Column, DerivedTable};
use ev_stats::{BoxStats, LinearFit, Summary, argmax_first, argmin_first, pearson};

use crate::{RenderError, RenderResult};

pub const ROLE_LABELS: [&str; 4] = ["Spectators", "Workers", "Leaders", "Followers"];

const ROLE_RATE_COLUMNS: [Column; 4] = [
    Column::SpectatorSurvivalRate,
    Column::WorkerSurvivalRate,
    Column::LeaderSurvivalRate,
    Column::FollowerSurvivalRate,
];

pub const VICTIM_LABELS: [&str; 5] = ["Spectators", "Workers", "Leaders", "Followers", "Panic"];

const VICTIM_COLUMNS: [Column; 5] = [
    Column::TotSpectatorsVictims,
    Column::TotWorkersVictims,
    Column::TotLeadersVictims,
    Column::TotFollowersVictims,
    Column::TotPanicVictims,
];

pub const VARIABILITY_LABELS: [&str; 5] = ["Overall", "Spectators", "Workers", "Leaders", "Followers"];

const VARIABILITY_COLUMNS: [Column; 5] = [
    Column::SurvivalRate,
    Column::SpectatorSurvivalRate,
    Column::WorkerSurvivalRate,
    Column::LeaderSurvivalRate,
    Column::FollowerSurvivalRate,
];

// ── Building blocks ───────────────────────────────────────────────────────────

/// Mean and sample standard deviation of one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStat {
    pub label: &'static str,
    pub mean:  f64,
    pub std:   f64,
}

impl CategoryStat {
    fn of(label: &'static str, table: &DerivedTable, column: Column) -> Self {
        let s = Summary::of(&table.column(column));
        Self { label, mean: s.mean, std: s.std }
    }

    /// Top of the error bar, treating undefined parts as zero.
    pub fn upper(&self) -> f64 {
        finite_or_zero(self.mean) + finite_or_zero(self.std)
    }
}

/// Two per-run series drawn side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedRuns {
    pub left_label:  &'static str,
    pub left:        Vec<f64>,
    pub right_label: &'static str,
    pub right:       Vec<f64>,
}

impl PairedRuns {
    fn of(table: &DerivedTable, left: (&'static str, Column), right: (&'static str, Column)) -> Self {
        Self {
            left_label:  left.0,
            left:        table.column(left.1),
            right_label: right.0,
            right:       table.column(right.1),
        }
    }
}

/// Scatter points with a least-squares trend and Pearson coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    pub points:      Vec<(f64, f64)>,
    pub fit:         LinearFit,
    pub correlation: f64,
}

impl Trend {
    /// Fails when either column has zero variance.
    pub fn of(table: &DerivedTable, x: Column, y: Column) -> RenderResult<Self> {
        let xs = table.column(x);
        let ys = table.column(y);
        let correlation = pearson(&xs, &ys)?;
        let fit = LinearFit::fit(&xs, &ys)?;
        let points = xs
            .into_iter()
            .zip(ys)
            .filter(|(a, b)| a.is_finite() && b.is_finite())
            .collect();
        debug!(%x, %y, correlation, slope = fit.slope, "fitted trend");
        Ok(Self { points, fit, correlation })
    }

    /// `(min, max)` of the x values.
    pub fn x_extent(&self) -> (f64, f64) {
        extent(self.points.iter().map(|p| p.0))
    }
}

/// Mean saved vs. victims for one population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub label:   &'static str,
    pub saved:   f64,
    pub victims: f64,
}

impl Outcome {
    pub fn total(&self) -> f64 {
        self.saved + self.victims
    }

    pub fn saved_pct(&self) -> f64 {
        ev_core::percentage(self.saved, self.total())
    }

    pub fn victims_pct(&self) -> f64 {
        ev_core::percentage(self.victims, self.total())
    }
}

/// Victim counts of the best and worst run, per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub best:          usize,
    pub worst:         usize,
    pub best_rate:     f64,
    pub worst_rate:    f64,
    pub best_victims:  Vec<f64>,
    pub worst_victims: Vec<f64>,
}

impl Extremes {
    /// First run with the highest / lowest overall survival rate.
    pub fn of(table: &DerivedTable) -> RenderResult<Self> {
        let rates = table.column(Column::SurvivalRate);
        let best = argmax_first(&rates).ok_or(RenderError::EmptyDataset)?;
        let worst = argmin_first(&rates).ok_or(RenderError::EmptyDataset)?;
        let victims = |i: usize| -> Vec<f64> {
            VICTIM_COLUMNS.iter().map(|&c| table.runs()[i].value(c)).collect()
        };
        Ok(Self {
            best,
            worst,
            best_rate: rates[best],
            worst_rate: rates[worst],
            best_victims: victims(best),
            worst_victims: victims(worst),
        })
    }
}

// ── Figures ───────────────────────────────────────────────────────────────────

/// Panels 1–6.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewData {
    /// Panel 1.
    pub survival_by_run:  Vec<f64>,
    pub mean_survival:    f64,
    /// Panel 2.
    pub role_rates:       Vec<CategoryStat>,
    /// Panel 3: `(victims, saved)` per run, in run order.
    pub victims_vs_saved: Vec<(f64, f64)>,
    pub tot_people:       f64,
    /// Panel 4.
    pub victim_breakdown: Vec<CategoryStat>,
    /// Panel 5.
    pub spectators_vs_workers: PairedRuns,
    /// Panel 6.
    pub leaders_vs_followers:  PairedRuns,
}

impl OverviewData {
    pub fn build(table: &DerivedTable) -> RenderResult<Self> {
        let first = table.first().ok_or(RenderError::EmptyDataset)?;
        let survival_by_run = table.column(Column::SurvivalRate);

        Ok(Self {
            mean_survival: ev_stats::mean(&survival_by_run),
            survival_by_run,
            role_rates: ROLE_LABELS
                .iter()
                .zip(ROLE_RATE_COLUMNS)
                .map(|(&l, c)| CategoryStat::of(l, table, c))
                .collect(),
            victims_vs_saved: table
                .column(Column::TotVictims)
                .into_iter()
                .zip(table.column(Column::TotSavedPeople))
                .collect(),
            tot_people: first.record.tot_people,
            victim_breakdown: VICTIM_LABELS
                .iter()
                .zip(VICTIM_COLUMNS)
                .map(|(&l, c)| CategoryStat::of(l, table, c))
                .collect(),
            spectators_vs_workers: PairedRuns::of(
                table,
                ("Spectators", Column::SpectatorSurvivalRate),
                ("Workers", Column::WorkerSurvivalRate),
            ),
            leaders_vs_followers: PairedRuns::of(
                table,
                ("Leaders", Column::LeaderSurvivalRate),
                ("Followers", Column::FollowerSurvivalRate),
            ),
        })
    }

    pub fn runs(&self) -> usize {
        self.survival_by_run.len()
    }
}

/// Panels 7–12.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedData {
    /// Panel 7: panic victims on total victims.
    pub panic_trend:    Trend,
    /// Panel 8: survival rate on total victims.
    pub survival_trend: Trend,
    /// Panel 9, in [`ROLE_LABELS`] order; `None` for a role with no
    /// defined rate.
    pub role_boxes:     Vec<Option<BoxStats>>,
    /// Panel 10.
    pub outcomes:       [Outcome; 2],
    /// Panel 11: coefficient of variation, in [`VARIABILITY_LABELS`] order.
    pub variability:    Vec<f64>,
    /// Panel 12.
    pub extremes:       Extremes,
}

impl DetailedData {
    pub fn build(table: &DerivedTable) -> RenderResult<Self> {
        if table.is_empty() {
            return Err(RenderError::EmptyDataset);
        }
        let mean_of = |c: Column| ev_stats::mean(&table.column(c));

        Ok(Self {
            panic_trend:    Trend::of(table, Column::TotVictims, Column::TotPanicVictims)?,
            survival_trend: Trend::of(table, Column::TotVictims, Column::SurvivalRate)?,
            role_boxes: ROLE_RATE_COLUMNS
                .iter()
                .map(|&c| BoxStats::of(&table.column(c)))
                .collect(),
            outcomes: [
                Outcome {
                    label:   "Spectators",
                    saved:   mean_of(Column::TotSpectatorsSaved),
                    victims: mean_of(Column::TotSpectatorsVictims),
                },
                Outcome {
                    label:   "Workers",
                    saved:   mean_of(Column::TotWorkersSaved),
                    victims: mean_of(Column::TotWorkersVictims),
                },
            ],
            variability: VARIABILITY_COLUMNS
                .iter()
                .map(|&c| ev_stats::coefficient_of_variation(&table.column(c)))
                .collect(),
            extremes: Extremes::of(table)?,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[inline]
pub(crate) fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// `(min, max)` over finite values; `(0, 1)` if there are none.
pub(crate) fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo.is_finite() { (lo, hi) } else { (0.0, 1.0) }
}

//! The report model and its text layout.

use std::fmt;

use tracing::debug;

use ev_core::{Column, DerivedTable};
use ev_stats::Summary;

use crate::format::{Fixed, banner};
use crate::{ReportError, ReportResult};

/// Static configuration shared by every run, read from the first row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetInfo {
    pub runs:                    usize,
    pub tot_people:              f64,
    pub workers_over_spectators: f64,
    pub nb_of_spectators:        f64,
    pub nb_of_workers:           f64,
}

/// Survival-rate statistics per role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleRates {
    pub spectators: Summary,
    pub workers:    Summary,
    pub leaders:    Summary,
    pub followers:  Summary,
}

/// Every statistic printed by the analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub dataset:       DatasetInfo,
    pub survival:      Summary,
    pub victims:       Summary,
    pub saved:         Summary,
    pub roles:         RoleRates,
    pub panic_victims: Summary,
    pub panic_rate:    Summary,
}

impl Report {
    /// Compute all statistics.  Fails only on an empty table.
    pub fn build(table: &DerivedTable) -> ReportResult<Self> {
        let first = table.first().ok_or(ReportError::EmptyDataset)?;
        let of = |c: Column| Summary::of(&table.column(c));

        let report = Self {
            dataset: DatasetInfo {
                runs:                    table.len(),
                tot_people:              first.record.tot_people,
                workers_over_spectators: first.record.workers_over_spectators,
                nb_of_spectators:        first.record.nb_of_spectators,
                nb_of_workers:           first.record.nb_of_workers,
            },
            survival: of(Column::SurvivalRate),
            victims:  of(Column::TotVictims),
            saved:    of(Column::TotSavedPeople),
            roles: RoleRates {
                spectators: of(Column::SpectatorSurvivalRate),
                workers:    of(Column::WorkerSurvivalRate),
                leaders:    of(Column::LeaderSurvivalRate),
                followers:  of(Column::FollowerSurvivalRate),
            },
            panic_victims: of(Column::TotPanicVictims),
            panic_rate:    of(Column::PanicVictimRate),
        };

        if report.panic_rate.count < table.len() {
            debug!(
                excluded = table.len() - report.panic_rate.count,
                "runs without victims left out of the panic-victim rate"
            );
        }
        Ok(report)
    }
}

/// `mean% (±std%)` at two decimals.
fn rate_line(f: &mut fmt::Formatter<'_>, label: &str, s: &Summary) -> fmt::Result {
    writeln!(f, "{label}: {}% (±{}%)", Fixed(s.mean, 2), Fixed(s.std, 2))
}

/// `mean (±std)` at one decimal.
fn count_line(f: &mut fmt::Formatter<'_>, label: &str, s: &Summary) -> fmt::Result {
    writeln!(f, "{label}: {} (±{})", Fixed(s.mean, 1), Fixed(s.std, 1))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.dataset;
        writeln!(f, "{}", banner("EVACUATION SIMULATION ANALYSIS"))?;
        writeln!(f)?;
        writeln!(f, "Dataset: {} simulation runs", d.runs)?;
        writeln!(f, "Total people per simulation: {}", d.tot_people)?;
        writeln!(f, "Workers/Spectators ratio: {}", d.workers_over_spectators)?;
        writeln!(f, "Number of spectators: {}", d.nb_of_spectators)?;
        writeln!(f, "Number of workers: {}", d.nb_of_workers)?;

        writeln!(f)?;
        writeln!(f, "{}", banner("OVERALL SURVIVAL STATISTICS"))?;
        rate_line(f, "Mean survival rate", &self.survival)?;
        writeln!(
            f,
            "Range: {}% - {}%",
            Fixed(self.survival.min, 2),
            Fixed(self.survival.max, 2)
        )?;
        writeln!(f)?;
        count_line(f, "Mean victims", &self.victims)?;
        count_line(f, "Mean saved", &self.saved)?;

        writeln!(f)?;
        writeln!(f, "{}", banner("SURVIVAL RATES BY ROLE"))?;
        rate_line(f, "Spectators", &self.roles.spectators)?;
        rate_line(f, "Workers", &self.roles.workers)?;
        rate_line(f, "Leaders", &self.roles.leaders)?;
        rate_line(f, "Followers", &self.roles.followers)?;

        writeln!(f)?;
        writeln!(f, "{}", banner("PANIC ANALYSIS"))?;
        count_line(f, "Mean panic victims", &self.panic_victims)?;
        write!(
            f,
            "Panic victims as % of total victims: {}%",
            Fixed(self.panic_rate.mean, 2)
        )
    }
}

//! Per-run survival metrics.
//!
//! Every metric is `100 * numerator / denominator`.  A zero denominator gives
//! `f64::NAN` rather than an infinity or a panic; see [`percentage`].

use tracing::debug;

use crate::record::{Column, RunRecord};

/// `100 * numerator / denominator`, or `NaN` when `denominator == 0`.
#[inline]
pub fn percentage(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::NAN
    } else {
        100.0 * numerator / denominator
    }
}

// ── SurvivalMetrics ───────────────────────────────────────────────────────────

/// The six derived percentage columns for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurvivalMetrics {
    pub survival_rate:           f64,
    pub spectator_survival_rate: f64,
    pub worker_survival_rate:    f64,
    pub leader_survival_rate:    f64,
    pub follower_survival_rate:  f64,
    pub panic_victim_rate:       f64,
}

impl SurvivalMetrics {
    pub fn from_record(r: &RunRecord) -> Self {
        Self {
            survival_rate:           percentage(r.tot_saved_people, r.tot_people),
            spectator_survival_rate: percentage(r.tot_spectators_saved, r.nb_of_spectators),
            worker_survival_rate:    percentage(r.tot_workers_saved, r.nb_of_workers),
            leader_survival_rate:    percentage(r.tot_leaders_saved, r.nb_of_leaders()),
            follower_survival_rate:  percentage(r.tot_followers_saved, r.nb_of_followers()),
            panic_victim_rate:       percentage(r.tot_panic_victims, r.tot_victims),
        }
    }
}

// ── DerivedRun ────────────────────────────────────────────────────────────────

/// A run record together with its derived metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRun {
    pub record:  RunRecord,
    pub metrics: SurvivalMetrics,
}

impl DerivedRun {
    pub fn new(record: RunRecord) -> Self {
        Self { metrics: SurvivalMetrics::from_record(&record), record }
    }

    /// Value of any raw or derived column for this run.
    pub fn value(&self, column: Column) -> f64 {
        let r = &self.record;
        let m = &self.metrics;
        match column {
            Column::TotPeople             => r.tot_people,
            Column::NbOfSpectators        => r.nb_of_spectators,
            Column::NbOfWorkers           => r.nb_of_workers,
            Column::WorkersOverSpectators => r.workers_over_spectators,
            Column::LeaderFrac            => r.leader_frac,
            Column::FollowerFrac          => r.follower_frac,
            Column::TotSavedPeople        => r.tot_saved_people,
            Column::TotVictims            => r.tot_victims,
            Column::TotPanicVictims       => r.tot_panic_victims,
            Column::TotSpectatorsSaved    => r.tot_spectators_saved,
            Column::TotWorkersSaved       => r.tot_workers_saved,
            Column::TotLeadersSaved       => r.tot_leaders_saved,
            Column::TotFollowersSaved     => r.tot_followers_saved,
            Column::TotSpectatorsVictims  => r.tot_spectators_victims,
            Column::TotWorkersVictims     => r.tot_workers_victims,
            Column::TotLeadersVictims     => r.tot_leaders_victims,
            Column::TotFollowersVictims   => r.tot_followers_victims,
            Column::SurvivalRate          => m.survival_rate,
            Column::SpectatorSurvivalRate => m.spectator_survival_rate,
            Column::WorkerSurvivalRate    => m.worker_survival_rate,
            Column::LeaderSurvivalRate    => m.leader_survival_rate,
            Column::FollowerSurvivalRate  => m.follower_survival_rate,
            Column::PanicVictimRate       => m.panic_victim_rate,
        }
    }
}

// ── DerivedTable ──────────────────────────────────────────────────────────────

/// The analysis table: one [`DerivedRun`] per input row, in input order.
///
/// Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedTable {
    runs: Vec<DerivedRun>,
}

impl DerivedTable {
    #[inline]
    pub fn runs(&self) -> &[DerivedRun] {
        &self.runs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// First run, which carries the dataset's static configuration.
    pub fn first(&self) -> Option<&DerivedRun> {
        self.runs.first()
    }

    /// All values of `column`, in run order.  Undefined ratios stay `NaN`.
    pub fn column(&self, column: Column) -> Vec<f64> {
        self.runs.iter().map(|run| run.value(column)).collect()
    }
}

/// Compute the derived metrics for every record.  Row count and order are
/// preserved.
pub fn derive_metrics(records: Vec<RunRecord>) -> DerivedTable {
    let runs: Vec<DerivedRun> = records.into_iter().map(DerivedRun::new).collect();

    let undefined = runs
        .iter()
        .filter(|run| Column::DERIVED.iter().any(|&c| run.value(c).is_nan()))
        .count();
    debug!(runs = runs.len(), undefined, "derived survival metrics");

    DerivedTable { runs }
}

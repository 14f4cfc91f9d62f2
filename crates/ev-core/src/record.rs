//! The fixed results-table schema.

use std::fmt;

use serde::Deserialize;

/// Header names every results table must carry.  Order is irrelevant;
/// columns are matched by name.
pub const REQUIRED_COLUMNS: [&str; 17] = [
    "tot_people",
    "nb_of_spectators",
    "nb_of_workers",
    "workers_over_spectators",
    "leader_frac",
    "follower_frac",
    "tot_saved_people",
    "tot_victims",
    "tot_panic_victims",
    "tot_spectators_saved",
    "tot_workers_saved",
    "tot_leaders_saved",
    "tot_followers_saved",
    "tot_spectators_victims",
    "tot_workers_victims",
    "tot_leaders_victims",
    "tot_followers_victims",
];

/// One simulation run as written by the simulator.
///
/// Counts are kept as `f64`: the simulator writes them as either `500` or
/// `500.0` depending on the export path.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RunRecord {
    // Static configuration, identical on every row of a dataset.
    pub tot_people:              f64,
    pub nb_of_spectators:        f64,
    pub nb_of_workers:           f64,
    pub workers_over_spectators: f64,
    pub leader_frac:             f64,
    pub follower_frac:           f64,

    // Outcomes.
    pub tot_saved_people:        f64,
    pub tot_victims:             f64,
    pub tot_panic_victims:       f64,

    pub tot_spectators_saved:    f64,
    pub tot_workers_saved:       f64,
    pub tot_leaders_saved:       f64,
    pub tot_followers_saved:     f64,

    pub tot_spectators_victims:  f64,
    pub tot_workers_victims:     f64,
    pub tot_leaders_victims:     f64,
    pub tot_followers_victims:   f64,
}

impl RunRecord {
    /// Expected leader headcount (`nb_of_spectators * leader_frac`).
    #[inline]
    pub fn nb_of_leaders(&self) -> f64 {
        self.nb_of_spectators * self.leader_frac
    }

    /// Expected follower headcount (`nb_of_spectators * follower_frac`).
    #[inline]
    pub fn nb_of_followers(&self) -> f64 {
        self.nb_of_spectators * self.follower_frac
    }

    /// `true` when saved + victims adds up to the population.
    pub fn is_consistent(&self) -> bool {
        (self.tot_saved_people + self.tot_victims - self.tot_people).abs() < 1e-9
    }
}

/// Named handle for every raw and derived column of the analysis table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    TotPeople,
    NbOfSpectators,
    NbOfWorkers,
    WorkersOverSpectators,
    LeaderFrac,
    FollowerFrac,
    TotSavedPeople,
    TotVictims,
    TotPanicVictims,
    TotSpectatorsSaved,
    TotWorkersSaved,
    TotLeadersSaved,
    TotFollowersSaved,
    TotSpectatorsVictims,
    TotWorkersVictims,
    TotLeadersVictims,
    TotFollowersVictims,
    SurvivalRate,
    SpectatorSurvivalRate,
    WorkerSurvivalRate,
    LeaderSurvivalRate,
    FollowerSurvivalRate,
    PanicVictimRate,
}

impl Column {
    /// The six columns computed by [`crate::derive_metrics`], in
    /// [`crate::SurvivalMetrics`] field order.
    pub const DERIVED: [Column; 6] = [
        Column::SurvivalRate,
        Column::SpectatorSurvivalRate,
        Column::WorkerSurvivalRate,
        Column::LeaderSurvivalRate,
        Column::FollowerSurvivalRate,
        Column::PanicVictimRate,
    ];

    /// Header / field name as it appears in the table.
    pub fn name(self) -> &'static str {
        match self {
            Column::TotPeople             => "tot_people",
            Column::NbOfSpectators        => "nb_of_spectators",
            Column::NbOfWorkers           => "nb_of_workers",
            Column::WorkersOverSpectators => "workers_over_spectators",
            Column::LeaderFrac            => "leader_frac",
            Column::FollowerFrac          => "follower_frac",
            Column::TotSavedPeople        => "tot_saved_people",
            Column::TotVictims            => "tot_victims",
            Column::TotPanicVictims       => "tot_panic_victims",
            Column::TotSpectatorsSaved    => "tot_spectators_saved",
            Column::TotWorkersSaved       => "tot_workers_saved",
            Column::TotLeadersSaved       => "tot_leaders_saved",
            Column::TotFollowersSaved     => "tot_followers_saved",
            Column::TotSpectatorsVictims  => "tot_spectators_victims",
            Column::TotWorkersVictims     => "tot_workers_victims",
            Column::TotLeadersVictims     => "tot_leaders_victims",
            Column::TotFollowersVictims   => "tot_followers_victims",
            Column::SurvivalRate          => "survival_rate",
            Column::SpectatorSurvivalRate => "spectator_survival_rate",
            Column::WorkerSurvivalRate    => "worker_survival_rate",
            Column::LeaderSurvivalRate    => "leader_survival_rate",
            Column::FollowerSurvivalRate  => "follower_survival_rate",
            Column::PanicVictimRate       => "panic_victim_rate",
        }
    }

    /// `true` for the columns in [`Column::DERIVED`].
    pub fn is_derived(self) -> bool {
        Self::DERIVED.contains(&self)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

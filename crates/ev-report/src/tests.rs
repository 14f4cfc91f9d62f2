//! Unit tests for ev-report.

use ev_core::{DerivedTable, RunRecord, derive_metrics};

fn run(saved: f64, panic: f64) -> RunRecord {
    let victims = 500.0 - saved;
    RunRecord {
        tot_people:              500.0,
        nb_of_spectators:        400.0,
        nb_of_workers:           100.0,
        workers_over_spectators: 0.25,
        leader_frac:             0.2,
        follower_frac:           0.8,
        tot_saved_people:        saved,
        tot_victims:             victims,
        tot_panic_victims:       panic,
        tot_spectators_saved:    saved * 0.8,
        tot_workers_saved:       saved * 0.2,
        tot_leaders_saved:       saved * 0.16,
        tot_followers_saved:     saved * 0.64,
        tot_spectators_victims:  victims * 0.8,
        tot_workers_victims:     victims * 0.2,
        tot_leaders_victims:     victims * 0.16,
        tot_followers_victims:   victims * 0.64,
    }
}

fn example_table() -> DerivedTable {
    derive_metrics(vec![run(400.0, 10.0), run(450.0, 5.0), run(425.0, 9.0)])
}

#[cfg(test)]
mod build {
    use super::*;
    use crate::{Report, ReportError};

    #[test]
    fn empty_table_rejected() {
        assert_eq!(Report::build(&DerivedTable::default()), Err(ReportError::EmptyDataset));
    }

    #[test]
    fn overall_statistics() {
        let r = Report::build(&example_table()).unwrap();
        assert_eq!(r.dataset.runs, 3);
        assert!((r.survival.mean - 85.0).abs() < 1e-9);
        assert!((r.survival.std - 5.0).abs() < 1e-9);
        assert_eq!(r.survival.min, 80.0);
        assert_eq!(r.survival.max, 90.0);
        assert!((r.victims.mean - 75.0).abs() < 1e-9);
        assert!((r.saved.mean - 425.0).abs() < 1e-9);
    }

    #[test]
    fn role_rates_track_overall_when_split_is_proportional() {
        let r = Report::build(&example_table()).unwrap();
        for s in [r.roles.spectators, r.roles.workers, r.roles.leaders, r.roles.followers] {
            assert!((s.mean - 85.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_victim_run_excluded_from_panic_rate() {
        // Run 2 saves everyone: its panic rate is undefined.
        let table = derive_metrics(vec![run(400.0, 10.0), run(500.0, 0.0), run(450.0, 10.0)]);
        let r = Report::build(&table).unwrap();
        assert_eq!(r.panic_rate.count, 2);
        // 10 % and 20 %.
        assert!((r.panic_rate.mean - 15.0).abs() < 1e-9);
        // Panic victim *counts* still include the zero.
        assert_eq!(r.panic_victims.count, 3);
    }

    #[test]
    fn single_run_has_undefined_std() {
        let r = Report::build(&derive_metrics(vec![run(410.0, 3.0)])).unwrap();
        assert!((r.survival.mean - 82.0).abs() < 1e-9);
        assert!(r.survival.std.is_nan());
    }
}

#[cfg(test)]
mod text {
    use std::path::Path;

    use super::*;
    use crate::{Report, closing_banner, saved_line};

    #[test]
    fn sections_in_order() {
        let text = Report::build(&example_table()).unwrap().to_string();
        let order = [
            "EVACUATION SIMULATION ANALYSIS",
            "Dataset: 3 simulation runs",
            "Total people per simulation: 500",
            "Workers/Spectators ratio: 0.25",
            "OVERALL SURVIVAL STATISTICS",
            "Mean survival rate: 85.00% (±5.00%)",
            "Range: 80.00% - 90.00%",
            "Mean victims: 75.0 (±25.0)",
            "SURVIVAL RATES BY ROLE",
            "Spectators: 85.00% (±5.00%)",
            "PANIC ANALYSIS",
            "Panic victims as % of total victims:",
        ];
        let mut at = 0;
        for needle in order {
            let found = text[at..].find(needle).unwrap_or_else(|| panic!("missing {needle:?}"));
            at += found + needle.len();
        }
    }

    #[test]
    fn undefined_values_print_na() {
        let text = Report::build(&derive_metrics(vec![run(500.0, 0.0)])).unwrap().to_string();
        assert!(text.contains("Mean survival rate: 100.00% (±n/a%)"));
        assert!(text.contains("Panic victims as % of total victims: n/a%"));
    }

    #[test]
    fn saved_line_names_file_only() {
        let line = saved_line(Path::new("output/evacuation_analysis_overview.png"));
        assert_eq!(line, "✓ Saved: evacuation_analysis_overview.png");
        assert!(closing_banner().contains("ANALYSIS COMPLETE - FILES SAVED"));
    }
}

//! Unit tests for ev-plot.

use ev_core::{DerivedTable, RunRecord, derive_metrics};

fn run(saved: f64, panic: f64) -> RunRecord {
    let victims = 100.0 - saved;
    RunRecord {
        tot_people:              100.0,
        nb_of_spectators:        80.0,
        nb_of_workers:           20.0,
        workers_over_spectators: 0.25,
        leader_frac:             0.25,
        follower_frac:           0.75,
        tot_saved_people:        saved,
        tot_victims:             victims,
        tot_panic_victims:       panic,
        tot_spectators_saved:    saved * 0.8,
        tot_workers_saved:       saved * 0.2,
        tot_leaders_saved:       saved * 0.2,
        tot_followers_saved:     saved * 0.6,
        tot_spectators_victims:  victims * 0.8,
        tot_workers_victims:     victims * 0.2,
        tot_leaders_victims:     victims * 0.2,
        tot_followers_victims:   victims * 0.6,
    }
}

/// Survival rates 80, 95, 95, 60; panic victims vary with total victims.
fn table() -> DerivedTable {
    derive_metrics(vec![run(80.0, 4.0), run(95.0, 1.0), run(95.0, 2.0), run(60.0, 15.0)])
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
mod models {
    use super::*;
    use crate::{DetailedData, Extremes, Outcome, OverviewData, RenderError};
    use ev_stats::StatsError;

    #[test]
    fn extremes_take_first_of_ties() {
        let ext = Extremes::of(&table()).unwrap();
        assert_eq!(ext.best, 1);
        assert_eq!(ext.worst, 3);
        assert!(close(ext.best_rate, 95.0));
        assert!(close(ext.worst_rate, 60.0));
        assert_eq!(ext.best_victims.len(), 5);
        // Panic is the last category.
        assert!(close(ext.worst_victims[4], 15.0));
    }

    #[test]
    fn empty_table_rejected_by_both_figures() {
        let empty = DerivedTable::default();
        assert!(matches!(OverviewData::build(&empty), Err(RenderError::EmptyDataset)));
        assert!(matches!(DetailedData::build(&empty), Err(RenderError::EmptyDataset)));
    }

    #[test]
    fn constant_panic_victims_fail_the_trend() {
        let t = derive_metrics(vec![run(80.0, 3.0), run(90.0, 3.0), run(70.0, 3.0)]);
        match DetailedData::build(&t) {
            Err(RenderError::Stats(StatsError::ZeroVariance { .. })) => {}
            other => panic!("expected zero-variance error, got {other:?}"),
        }
    }

    #[test]
    fn overview_mirrors_columns() {
        let o = OverviewData::build(&table()).unwrap();
        assert_eq!(o.runs(), 4);
        assert_eq!(o.survival_by_run, vec![80.0, 95.0, 95.0, 60.0]);
        assert!(close(o.mean_survival, 82.5));
        assert_eq!(o.tot_people, 100.0);
        assert_eq!(o.victims_vs_saved[3], (40.0, 60.0));
        assert_eq!(o.role_rates.len(), 4);
        assert_eq!(o.victim_breakdown.len(), 5);
        assert_eq!(o.spectators_vs_workers.left.len(), 4);
    }

    #[test]
    fn detailed_trend_is_positive_for_panic() {
        let d = DetailedData::build(&table()).unwrap();
        assert!(d.panic_trend.correlation > 0.9);
        assert!(d.survival_trend.correlation < -0.99);
        assert_eq!(d.panic_trend.points.len(), 4);
        assert_eq!(d.panic_trend.x_extent(), (5.0, 40.0));
    }

    #[test]
    fn variability_scale_invariant() {
        let d = DetailedData::build(&table()).unwrap();
        // Every role rate equals the overall rate in this table.
        for cv in &d.variability[1..] {
            assert!((cv - d.variability[0]).abs() < 1e-6);
        }
        assert!(d.variability[0] > 0.0);
    }

    #[test]
    fn role_boxes_present_for_defined_roles() {
        let d = DetailedData::build(&table()).unwrap();
        assert!(d.role_boxes.iter().all(Option::is_some));
        let spectators = d.role_boxes[0].as_ref().unwrap();
        assert!(spectators.q1 <= spectators.median && spectators.median <= spectators.q3);
    }

    #[test]
    fn outcome_shares() {
        let o = Outcome { label: "Spectators", saved: 60.0, victims: 20.0 };
        assert_eq!(o.total(), 80.0);
        assert!(close(o.saved_pct(), 75.0));
        assert!(close(o.victims_pct(), 25.0));

        let none = Outcome { label: "Workers", saved: 0.0, victims: 0.0 };
        assert!(none.saved_pct().is_nan());
    }
}

#[cfg(test)]
mod layout {
    use crate::FigureContext;
    use crate::draw::{XAxis, padded, slot_label};
    use crate::palette::{run_color, viridis};
    use plotters::style::RGBColor;

    #[test]
    fn figure_pixels_follow_dpi() {
        assert_eq!(FigureContext::overview(300).pixels(), (4800, 3600));
        assert_eq!(FigureContext::detailed(300).pixels(), (4800, 3000));
        assert_eq!(FigureContext::overview(72).px(10.0), 10);
    }

    #[test]
    fn slot_labels_only_on_integers_in_range() {
        assert_eq!(slot_label(0.0, 4), Some(0));
        assert_eq!(slot_label(3.0, 4), Some(3));
        assert_eq!(slot_label(4.0, 4), None);
        assert_eq!(slot_label(-0.5, 4), None);
        assert_eq!(slot_label(1.5, 4), None);
    }

    #[test]
    fn slot_range_has_half_slot_margins() {
        assert_eq!(XAxis::slot_range(5), -0.5..4.5);
        assert_eq!(XAxis::slot_range(0), -0.5..0.5);
    }

    #[test]
    fn padded_widens_or_recentres() {
        assert_eq!(padded(0.0, 10.0, 0.1), -1.0..11.0);
        assert_eq!(padded(5.0, 5.0, 0.1), 4.0..6.0);
        assert_eq!(padded(f64::NAN, f64::NAN, 0.1), -1.0..1.0);
    }

    #[test]
    fn viridis_endpoints() {
        assert_eq!(viridis(0.0), RGBColor(0x44, 0x01, 0x54));
        assert_eq!(viridis(1.0), RGBColor(0xFD, 0xE7, 0x25));
        assert_eq!(viridis(2.0), viridis(1.0));
        assert_eq!(run_color(0, 1), viridis(0.0));
        assert_eq!(run_color(9, 10), viridis(1.0));
    }
}

#[cfg(test)]
mod output {
    use crate::{RenderError, ensure_writable};

    #[test]
    fn writable_directory_accepted_and_left_clean() {
        let dir = tempfile::tempdir().unwrap();
        ensure_writable(&dir.path().join("fig.png")).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("fig.png");
        match ensure_writable(&path) {
            Err(RenderError::OutputDir { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected output-dir error, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod render {
    use super::table;
    use crate::{
        DetailedData, FigureContext, OverviewData, RenderError, render_detailed, render_overview,
    };

    const DPI: u32 = 50;

    #[test]
    fn overview_figure_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overview.png");
        let data = OverviewData::build(&table()).unwrap();

        render_overview(&data, &FigureContext::overview(DPI), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn detailed_figure_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detailed.png");
        let data = DetailedData::build(&table()).unwrap();

        render_detailed(&data, &FigureContext::detailed(DPI), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn single_run_overview_written() {
        // Undefined std: error bars are skipped, bars still drawn.
        let t = ev_core::derive_metrics(vec![super::run(70.0, 5.0)]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overview.png");
        let data = OverviewData::build(&t).unwrap();

        render_overview(&data, &FigureContext::overview(DPI), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn missing_directory_fails_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("overview.png");
        let data = OverviewData::build(&table()).unwrap();

        match render_overview(&data, &FigureContext::overview(DPI), &path) {
            Err(RenderError::OutputDir { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected output-dir error, got {other:?}"),
        }
        assert!(!path.exists());
    }
}

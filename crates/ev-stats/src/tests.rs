//! Unit tests for ev-stats.

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
mod summary {
    use super::close;
    use crate::{Summary, coefficient_of_variation, mean, sample_std};

    #[test]
    fn three_run_example() {
        let rates = [80.0, 90.0, 85.0];
        assert!(close(mean(&rates), 85.0));
        assert!(close(sample_std(&rates), 5.0));
    }

    #[test]
    fn single_value_mean_exact_std_nan() {
        let rates = [73.25];
        assert_eq!(mean(&rates), 73.25);
        assert!(sample_std(&rates).is_nan());
    }

    #[test]
    fn nan_values_are_excluded() {
        let values = [10.0, f64::NAN, 20.0];
        assert!(close(mean(&values), 15.0));
        let s = Summary::of(&values);
        assert_eq!(s.count, 2);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 20.0);
        assert!(close(s.std, 50f64.sqrt()));
    }

    #[test]
    fn empty_summary_is_all_nan() {
        let s = Summary::of(&[f64::NAN, f64::NAN]);
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan() && s.std.is_nan() && s.min.is_nan() && s.max.is_nan());
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn cv_is_scale_invariant() {
        let values = [12.0, 15.0, 9.0, 14.0];
        let scaled: Vec<f64> = values.iter().map(|v| v * 7.5).collect();
        let a = coefficient_of_variation(&values);
        let b = coefficient_of_variation(&scaled);
        assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        assert!(close(Summary::of(&values).cv(), a));
    }

    #[test]
    fn cv_of_zero_mean_is_nan() {
        assert!(coefficient_of_variation(&[-1.0, 1.0]).is_nan());
    }
}

#[cfg(test)]
mod relation {
    use super::close;
    use crate::{LinearFit, StatsError, pearson};

    #[test]
    fn self_correlation_is_one() {
        let x = [3.0, 7.0, 1.0, 9.0, 4.0];
        assert!((pearson(&x, &x).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perfect_negative_correlation() {
        let victims = [100.0, 50.0, 75.0];
        let survival: Vec<f64> = victims.iter().map(|v| 100.0 * (500.0 - v) / 500.0).collect();
        assert!((pearson(&victims, &survival).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_column_is_undefined() {
        let x = [1.0, 2.0, 3.0];
        let c = [4.0, 4.0, 4.0];
        assert_eq!(pearson(&x, &c), Err(StatsError::ZeroVariance { what: "y" }));
        assert_eq!(pearson(&c, &x), Err(StatsError::ZeroVariance { what: "x" }));
    }

    #[test]
    fn constant_fractional_column_is_undefined() {
        // 91.4 is not exactly representable; the centred sum is not zero.
        let victims = [100.0, 50.0, 75.0];
        let rate = [91.4; 3];
        assert_eq!(pearson(&victims, &rate), Err(StatsError::ZeroVariance { what: "y" }));
        assert_eq!(LinearFit::fit(&rate, &victims), Err(StatsError::ZeroVariance { what: "x" }));
    }

    #[test]
    fn fit_recovers_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|v| 2.5 * v - 1.0).collect();
        let fit = LinearFit::fit(&x, &y).unwrap();
        assert!(close(fit.slope, 2.5));
        assert!(close(fit.intercept, -1.0));
        assert!(close(fit.predict(10.0), 24.0));
    }

    #[test]
    fn fit_of_constant_y_is_flat() {
        let fit = LinearFit::fit(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).unwrap();
        assert!(close(fit.slope, 0.0));
        assert!(close(fit.intercept, 5.0));
    }

    #[test]
    fn fit_of_constant_x_fails() {
        assert_eq!(
            LinearFit::fit(&[2.0, 2.0], &[1.0, 3.0]),
            Err(StatsError::ZeroVariance { what: "x" })
        );
    }

    #[test]
    fn nan_pairs_dropped() {
        let x = [1.0, 2.0, f64::NAN, 3.0];
        let y = [2.0, 4.0, 100.0, 6.0];
        assert!(close(pearson(&x, &y).unwrap(), 1.0));
    }

    #[test]
    fn shape_errors() {
        assert_eq!(pearson(&[1.0], &[1.0, 2.0]), Err(StatsError::LengthMismatch { x: 1, y: 2 }));
        assert_eq!(pearson(&[1.0], &[1.0]), Err(StatsError::TooFewPoints { needed: 2, got: 1 }));
    }
}

#[cfg(test)]
mod boxplot {
    use super::close;
    use crate::{BoxStats, quantile};

    #[test]
    fn quantile_interpolates() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert!(close(quantile(&v, 0.25), 1.75));
        assert!(close(quantile(&v, 0.5), 2.5));
        assert!(close(quantile(&v, 0.75), 3.25));
        assert!(close(quantile(&v, 1.0), 4.0));
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn box_with_outlier() {
        let v = [10.0, 11.0, 12.0, 13.0, 14.0, 40.0];
        let b = BoxStats::of(&v).unwrap();
        assert!(close(b.median, 12.5));
        assert!(close(b.q1, 11.25));
        assert!(close(b.q3, 13.75));
        assert_eq!(b.lower_whisker, 10.0);
        assert_eq!(b.upper_whisker, 14.0);
        assert_eq!(b.outliers, vec![40.0]);
        assert!(close(b.mean, 100.0 / 6.0));
    }

    #[test]
    fn box_ignores_nan_and_handles_single_value() {
        let b = BoxStats::of(&[f64::NAN, 55.0]).unwrap();
        assert_eq!((b.q1, b.median, b.q3), (55.0, 55.0, 55.0));
        assert_eq!((b.lower_whisker, b.upper_whisker), (55.0, 55.0));
        assert!(b.outliers.is_empty());
        assert!(BoxStats::of(&[f64::NAN]).is_none());
    }
}

#[cfg(test)]
mod extreme {
    use crate::{argmax_first, argmin_first};

    #[test]
    fn first_occurrence_wins() {
        let rates = [80.0, 95.0, 95.0, 60.0];
        assert_eq!(argmax_first(&rates), Some(1));
        assert_eq!(argmin_first(&rates), Some(3));
    }

    #[test]
    fn ties_on_minimum() {
        assert_eq!(argmin_first(&[5.0, 1.0, 1.0]), Some(1));
    }

    #[test]
    fn nan_skipped_and_empty_none() {
        assert_eq!(argmax_first(&[f64::NAN, 3.0, 2.0]), Some(1));
        assert_eq!(argmin_first(&[]), None);
        assert_eq!(argmax_first(&[f64::NAN]), None);
    }
}

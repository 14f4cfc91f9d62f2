//! Quartiles and Tukey box-plot statistics.

use crate::defined;
use crate::summary::mean;

/// The `q`-quantile (`0 ≤ q ≤ 1`) of an ascending slice, interpolating
/// linearly between the two closest ranks.  `NaN` for an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

/// Everything a box-and-whisker glyph needs.
///
/// Whiskers reach the most extreme data points within `1.5 × IQR` of the
/// box; anything beyond is listed in `outliers`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1:            f64,
    pub median:        f64,
    pub q3:            f64,
    pub mean:          f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers:      Vec<f64>,
}

impl BoxStats {
    /// `None` when `values` holds no finite value.
    pub fn of(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = defined(values).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let lo_fence = q1 - 1.5 * iqr;
        let hi_fence = q3 + 1.5 * iqr;

        // Sorted input: the first/last in-fence values are the whisker ends.
        let lower_whisker = sorted.iter().copied().find(|&v| v >= lo_fence).unwrap_or(q1);
        let upper_whisker = sorted.iter().rev().copied().find(|&v| v <= hi_fence).unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < lo_fence || v > hi_fence)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            mean: mean(&sorted),
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

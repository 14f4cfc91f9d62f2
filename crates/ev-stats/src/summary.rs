//! Mean, sample standard deviation, and range.

use crate::defined;

/// Arithmetic mean of the defined values; `NaN` if there are none.
pub fn mean(values: &[f64]) -> f64 {
    let (sum, n) = defined(values).fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Sample standard deviation (`n - 1` denominator) of the defined values;
/// `NaN` when fewer than two are defined.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = defined(values).count();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = defined(values).map(|v| (v - m) * (v - m)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// `std / mean * 100`.  Scale-free; `NaN` when either side is undefined or
/// the mean is zero.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let m = mean(values);
    if m == 0.0 {
        return f64::NAN;
    }
    sample_std(values) / m * 100.0
}

/// Descriptive statistics of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of defined values that went into the statistics.
    pub count: usize,
    pub mean:  f64,
    pub std:   f64,
    pub min:   f64,
    pub max:   f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Self {
        let (min, max) = defined(values).fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        let count = defined(values).count();
        Self {
            count,
            mean: mean(values),
            std:  sample_std(values),
            min:  if count == 0 { f64::NAN } else { min },
            max:  if count == 0 { f64::NAN } else { max },
        }
    }

    /// `std / mean * 100`, see [`coefficient_of_variation`].
    pub fn cv(&self) -> f64 {
        if self.mean == 0.0 { f64::NAN } else { self.std / self.mean * 100.0 }
    }
}

//! Pairwise relations: Pearson correlation and ordinary least squares.
//!
//! Pairs where either value is non-finite are dropped before computing.

use crate::{StatsError, StatsResult};

/// Finite `(x, y)` pairs, after checking that the slices line up.
fn pairs(x: &[f64], y: &[f64]) -> StatsResult<Vec<(f64, f64)>> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch { x: x.len(), y: y.len() });
    }
    let pts: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .collect();
    if pts.len() < 2 {
        return Err(StatsError::TooFewPoints { needed: 2, got: pts.len() });
    }
    Ok(pts)
}

/// `true` when every pair shares the same coordinate picked by `axis`.
/// Compared exactly; centred sums of a constant column need not be zero.
fn constant(pts: &[(f64, f64)], axis: impl Fn(&(f64, f64)) -> f64) -> bool {
    let first = axis(&pts[0]);
    pts.iter().all(|p| axis(p) == first)
}

/// Centered sums `(Sxx, Syy, Sxy)` and means of the pairs.
fn moments(pts: &[(f64, f64)]) -> (f64, f64, f64, f64, f64) {
    let n = pts.len() as f64;
    let mx = pts.iter().map(|p| p.0).sum::<f64>() / n;
    let my = pts.iter().map(|p| p.1).sum::<f64>() / n;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for &(a, b) in pts {
        let dx = a - mx;
        let dy = b - my;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    (mx, my, sxx, syy, sxy)
}

/// Pearson product-moment correlation of `x` and `y`.
///
/// Fails with [`StatsError::ZeroVariance`] if either column is constant.
pub fn pearson(x: &[f64], y: &[f64]) -> StatsResult<f64> {
    let pts = pairs(x, y)?;
    if constant(&pts, |p| p.0) {
        return Err(StatsError::ZeroVariance { what: "x" });
    }
    if constant(&pts, |p| p.1) {
        return Err(StatsError::ZeroVariance { what: "y" });
    }
    let (_, _, sxx, syy, sxy) = moments(&pts);
    // Rounding can push |r| a hair past 1 for perfectly linear data.
    Ok((sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0))
}

/// Degree-1 least-squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope:     f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit `y` on `x`.  Fails with [`StatsError::ZeroVariance`] when every
    /// `x` is equal.
    pub fn fit(x: &[f64], y: &[f64]) -> StatsResult<Self> {
        let pts = pairs(x, y)?;
        if constant(&pts, |p| p.0) {
            return Err(StatsError::ZeroVariance { what: "x" });
        }
        let (mx, my, sxx, _, sxy) = moments(&pts);
        let slope = sxy / sxx;
        Ok(Self { slope, intercept: my - slope * mx })
    }

    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

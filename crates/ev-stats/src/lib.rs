//! `ev-stats` — column statistics for evacuation run analysis.
//!
//! All functions take plain `&[f64]` slices.  Non-finite values (the `NaN`
//! produced for zero-denominator ratios) are skipped by every aggregate; a
//! statistic with too few defined values is itself `NaN` rather than an
//! error.  Only correlation and fitting fail, because an undefined trend line
//! cannot be drawn.
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`summary`]   | `mean`, `sample_std`, `Summary`, `coefficient_of_variation` |
//! | [`relation`]  | `pearson`, `LinearFit`                                 |
//! | [`boxplot`]   | `quantile`, `BoxStats`                                 |
//! | [`extreme`]   | `argmax_first`, `argmin_first`                         |

pub mod boxplot;
pub mod error;
pub mod extreme;
pub mod relation;
pub mod summary;

#[cfg(test)]
mod tests;

pub use boxplot::{BoxStats, quantile};
pub use error::{StatsError, StatsResult};
pub use extreme::{argmax_first, argmin_first};
pub use relation::{LinearFit, pearson};
pub use summary::{Summary, coefficient_of_variation, mean, sample_std};

/// Iterator over the finite values of `values`.
#[inline]
pub(crate) fn defined(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| v.is_finite())
}

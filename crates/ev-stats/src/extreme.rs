//! Index of the best / worst value, first occurrence wins.

/// Index of the first maximum among the finite values.
pub fn argmax_first(values: &[f64]) -> Option<usize> {
    pick_first(values, |candidate, best| candidate > best)
}

/// Index of the first minimum among the finite values.
pub fn argmin_first(values: &[f64]) -> Option<usize> {
    pick_first(values, |candidate, best| candidate < best)
}

fn pick_first(values: &[f64], better: impl Fn(f64, f64) -> bool) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        // Strict comparison keeps the earlier index on ties.
        match best {
            Some((_, b)) if !better(v, b) => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

//! Small numeric helpers over arm-indexed sequences.
//!
//! All index-returning helpers break ties in favour of the first occurrence,
//! which keeps selection deterministic for equal scores.

/// Sum of a float sequence.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Sum of the non-negative entries of a count sequence.
///
/// Negative entries mark removed arms and are skipped.
pub fn sum_counts(counts: &[i64]) -> i64 {
    counts.iter().filter(|&&c| c >= 0).sum()
}

/// Index and value of the largest element, or `None` for an empty slice.
///
/// NaN entries never win against a number.
pub fn max_index(values: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if !(v > b) => {}
            _ if v.is_nan() => {}
            _ => best = Some((i, v)),
        }
    }
    best
}

/// Index and value of the smallest element, or `None` for an empty slice.
pub fn min_index(values: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if !(v < b) => {}
            _ if v.is_nan() => {}
            _ => best = Some((i, v)),
        }
    }
    best
}

/// Returns the first index whose cumulative sum exceeds `bound`.
///
/// If rounding leaves the total at or below `bound`, the last index with a
/// positive value is returned instead, so a zero-weight slot is never picked
/// while a positive one exists. Returns `None` when no value is positive.
pub fn bounded_sum(values: &[f64], bound: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (i, &v) in values.iter().enumerate() {
        if v > 0.0 {
            cumulative += v;
            last_positive = Some(i);
            if cumulative > bound {
                return Some(i);
            }
        }
    }
    last_positive
}

/// True when every element is exactly zero (vacuously true when empty).
pub fn is_zero(values: &[f64]) -> bool {
    values.iter().all(|&v| v == 0.0)
}

//! Deterministic statistics over table columns.
//!
//! Every function is a pure slice-in/value-out computation. Statistics over
//! zero elements are reported as `empty_input`, never defaulted.

#![forbid(unsafe_code)]

use quantmd_types::{ColumnStats, MeanComparison, QuantmdError, RangeSummary};

/// Return the rows passing `predicate`, preserving their original order.
///
/// `None` is the identity filter: every row passes.
pub fn filter_rows<'a, T, F>(rows: &'a [T], predicate: Option<F>) -> Vec<&'a T>
where
    F: Fn(&T) -> bool,
{
    match predicate {
        Some(keep) => rows.iter().filter(|row| keep(row)).collect(),
        None => rows.iter().collect(),
    }
}

/// Min, max, and spread of a column in a single scan.
pub fn range(values: &[f64]) -> Result<RangeSummary, QuantmdError> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| QuantmdError::empty_input("range"))?;
    let mut min = *first;
    let mut max = *first;
    for &value in rest {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    Ok(RangeSummary {
        min,
        max,
        diff: max - min,
    })
}

/// Arithmetic mean: sum over count.
pub fn mean(values: &[f64]) -> Result<f64, QuantmdError> {
    if values.is_empty() {
        return Err(QuantmdError::empty_input("mean"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean from a column total that is already known, skipping the re-sum.
pub fn mean_from_total(total: f64, count: usize) -> Result<f64, QuantmdError> {
    if count == 0 {
        return Err(QuantmdError::empty_input("mean"));
    }
    Ok(total / count as f64)
}

/// Median of a column.
///
/// Sorts a copy, leaving the caller's slice untouched. Odd counts take the
/// middle element; even counts average the two central elements.
pub fn median(values: &[f64]) -> Result<f64, QuantmdError> {
    if values.is_empty() {
        return Err(QuantmdError::empty_input("median"));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Decide the order of two means without computing either, when possible.
///
/// If every `a[i] >= b[i]` with at least one strict inequality the mean of
/// `a` is greater, and symmetrically for `Less`. A mixed pairing, unequal
/// lengths, empty input, or an entirely equal pairing is `Indeterminate`,
/// and the caller must fall back to the exact computation. This is a
/// shortcut over monotone pairings, not a general comparison.
#[must_use]
pub fn compare_means_by_inspection(a: &[f64], b: &[f64]) -> MeanComparison {
    if a.is_empty() || a.len() != b.len() {
        return MeanComparison::Indeterminate;
    }
    let mut any_greater = false;
    let mut any_less = false;
    for (&x, &y) in a.iter().zip(b) {
        if x > y {
            any_greater = true;
        }
        if x < y {
            any_less = true;
        }
    }
    match (any_greater, any_less) {
        (true, false) => MeanComparison::Greater,
        (false, true) => MeanComparison::Less,
        _ => MeanComparison::Indeterminate,
    }
}

/// Count, range, mean, and median of one column in a single report.
pub fn column_stats(
    column: &str,
    filter: Option<String>,
    values: &[f64],
) -> Result<ColumnStats, QuantmdError> {
    Ok(ColumnStats {
        column: column.to_string(),
        filter,
        count: values.len(),
        range: range(values)?,
        mean: mean(values)?,
        median: median(values)?,
    })
}

/// Row references in ascending order of `key`. Ties keep original order.
pub fn sort_rows_by<T, F>(rows: &[T], key: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut sorted: Vec<&T> = rows.iter().collect();
    sorted.sort_by(|a, b| key(a).total_cmp(&key(b)));
    sorted
}

/// The `n` rows with the largest `key`, best first. Ties keep original order.
pub fn top_n_by<T, F>(rows: &[T], n: usize, key: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut sorted: Vec<&T> = rows.iter().collect();
    sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));
    sorted.truncate(n);
    sorted
}

/// The `n` rows with the smallest `key`, smallest first. Ties keep original
/// order.
pub fn bottom_n_by<T, F>(rows: &[T], n: usize, key: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut sorted = sort_rows_by(rows, key);
    sorted.truncate(n);
    sorted
}

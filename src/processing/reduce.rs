//! Per-group statistics.

use std::collections::BTreeMap;

use super::group::GroupedValues;

/// Arithmetic mean of `values`, or `None` for an empty slice.
///
/// Values are summed in ascending order so the result does not depend on input order.
/// If the plain sum overflows, each value is divided by the count before summing.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len() as f64;
    let sum: f64 = sorted.iter().sum();
    if sum.is_finite() {
        return Some(sum / n);
    }
    Some(sorted.iter().map(|v| v / n).sum())
}

/// Magnitude from which an `f64` carries no fractional digits worth rounding.
const ROUNDING_LIMIT: f64 = 1e15;

/// Round to two decimal places, ties away from zero (`f64::round` on `value * 100`).
///
/// The tie rule applies to the binary value: `0.125` becomes `0.13`, while `1.005` (stored as
/// `1.00499...`) becomes `1.0`. Values of magnitude `1e15` and above are returned unchanged.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Mean of every group, unrounded. Groups with no values are left out.
pub fn group_means(groups: &GroupedValues) -> BTreeMap<String, f64> {
    groups
        .iter()
        .filter_map(|(key, values)| mean(values).map(|m| (key.clone(), m)))
        .collect()
}

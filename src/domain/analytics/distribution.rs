//! Distribution builder shared by every categorical report.
//!
//! Bucket keys are strings. Keys that parse as numbers sort numerically and
//! come first; the rest follow in lexicographic order.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::foundation::Percentage;

/// One bucket of a categorical distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSlice {
    /// Bucket label.
    pub name: String,
    pub count: u64,
    pub percent: Percentage,
}

/// Decimal notation only (`"3"`, `"-1.5"`, `"2e3"`). Infinities, NaN and
/// hex literals such as `"0x10"` count as text.
fn numeric_value(key: &str) -> Option<f64> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Orders bucket keys: numeric keys ascending by value, then non-numeric
/// keys lexicographically.
///
/// Numerically equal keys ("2" and "2.0") fall back to lexicographic order
/// so the result never depends on input order.
pub fn compare_bucket_keys(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Turns a frequency mapping into sorted slices with percentages of
/// `denominator`.
pub fn build_distribution(counts: HashMap<String, u64>, denominator: u64) -> Vec<DistributionSlice> {
    let mut entries: Vec<(String, u64)> = counts.into_iter().collect();
    entries.sort_by(|a, b| compare_bucket_keys(&a.0, &b.0));

    entries
        .into_iter()
        .map(|(name, count)| DistributionSlice {
            name,
            count,
            percent: Percentage::of(count, denominator),
        })
        .collect()
}

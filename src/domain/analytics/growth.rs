//! Cumulative growth curves bucketed by calendar month (UTC).

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Entity whose creation history forms the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthSubject {
    Hackers,
    Projects,
}

impl fmt::Display for GrowthSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthSubject::Hackers => write!(f, "hackers"),
            GrowthSubject::Projects => write!(f, "projects"),
        }
    }
}

/// Running total at the end of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    /// Month key, `YYYY-MM`.
    pub date: String,
    pub total: u64,
}

/// Month bucket key for a timestamp, `YYYY-MM` in UTC.
fn month_key(at: &DateTime<Utc>) -> String {
    format!("{:04}-{:02}", at.year(), at.month())
}

/// Builds the cumulative curve. Only months with at least one creation
/// produce a point; input order does not matter.
pub fn cumulative_growth<I>(created_at: I) -> Vec<GrowthPoint>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    // Zero-padded keys sort chronologically
    let mut monthly: BTreeMap<String, u64> = BTreeMap::new();
    for at in created_at {
        *monthly.entry(month_key(&at)).or_insert(0) += 1;
    }

    let mut running = 0u64;
    monthly
        .into_iter()
        .map(|(date, count)| {
            running += count;
            GrowthPoint {
                date,
                total: running,
            }
        })
        .collect()
}

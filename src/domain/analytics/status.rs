//! Project status breakdown in fixed enumeration order.

use serde::Serialize;

use crate::domain::foundation::{Percentage, ProjectStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub key: ProjectStatus,
    pub label: String,
    pub count: u64,
    pub percent: Percentage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDistribution {
    /// Every project row, including any whose status lies outside the
    /// enumeration.
    pub total_projects: u64,
    /// Always one slice per status, in `ProjectStatus::ALL` order.
    pub statuses: Vec<StatusSlice>,
}

impl StatusDistribution {
    /// Builds the breakdown. Statuses missing from `counts` get zero.
    ///
    /// Percentages are taken against `total_projects`, so rows with an
    /// out-of-enumeration status lower every bucket's share without
    /// appearing in any bucket.
    pub fn from_counts<I>(total_projects: u64, counts: I) -> Self
    where
        I: IntoIterator<Item = (ProjectStatus, u64)>,
    {
        let counts: Vec<(ProjectStatus, u64)> = counts.into_iter().collect();
        let statuses = ProjectStatus::ALL
            .into_iter()
            .map(|status| {
                let count = counts
                    .iter()
                    .filter(|(s, _)| *s == status)
                    .map(|(_, c)| *c)
                    .sum();
                StatusSlice {
                    key: status,
                    label: status.label().to_string(),
                    count,
                    percent: Percentage::of(count, total_projects),
                }
            })
            .collect();

        Self {
            total_projects,
            statuses,
        }
    }

    /// Slice for a given status.
    pub fn slice(&self, status: ProjectStatus) -> Option<&StatusSlice> {
        self.statuses.iter().find(|s| s.key == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_and_two_approved() {
        let dist = StatusDistribution::from_counts(
            3,
            [
                (ProjectStatus::Draft, 1),
                (ProjectStatus::Pending, 0),
                (ProjectStatus::Approved, 2),
            ],
        );

        let draft = dist.slice(ProjectStatus::Draft).unwrap();
        assert_eq!(draft.count, 1);
        assert!((draft.percent.value() - 33.333_333).abs() < 1e-4);

        let pending = dist.slice(ProjectStatus::Pending).unwrap();
        assert_eq!(pending.count, 0);
        assert_eq!(pending.percent, Percentage::ZERO);

        let approved = dist.slice(ProjectStatus::Approved).unwrap();
        assert_eq!(approved.count, 2);
        assert!((approved.percent.value() - 66.666_666).abs() < 1e-4);
    }

    #[test]
    fn order_is_fixed_regardless_of_frequency() {
        let dist = StatusDistribution::from_counts(
            10,
            [(ProjectStatus::Approved, 9), (ProjectStatus::Draft, 1)],
        );
        let keys: Vec<_> = dist.statuses.iter().map(|s| s.key).collect();
        assert_eq!(keys, ProjectStatus::ALL.to_vec());
    }

    #[test]
    fn unknown_statuses_count_in_total_only() {
        let dist = StatusDistribution::from_counts(
            4,
            [(ProjectStatus::Draft, 1), (ProjectStatus::Approved, 1)],
        );
        assert_eq!(dist.total_projects, 4);
        let bucketed: u64 = dist.statuses.iter().map(|s| s.count).sum();
        assert_eq!(bucketed, 2);
        assert!((dist.slice(ProjectStatus::Draft).unwrap().percent.value() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn empty_population() {
        let dist = StatusDistribution::from_counts(0, Vec::new());
        assert_eq!(dist.statuses.len(), 3);
        assert!(dist.statuses.iter().all(|s| s.count == 0 && s.percent == Percentage::ZERO));
    }

    #[test]
    fn serializes_keys_as_db_values() {
        let dist = StatusDistribution::from_counts(1, [(ProjectStatus::Pending, 1)]);
        let json = serde_json::to_value(&dist).unwrap();
        assert_eq!(json["totalProjects"], 1);
        assert_eq!(json["statuses"][1]["key"], "PENDING");
        assert_eq!(json["statuses"][1]["label"], "Pending");
    }
}

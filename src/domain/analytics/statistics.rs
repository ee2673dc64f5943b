//! Project statistics: team size and hack type distributions.

use serde::Serialize;
use std::collections::HashMap;

use super::distribution::{build_distribution, DistributionSlice};
use crate::domain::foundation::HackType;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatistics {
    pub total_projects: u64,
    /// Hackers per project: the lead plus every participant.
    pub team_size: Vec<DistributionSlice>,
    pub hack_type: Vec<DistributionSlice>,
}

impl ProjectStatistics {
    /// Builds both distributions.
    ///
    /// `participant_counts` holds one entry per project. `type_counts`
    /// holds the row count for each hack type; its sum is the hack type
    /// denominator since every project carries a type.
    pub fn from_counts<I>(participant_counts: &[u64], type_counts: I) -> Self
    where
        I: IntoIterator<Item = (HackType, u64)>,
    {
        let total_projects = participant_counts.len() as u64;
        Self {
            total_projects,
            team_size: team_size_distribution(participant_counts),
            hack_type: hack_type_distribution(type_counts),
        }
    }
}

/// Team size buckets keyed by `1 + participants`, ascending numerically.
pub fn team_size_distribution(participant_counts: &[u64]) -> Vec<DistributionSlice> {
    let mut sizes: HashMap<String, u64> = HashMap::new();
    for participants in participant_counts {
        *sizes.entry((1 + participants).to_string()).or_insert(0) += 1;
    }
    build_distribution(sizes, participant_counts.len() as u64)
}

/// Regular/Research split. Both labels always appear, even at zero.
pub fn hack_type_distribution<I>(type_counts: I) -> Vec<DistributionSlice>
where
    I: IntoIterator<Item = (HackType, u64)>,
{
    let mut by_label: HashMap<String, u64> = HackType::ALL
        .into_iter()
        .map(|kind| (kind.label().to_string(), 0))
        .collect();
    for (kind, count) in type_counts {
        *by_label.entry(kind.label().to_string()).or_insert(0) += count;
    }
    let typed_total = by_label.values().sum();
    build_distribution(by_label, typed_total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;

    #[test]
    fn team_size_counts_the_lead() {
        let slices = team_size_distribution(&[0, 0, 1, 3]);
        let pairs: Vec<_> = slices.iter().map(|s| (s.name.as_str(), s.count)).collect();
        assert_eq!(pairs, vec![("1", 2), ("2", 1), ("4", 1)]);
        assert!((slices[0].percent.value() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn team_size_sorts_numerically_past_nine() {
        let slices = team_size_distribution(&[9, 1]);
        let names: Vec<_> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["2", "10"]);
    }

    #[test]
    fn hack_type_uses_typed_total() {
        let slices = hack_type_distribution([(HackType::Regular, 3), (HackType::Research, 1)]);
        assert_eq!(slices[0].name, "Regular");
        assert!((slices[0].percent.value() - 75.0).abs() < 1e-9);
        assert_eq!(slices[1].name, "Research");
        assert!((slices[1].percent.value() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn hack_type_keeps_empty_labels() {
        let slices = hack_type_distribution(Vec::new());
        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| s.count == 0 && s.percent == Percentage::ZERO));
    }

    #[test]
    fn statistics_total_is_project_count() {
        let stats = ProjectStatistics::from_counts(&[0, 2], [(HackType::Regular, 2)]);
        assert_eq!(stats.total_projects, 2);
        let team_total: u64 = stats.team_size.iter().map(|s| s.count).sum();
        assert_eq!(team_total, 2);
    }

    #[test]
    fn empty_store() {
        let stats = ProjectStatistics::from_counts(&[], Vec::new());
        assert_eq!(stats.total_projects, 0);
        assert!(stats.team_size.is_empty());
    }
}

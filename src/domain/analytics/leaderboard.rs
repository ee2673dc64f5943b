//! Leaderboards of hackers ranked by how many projects they lead or joined.
//!
//! # Algorithm
//!
//! 1. The store groups relation rows by hacker and counts them.
//! 2. Groups are sorted by count, descending, with a stable sort.
//! 3. The first `limit` groups are resolved to display identities.
//! 4. Independently, every group feeds a histogram of count -> hackers.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::domain::foundation::HackerId;

/// Name shown for a grouped hacker id with no matching hacker row.
pub const UNKNOWN_HACKER_NAME: &str = "Unknown";

/// Default number of entries in a leaderboard's top list.
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 20;

/// Relation that supplies the grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HackerRelation {
    /// Hacker is the launch lead of the project.
    Lead,
    /// Hacker joined the project without leading it.
    Participant,
}

impl fmt::Display for HackerRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HackerRelation::Lead => write!(f, "lead"),
            HackerRelation::Participant => write!(f, "participant"),
        }
    }
}

/// Row count for one hacker within a relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HackerGroup {
    pub hacker_id: HackerId,
    pub count: u64,
}

/// Display attributes of a hacker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HackerIdentity {
    pub id: HackerId,
    pub name: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub hacker_id: HackerId,
    pub name: String,
    pub username: Option<String>,
    pub count: u64,
}

/// Histogram bin: `hackers` hackers reached exactly `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountBin {
    pub count: u64,
    pub hackers: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    /// Sorted by count descending; at most `limit` entries.
    pub top: Vec<LeaderboardEntry>,
    /// Ascending by count, over all groups.
    pub distribution: Vec<CountBin>,
}

/// Converts a caller-supplied limit; zero or negative means an empty top list.
pub fn effective_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

/// Highest-count groups, ties in input order.
pub fn top_groups(groups: &[HackerGroup], limit: i64) -> Vec<HackerGroup> {
    let mut ranked = groups.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(effective_limit(limit));
    ranked
}

/// Count histogram over every group with a positive count.
pub fn count_histogram(groups: &[HackerGroup]) -> Vec<CountBin> {
    let mut bins: BTreeMap<u64, u64> = BTreeMap::new();
    for group in groups.iter().filter(|g| g.count > 0) {
        *bins.entry(group.count).or_insert(0) += 1;
    }
    bins.into_iter()
        .map(|(count, hackers)| CountBin { count, hackers })
        .collect()
}

/// Attaches display attributes to ranked groups. Unresolved ids get the
/// placeholder name and no username.
pub fn resolve_entries(top: Vec<HackerGroup>, identities: Vec<HackerIdentity>) -> Vec<LeaderboardEntry> {
    let by_id: HashMap<HackerId, HackerIdentity> = identities
        .into_iter()
        .map(|identity| (identity.id.clone(), identity))
        .collect();

    top.into_iter()
        .map(|group| match by_id.get(&group.hacker_id) {
            Some(identity) => LeaderboardEntry {
                hacker_id: group.hacker_id,
                name: identity.name.clone(),
                username: identity.username.clone(),
                count: group.count,
            },
            None => LeaderboardEntry {
                hacker_id: group.hacker_id,
                name: UNKNOWN_HACKER_NAME.to_string(),
                username: None,
                count: group.count,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn group(id: &str, count: u64) -> HackerGroup {
        HackerGroup {
            hacker_id: HackerId::new(id).unwrap(),
            count,
        }
    }

    fn identity(id: &str, name: &str, username: Option<&str>) -> HackerIdentity {
        HackerIdentity {
            id: HackerId::new(id).unwrap(),
            name: name.to_string(),
            username: username.map(String::from),
        }
    }

    #[test]
    fn ranks_descending_with_stable_ties() {
        let groups = vec![group("a", 1), group("b", 3), group("c", 1), group("d", 3)];
        let top = top_groups(&groups, 20);
        let ids: Vec<_> = top.iter().map(|g| g.hacker_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn truncates_to_limit() {
        let groups = vec![group("a", 1), group("b", 2), group("c", 3)];
        assert_eq!(top_groups(&groups, 2).len(), 2);
    }

    #[test]
    fn non_positive_limit_gives_empty_top() {
        let groups = vec![group("a", 1)];
        assert!(top_groups(&groups, 0).is_empty());
        assert!(top_groups(&groups, -5).is_empty());
    }

    #[test]
    fn histogram_covers_all_groups() {
        let groups = vec![group("a", 1), group("b", 3), group("c", 1), group("d", 0)];
        assert_eq!(
            count_histogram(&groups),
            vec![
                CountBin { count: 1, hackers: 2 },
                CountBin { count: 3, hackers: 1 },
            ]
        );
    }

    #[test]
    fn resolves_known_and_unknown_hackers() {
        let top = vec![group("a", 2), group("ghost", 1)];
        let entries = resolve_entries(top, vec![identity("a", "Ada", Some("ada"))]);

        assert_eq!(entries[0].name, "Ada");
        assert_eq!(entries[0].username.as_deref(), Some("ada"));
        assert_eq!(entries[1].name, UNKNOWN_HACKER_NAME);
        assert_eq!(entries[1].username, None);
        assert_eq!(entries[1].count, 1);
    }

    #[test]
    fn entry_serializes_camel_case() {
        let entries = resolve_entries(vec![group("a", 2)], Vec::new());
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["hackerId"], "a");
        assert!(json["username"].is_null());
    }

    proptest! {
        #[test]
        fn leaderboard_invariants(counts in prop::collection::vec(1u64..20, 0..60), limit in -3i64..30) {
            let groups: Vec<_> = counts
                .iter()
                .enumerate()
                .map(|(i, c)| group(&format!("h{}", i), *c))
                .collect();

            let top = top_groups(&groups, limit);
            prop_assert_eq!(top.len(), effective_limit(limit).min(groups.len()));
            for pair in top.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }

            let histogram = count_histogram(&groups);
            prop_assert!(histogram.iter().all(|bin| bin.count > 0));
            let weighted: u64 = histogram.iter().map(|bin| bin.count * bin.hackers).sum();
            prop_assert_eq!(weighted, counts.iter().sum::<u64>());
        }
    }
}

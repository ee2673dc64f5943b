//! GetLeaderboardHandler - Prolific leads or participants.
//!
//! Grouping runs first; identities are fetched only for the ids that made
//! the top list, so the two store calls are sequenced.

use std::sync::Arc;

use crate::domain::analytics::{
    count_histogram, resolve_entries, top_groups, HackerRelation, Leaderboard,
    DEFAULT_LEADERBOARD_LIMIT,
};
use crate::domain::foundation::HackerId;
use crate::ports::{AnalyticsError, HackathonReader};

/// Query for a leaderboard.
#[derive(Debug, Clone)]
pub struct GetLeaderboardQuery {
    pub relation: HackerRelation,
    /// Size of the top list; zero or negative yields an empty list.
    pub limit: i64,
}

impl GetLeaderboardQuery {
    /// Query with the default limit.
    pub fn new(relation: HackerRelation) -> Self {
        Self {
            relation,
            limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

pub type GetLeaderboardResult = Leaderboard;

pub struct GetLeaderboardHandler {
    reader: Arc<dyn HackathonReader>,
}

impl GetLeaderboardHandler {
    pub fn new(reader: Arc<dyn HackathonReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetLeaderboardQuery,
    ) -> Result<GetLeaderboardResult, AnalyticsError> {
        let groups = self.reader.group_by_hacker(query.relation).await?;
        let top = top_groups(&groups, query.limit);

        let identities = if top.is_empty() {
            Vec::new()
        } else {
            let ids: Vec<HackerId> = top.iter().map(|g| g.hacker_id.clone()).collect();
            self.reader.find_hackers(&ids).await?
        };

        Ok(Leaderboard {
            top: resolve_entries(top, identities),
            distribution: count_histogram(&groups),
        })
    }
}

//! GetReportViewHandler - Computes exactly one named report view.
//!
//! Dispatches to the per-report handlers. Only the requested view's
//! queries are issued.

use std::sync::Arc;

use super::{
    GetGrowthHandler, GetGrowthQuery, GetHackerCompletenessHandler, GetHackerCompletenessQuery,
    GetLeaderboardHandler, GetLeaderboardQuery, GetProjectCompletenessHandler,
    GetProjectCompletenessQuery, GetProjectStatisticsHandler, GetProjectStatisticsQuery,
    GetProjectStatusesHandler, GetProjectStatusesQuery, GetProjectTagsHandler, GetProjectTagsQuery,
};
use crate::domain::analytics::{
    GrowthSubject, HackerRelation, ProjectOverview, ReportPayload, ReportView,
    DEFAULT_LEADERBOARD_LIMIT,
};
use crate::ports::{AnalyticsError, HackathonReader};

/// Query for a single view.
#[derive(Debug, Clone, Default)]
pub struct GetReportViewQuery {
    pub view: ReportView,
    /// Leaderboard size; ignored by views without a top list.
    pub limit: Option<i64>,
}

impl GetReportViewQuery {
    pub fn new(view: ReportView) -> Self {
        Self { view, limit: None }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

pub type GetReportViewResult = ReportPayload;

pub struct GetReportViewHandler {
    reader: Arc<dyn HackathonReader>,
    default_limit: i64,
}

impl GetReportViewHandler {
    pub fn new(reader: Arc<dyn HackathonReader>) -> Self {
        Self {
            reader,
            default_limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }

    /// Overrides the leaderboard size used when a query carries no limit.
    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    pub async fn handle(&self, query: GetReportViewQuery) -> Result<GetReportViewResult, AnalyticsError> {
        let reader = self.reader.clone();
        let limit = query.limit.unwrap_or(self.default_limit);

        let payload = match query.view {
            ReportView::HackerCompleteness => ReportPayload::HackerCompleteness(
                GetHackerCompletenessHandler::new(reader)
                    .handle(GetHackerCompletenessQuery)
                    .await?,
            ),
            ReportView::HackerGrowth => ReportPayload::HackerGrowth(
                GetGrowthHandler::new(reader)
                    .handle(GetGrowthQuery {
                        subject: GrowthSubject::Hackers,
                    })
                    .await?,
            ),
            ReportView::ProjectGrowth => ReportPayload::ProjectGrowth(
                GetGrowthHandler::new(reader)
                    .handle(GetGrowthQuery {
                        subject: GrowthSubject::Projects,
                    })
                    .await?,
            ),
            ReportView::ProjectStatuses => ReportPayload::ProjectStatuses(
                GetProjectStatusesHandler::new(reader)
                    .handle(GetProjectStatusesQuery)
                    .await?,
            ),
            ReportView::ProjectCompleteness => ReportPayload::ProjectCompleteness(
                GetProjectCompletenessHandler::new(reader)
                    .handle(GetProjectCompletenessQuery)
                    .await?,
            ),
            ReportView::ProjectStatistics => {
                // Statistics first, then tags; a failure in either fails the view.
                let statistics = GetProjectStatisticsHandler::new(reader.clone())
                    .handle(GetProjectStatisticsQuery)
                    .await?;
                let tags = GetProjectTagsHandler::new(reader)
                    .handle(GetProjectTagsQuery)
                    .await?;
                ReportPayload::ProjectStatistics(ProjectOverview { statistics, tags })
            }
            ReportView::ProjectTags => ReportPayload::ProjectTags(
                GetProjectTagsHandler::new(reader)
                    .handle(GetProjectTagsQuery)
                    .await?,
            ),
            ReportView::ProlificParticipants => ReportPayload::ProlificParticipants(
                GetLeaderboardHandler::new(reader)
                    .handle(GetLeaderboardQuery::new(HackerRelation::Participant).with_limit(limit))
                    .await?,
            ),
            ReportView::ProlificLeads => ReportPayload::ProlificLeads(
                GetLeaderboardHandler::new(reader)
                    .handle(GetLeaderboardQuery::new(HackerRelation::Lead).with_limit(limit))
                    .await?,
            ),
        };

        Ok(payload)
    }
}

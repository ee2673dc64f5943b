//! Analytics query handlers.
//!
//! Read-only handlers that turn store counts into report views. Each
//! handler owns one report; `GetReportViewHandler` dispatches by view key.

mod get_growth;
mod get_hacker_completeness;
mod get_leaderboard;
mod get_project_completeness;
mod get_project_statistics;
mod get_project_statuses;
mod get_project_tags;
mod get_report_view;

#[cfg(test)]
mod test_support;

pub use get_growth::{GetGrowthHandler, GetGrowthQuery, GetGrowthResult};
pub use get_hacker_completeness::{
    GetHackerCompletenessHandler, GetHackerCompletenessQuery, GetHackerCompletenessResult,
};
pub use get_leaderboard::{GetLeaderboardHandler, GetLeaderboardQuery, GetLeaderboardResult};
pub use get_project_completeness::{
    GetProjectCompletenessHandler, GetProjectCompletenessQuery, GetProjectCompletenessResult,
};
pub use get_project_statistics::{
    GetProjectStatisticsHandler, GetProjectStatisticsQuery, GetProjectStatisticsResult,
};
pub use get_project_statuses::{
    GetProjectStatusesHandler, GetProjectStatusesQuery, GetProjectStatusesResult,
};
pub use get_project_tags::{GetProjectTagsHandler, GetProjectTagsQuery, GetProjectTagsResult};
pub use get_report_view::{GetReportViewHandler, GetReportViewQuery, GetReportViewResult};

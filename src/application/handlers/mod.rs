//! Application handlers.
//!
//! Query handlers that orchestrate analytics reads through the ports.

pub mod analytics;

pub use analytics::{
    GetGrowthHandler, GetGrowthQuery, GetGrowthResult, GetHackerCompletenessHandler,
    GetHackerCompletenessQuery, GetHackerCompletenessResult, GetLeaderboardHandler,
    GetLeaderboardQuery, GetLeaderboardResult, GetProjectCompletenessHandler,
    GetProjectCompletenessQuery, GetProjectCompletenessResult, GetProjectStatisticsHandler,
    GetProjectStatisticsQuery, GetProjectStatisticsResult, GetProjectStatusesHandler,
    GetProjectStatusesQuery, GetProjectStatusesResult, GetProjectTagsHandler, GetProjectTagsQuery,
    GetProjectTagsResult, GetReportViewHandler, GetReportViewQuery, GetReportViewResult,
};

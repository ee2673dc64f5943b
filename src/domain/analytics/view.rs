//! Named report views. A caller asks for exactly one view per request.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{CompletenessReport, GrowthPoint, Leaderboard, ProjectStatistics, ProjectTags, StatusDistribution};
use crate::domain::foundation::ValidationError;

/// Closed set of report views, keyed by kebab-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportView {
    HackerCompleteness,
    HackerGrowth,
    ProjectGrowth,
    ProjectStatuses,
    ProjectCompleteness,
    #[default]
    ProjectStatistics,
    ProjectTags,
    ProlificParticipants,
    ProlificLeads,
}

impl ReportView {
    /// Views in navigation order.
    pub const ALL: [ReportView; 9] = [
        ReportView::ProjectStatistics,
        ReportView::ProlificLeads,
        ReportView::ProlificParticipants,
        ReportView::HackerCompleteness,
        ReportView::HackerGrowth,
        ReportView::ProjectGrowth,
        ReportView::ProjectStatuses,
        ReportView::ProjectCompleteness,
        ReportView::ProjectTags,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ReportView::HackerCompleteness => "hacker-completeness",
            ReportView::HackerGrowth => "hacker-growth",
            ReportView::ProjectGrowth => "project-growth",
            ReportView::ProjectStatuses => "project-statuses",
            ReportView::ProjectCompleteness => "project-completeness",
            ReportView::ProjectStatistics => "project-statistics",
            ReportView::ProjectTags => "project-tags",
            ReportView::ProlificParticipants => "prolific-participants",
            ReportView::ProlificLeads => "prolific-leads",
        }
    }
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ReportView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportView::ALL
            .into_iter()
            .find(|view| view.key() == s)
            .ok_or_else(|| ValidationError::unknown_variant("report view", s))
    }
}

/// Statistics and tag frequencies, served together as the default view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    pub statistics: ProjectStatistics,
    pub tags: ProjectTags,
}

/// Output of one view, tagged with its key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "kebab-case")]
pub enum ReportPayload {
    HackerCompleteness(CompletenessReport),
    HackerGrowth(Vec<GrowthPoint>),
    ProjectGrowth(Vec<GrowthPoint>),
    ProjectStatuses(StatusDistribution),
    ProjectCompleteness(CompletenessReport),
    ProjectStatistics(ProjectOverview),
    ProjectTags(ProjectTags),
    ProlificParticipants(Leaderboard),
    ProlificLeads(Leaderboard),
}

impl ReportPayload {
    /// The view this payload answers.
    pub fn view(&self) -> ReportView {
        match self {
            ReportPayload::HackerCompleteness(_) => ReportView::HackerCompleteness,
            ReportPayload::HackerGrowth(_) => ReportView::HackerGrowth,
            ReportPayload::ProjectGrowth(_) => ReportView::ProjectGrowth,
            ReportPayload::ProjectStatuses(_) => ReportView::ProjectStatuses,
            ReportPayload::ProjectCompleteness(_) => ReportView::ProjectCompleteness,
            ReportPayload::ProjectStatistics(_) => ReportView::ProjectStatistics,
            ReportPayload::ProjectTags(_) => ReportView::ProjectTags,
            ReportPayload::ProlificParticipants(_) => ReportView::ProlificParticipants,
            ReportPayload::ProlificLeads(_) => ReportView::ProlificLeads,
        }
    }
}

//! GetProjectStatisticsHandler - Team size and hack type distributions.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::analytics::ProjectStatistics;
use crate::domain::foundation::HackType;
use crate::ports::{AnalyticsError, HackathonReader, ProjectFilter};

/// Query for project statistics.
#[derive(Debug, Clone)]
pub struct GetProjectStatisticsQuery;

pub type GetProjectStatisticsResult = ProjectStatistics;

pub struct GetProjectStatisticsHandler {
    reader: Arc<dyn HackathonReader>,
}

impl GetProjectStatisticsHandler {
    pub fn new(reader: Arc<dyn HackathonReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: GetProjectStatisticsQuery,
    ) -> Result<GetProjectStatisticsResult, AnalyticsError> {
        let reader = self.reader.as_ref();

        let (participants, type_counts) = futures::try_join!(
            reader.participant_counts(),
            try_join_all(
                HackType::ALL
                    .into_iter()
                    .map(|kind| reader.count_projects(ProjectFilter::with_hack_type(kind))),
            ),
        )?;

        Ok(ProjectStatistics::from_counts(
            &participants,
            HackType::ALL.into_iter().zip(type_counts),
        ))
    }
}

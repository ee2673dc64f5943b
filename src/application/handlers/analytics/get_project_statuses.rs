//! GetProjectStatusesHandler - Count and share of each project status.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::analytics::StatusDistribution;
use crate::domain::foundation::ProjectStatus;
use crate::ports::{AnalyticsError, HackathonReader, ProjectFilter};

/// Query for the project status breakdown.
#[derive(Debug, Clone)]
pub struct GetProjectStatusesQuery;

pub type GetProjectStatusesResult = StatusDistribution;

pub struct GetProjectStatusesHandler {
    reader: Arc<dyn HackathonReader>,
}

impl GetProjectStatusesHandler {
    pub fn new(reader: Arc<dyn HackathonReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: GetProjectStatusesQuery,
    ) -> Result<GetProjectStatusesResult, AnalyticsError> {
        let reader = self.reader.as_ref();

        let (total, counts) = futures::try_join!(
            reader.count_projects(ProjectFilter::all()),
            try_join_all(
                ProjectStatus::ALL
                    .into_iter()
                    .map(|status| reader.count_projects(ProjectFilter::with_status(status))),
            ),
        )?;

        Ok(StatusDistribution::from_counts(
            total,
            ProjectStatus::ALL.into_iter().zip(counts),
        ))
    }
}

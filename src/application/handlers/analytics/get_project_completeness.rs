//! GetProjectCompletenessHandler - Field completeness of approved projects.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::analytics::{CompletenessReport, ProjectField};
use crate::domain::foundation::ProjectStatus;
use crate::ports::{AnalyticsError, HackathonReader, ProjectFilter};

/// Query for approved-project completeness.
#[derive(Debug, Clone)]
pub struct GetProjectCompletenessQuery;

pub type GetProjectCompletenessResult = CompletenessReport;

/// Only APPROVED projects form the population, for the denominator and
/// every field count alike.
pub struct GetProjectCompletenessHandler {
    reader: Arc<dyn HackathonReader>,
}

impl GetProjectCompletenessHandler {
    pub fn new(reader: Arc<dyn HackathonReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: GetProjectCompletenessQuery,
    ) -> Result<GetProjectCompletenessResult, AnalyticsError> {
        let reader = self.reader.as_ref();
        let approved = ProjectFilter::with_status(ProjectStatus::Approved);

        let (total, present) = futures::try_join!(
            reader.count_projects(approved),
            try_join_all(
                ProjectField::ALL
                    .into_iter()
                    .map(|field| reader.count_projects(approved.and_present(field))),
            ),
        )?;

        Ok(CompletenessReport::from_counts(
            total,
            ProjectField::ALL.into_iter().zip(present),
        ))
    }
}

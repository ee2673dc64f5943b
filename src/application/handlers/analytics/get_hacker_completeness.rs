//! GetHackerCompletenessHandler - Profile completeness across all hackers.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::analytics::{CompletenessReport, HackerField};
use crate::ports::{AnalyticsError, HackathonReader, HackerFilter};

/// Query for hacker profile completeness.
#[derive(Debug, Clone)]
pub struct GetHackerCompletenessQuery;

pub type GetHackerCompletenessResult = CompletenessReport;

/// Counts the population and each field's present rows concurrently.
pub struct GetHackerCompletenessHandler {
    reader: Arc<dyn HackathonReader>,
}

impl GetHackerCompletenessHandler {
    pub fn new(reader: Arc<dyn HackathonReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: GetHackerCompletenessQuery,
    ) -> Result<GetHackerCompletenessResult, AnalyticsError> {
        let reader = self.reader.as_ref();

        let (total, present) = futures::try_join!(
            reader.count_hackers(HackerFilter::all()),
            try_join_all(
                HackerField::ALL
                    .into_iter()
                    .map(|field| reader.count_hackers(HackerFilter::with_present(field))),
            ),
        )?;

        Ok(CompletenessReport::from_counts(
            total,
            HackerField::ALL.into_iter().zip(present),
        ))
    }
}

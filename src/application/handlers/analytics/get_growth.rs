//! GetGrowthHandler - Cumulative monthly growth of hackers or projects.

use std::sync::Arc;

use crate::domain::analytics::{cumulative_growth, GrowthPoint, GrowthSubject};
use crate::ports::{AnalyticsError, HackathonReader};

/// Query for a growth curve.
#[derive(Debug, Clone)]
pub struct GetGrowthQuery {
    pub subject: GrowthSubject,
}

pub type GetGrowthResult = Vec<GrowthPoint>;

pub struct GetGrowthHandler {
    reader: Arc<dyn HackathonReader>,
}

impl GetGrowthHandler {
    pub fn new(reader: Arc<dyn HackathonReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetGrowthQuery) -> Result<GetGrowthResult, AnalyticsError> {
        let created = self.reader.creation_times(query.subject).await?;
        Ok(cumulative_growth(created))
    }
}

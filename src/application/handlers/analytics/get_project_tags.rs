//! GetProjectTagsHandler - Usage frequency of tech and domain tags.

use std::sync::Arc;

use crate::domain::analytics::{tag_frequencies, ProjectTags, TagVocabulary};
use crate::ports::{AnalyticsError, HackathonReader};

/// Query for tag frequencies.
#[derive(Debug, Clone)]
pub struct GetProjectTagsQuery;

pub type GetProjectTagsResult = ProjectTags;

pub struct GetProjectTagsHandler {
    reader: Arc<dyn HackathonReader>,
}

impl GetProjectTagsHandler {
    pub fn new(reader: Arc<dyn HackathonReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: GetProjectTagsQuery,
    ) -> Result<GetProjectTagsResult, AnalyticsError> {
        let reader = self.reader.as_ref();

        let (tech, domain) = futures::try_join!(
            reader.tag_usage(TagVocabulary::Tech),
            reader.tag_usage(TagVocabulary::Domain),
        )?;

        Ok(ProjectTags {
            tech: tag_frequencies(tech),
            domain: tag_frequencies(domain),
        })
    }
}

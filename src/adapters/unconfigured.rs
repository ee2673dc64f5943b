//! Reader used when no database is configured.
//!
//! The service still starts and serves health checks; every report fails
//! with `AnalyticsError::NotConfigured` so callers can tell a missing
//! connection string apart from a failed query.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::analytics::{
    GrowthSubject, HackerGroup, HackerIdentity, HackerRelation, TagUsage, TagVocabulary,
};
use crate::domain::foundation::HackerId;
use crate::ports::{AnalyticsError, HackathonReader, HackerFilter, ProjectFilter};

#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredReader;

#[async_trait]
impl HackathonReader for UnconfiguredReader {
    async fn count_hackers(&self, _filter: HackerFilter) -> Result<u64, AnalyticsError> {
        Err(AnalyticsError::NotConfigured)
    }

    async fn count_projects(&self, _filter: ProjectFilter) -> Result<u64, AnalyticsError> {
        Err(AnalyticsError::NotConfigured)
    }

    async fn creation_times(
        &self,
        _subject: GrowthSubject,
    ) -> Result<Vec<DateTime<Utc>>, AnalyticsError> {
        Err(AnalyticsError::NotConfigured)
    }

    async fn participant_counts(&self) -> Result<Vec<u64>, AnalyticsError> {
        Err(AnalyticsError::NotConfigured)
    }

    async fn tag_usage(&self, _vocabulary: TagVocabulary) -> Result<Vec<TagUsage>, AnalyticsError> {
        Err(AnalyticsError::NotConfigured)
    }

    async fn group_by_hacker(
        &self,
        _relation: HackerRelation,
    ) -> Result<Vec<HackerGroup>, AnalyticsError> {
        Err(AnalyticsError::NotConfigured)
    }

    async fn find_hackers(&self, _ids: &[HackerId]) -> Result<Vec<HackerIdentity>, AnalyticsError> {
        Err(AnalyticsError::NotConfigured)
    }
}

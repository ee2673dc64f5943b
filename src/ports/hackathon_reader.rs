//! Hackathon reader port (read side queries).
//!
//! Defines the read-only contract the analytics handlers use to reach the
//! community store. Every method is a single independent query so handlers
//! can fan them out concurrently.
//!
//! # Design
//!
//! - **Read-only**: no method mutates the store
//! - **Count-first**: relation counts come back aggregated, never as rows
//! - **Injected**: handlers hold an `Arc<dyn HackathonReader>` whose lifetime
//!   the caller controls, one pool serving many report calls

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::analytics::{
    GrowthSubject, HackerField, HackerGroup, HackerIdentity, HackerRelation, ProjectField,
    TagUsage, TagVocabulary,
};
use crate::domain::foundation::{HackType, HackerId, ProjectStatus};

/// Filter for hacker counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HackerFilter {
    /// Only count hackers with this field present (non-null, non-empty).
    pub present: Option<HackerField>,
}

impl HackerFilter {
    /// Every hacker.
    pub fn all() -> Self {
        Self::default()
    }

    /// Hackers with `field` present.
    pub fn with_present(field: HackerField) -> Self {
        Self {
            present: Some(field),
        }
    }
}

/// Filter for project counts. Unset parts do not restrict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub hack_type: Option<HackType>,
    /// Only count projects with this field present (non-null, non-empty).
    pub present: Option<ProjectField>,
}

impl ProjectFilter {
    /// Every project.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_hack_type(hack_type: HackType) -> Self {
        Self {
            hack_type: Some(hack_type),
            ..Self::default()
        }
    }

    /// Adds a presence requirement to this filter.
    pub fn and_present(mut self, field: ProjectField) -> Self {
        self.present = Some(field);
        self
    }
}

/// Reader port for community analytics queries.
#[async_trait]
pub trait HackathonReader: Send + Sync {
    /// Counts hackers matching the filter.
    async fn count_hackers(&self, filter: HackerFilter) -> Result<u64, AnalyticsError>;

    /// Counts projects matching the filter.
    async fn count_projects(&self, filter: ProjectFilter) -> Result<u64, AnalyticsError>;

    /// Creation timestamps of every hacker or project, oldest first.
    async fn creation_times(&self, subject: GrowthSubject)
        -> Result<Vec<DateTime<Utc>>, AnalyticsError>;

    /// Participant count of each project, one entry per project.
    async fn participant_counts(&self) -> Result<Vec<u64>, AnalyticsError>;

    /// Every tag of a vocabulary with its associated-project count,
    /// including unused tags, in store order.
    async fn tag_usage(&self, vocabulary: TagVocabulary) -> Result<Vec<TagUsage>, AnalyticsError>;

    /// Relation rows grouped by hacker and counted.
    ///
    /// Implementations must return groups in a deterministic order so that
    /// ranking ties resolve identically across calls.
    async fn group_by_hacker(&self, relation: HackerRelation)
        -> Result<Vec<HackerGroup>, AnalyticsError>;

    /// Display identities for the given ids. Unknown ids are omitted.
    async fn find_hackers(&self, ids: &[HackerId]) -> Result<Vec<HackerIdentity>, AnalyticsError>;
}

/// Errors that can occur while computing a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Analytics store is not configured")]
    NotConfigured,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid data in store: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for AnalyticsError {
    fn from(err: sqlx::Error) -> Self {
        AnalyticsError::Database(err.to_string())
    }
}

//! Scripted reader shared by the analytics handler tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::analytics::{
    GrowthSubject, HackerField, HackerGroup, HackerIdentity, HackerRelation, ProjectField,
    TagUsage, TagVocabulary,
};
use crate::domain::foundation::{HackType, HackerId, ProjectStatus};
use crate::ports::{AnalyticsError, HackathonReader, HackerFilter, ProjectFilter};

/// Operation names used to script failures.
pub const COUNT_HACKERS: &str = "count_hackers";
pub const COUNT_PROJECTS: &str = "count_projects";
pub const CREATION_TIMES: &str = "creation_times";
pub const PARTICIPANT_COUNTS: &str = "participant_counts";
pub const TAG_USAGE: &str = "tag_usage";
pub const GROUP_BY_HACKER: &str = "group_by_hacker";
pub const FIND_HACKERS: &str = "find_hackers";

#[derive(Default)]
pub struct ScriptedReader {
    pub hackers_total: u64,
    pub hackers_present: HashMap<HackerField, u64>,
    pub projects_total: u64,
    pub by_status: HashMap<ProjectStatus, u64>,
    pub approved_present: HashMap<ProjectField, u64>,
    pub by_hack_type: HashMap<HackType, u64>,
    pub hacker_created: Vec<DateTime<Utc>>,
    pub project_created: Vec<DateTime<Utc>>,
    pub participants: Vec<u64>,
    pub tech_tags: Vec<TagUsage>,
    pub domain_tags: Vec<TagUsage>,
    pub lead_groups: Vec<HackerGroup>,
    pub participant_groups: Vec<HackerGroup>,
    pub identities: Vec<HackerIdentity>,
    pub fail_on: Option<&'static str>,
    pub calls: AtomicUsize,
    pub find_calls: AtomicUsize,
}

impl ScriptedReader {
    pub fn failing_on(operation: &'static str) -> Self {
        Self {
            fail_on: Some(operation),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self, operation: &'static str) -> Result<(), AnalyticsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == Some(operation) {
            return Err(AnalyticsError::Database(format!("Simulated {} failure", operation)));
        }
        Ok(())
    }
}

pub fn hacker(id: &str) -> HackerId {
    HackerId::new(id).unwrap()
}

pub fn group(id: &str, count: u64) -> HackerGroup {
    HackerGroup {
        hacker_id: hacker(id),
        count,
    }
}

pub fn identity(id: &str, name: &str, username: &str) -> HackerIdentity {
    HackerIdentity {
        id: hacker(id),
        name: name.to_string(),
        username: Some(username.to_string()),
    }
}

pub fn tag(name: &str, projects: u64) -> TagUsage {
    TagUsage {
        name: name.to_string(),
        projects,
    }
}

#[async_trait]
impl HackathonReader for ScriptedReader {
    async fn count_hackers(&self, filter: HackerFilter) -> Result<u64, AnalyticsError> {
        self.enter(COUNT_HACKERS)?;
        Ok(match filter.present {
            None => self.hackers_total,
            Some(field) => self.hackers_present.get(&field).copied().unwrap_or(0),
        })
    }

    async fn count_projects(&self, filter: ProjectFilter) -> Result<u64, AnalyticsError> {
        self.enter(COUNT_PROJECTS)?;
        Ok(match (filter.status, filter.hack_type, filter.present) {
            (None, None, None) => self.projects_total,
            (Some(status), None, None) => self.by_status.get(&status).copied().unwrap_or(0),
            (Some(ProjectStatus::Approved), None, Some(field)) => {
                self.approved_present.get(&field).copied().unwrap_or(0)
            }
            (None, Some(kind), None) => self.by_hack_type.get(&kind).copied().unwrap_or(0),
            _ => 0,
        })
    }

    async fn creation_times(
        &self,
        subject: GrowthSubject,
    ) -> Result<Vec<DateTime<Utc>>, AnalyticsError> {
        self.enter(CREATION_TIMES)?;
        Ok(match subject {
            GrowthSubject::Hackers => self.hacker_created.clone(),
            GrowthSubject::Projects => self.project_created.clone(),
        })
    }

    async fn participant_counts(&self) -> Result<Vec<u64>, AnalyticsError> {
        self.enter(PARTICIPANT_COUNTS)?;
        Ok(self.participants.clone())
    }

    async fn tag_usage(&self, vocabulary: TagVocabulary) -> Result<Vec<TagUsage>, AnalyticsError> {
        self.enter(TAG_USAGE)?;
        Ok(match vocabulary {
            TagVocabulary::Tech => self.tech_tags.clone(),
            TagVocabulary::Domain => self.domain_tags.clone(),
        })
    }

    async fn group_by_hacker(
        &self,
        relation: HackerRelation,
    ) -> Result<Vec<HackerGroup>, AnalyticsError> {
        self.enter(GROUP_BY_HACKER)?;
        Ok(match relation {
            HackerRelation::Lead => self.lead_groups.clone(),
            HackerRelation::Participant => self.participant_groups.clone(),
        })
    }

    async fn find_hackers(&self, ids: &[HackerId]) -> Result<Vec<HackerIdentity>, AnalyticsError> {
        self.enter(FIND_HACKERS)?;
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .identities
            .iter()
            .filter(|identity| ids.contains(&identity.id))
            .cloned()
            .collect())
    }
}

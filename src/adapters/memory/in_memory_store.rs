//! In-memory community store for tests and demos.
//!
//! Holds hackers, projects and tag catalogues in plain vectors and answers
//! every `HackathonReader` query by scanning them. Results are
//! deterministic: groups and tags come back in insertion order.
//!
//! Status and hack type are kept as raw strings so that values outside the
//! known enumerations can be stored and exercised.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::analytics::{
    is_present, GrowthSubject, HackerField, HackerGroup, HackerIdentity, HackerRelation,
    ProjectField, TagUsage, TagVocabulary,
};
use crate::domain::foundation::{HackType, HackerId, ProjectStatus};
use crate::ports::{AnalyticsError, HackathonReader, HackerFilter, ProjectFilter};

/// A hacker row.
#[derive(Debug, Clone)]
pub struct HackerRecord {
    pub id: String,
    pub name: String,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub profile: HashMap<HackerField, String>,
}

impl HackerRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            username: None,
            created_at,
            profile: HashMap::new(),
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets a profile field. An empty value is stored but does not count
    /// as present.
    pub fn with_field(mut self, field: HackerField, value: impl Into<String>) -> Self {
        self.profile.insert(field, value.into());
        self
    }
}

/// A project row with its relations inlined.
#[derive(Debug, Clone)]
pub struct ProjectRecord {
    pub id: String,
    pub lead_id: String,
    pub participant_ids: Vec<String>,
    pub status: String,
    pub hack_type: String,
    pub created_at: DateTime<Utc>,
    pub details: HashMap<ProjectField, String>,
    pub tech_tags: Vec<String>,
    pub domain_tags: Vec<String>,
}

impl ProjectRecord {
    /// A DRAFT, REGULAR project with no participants or tags.
    pub fn new(id: impl Into<String>, lead_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            lead_id: lead_id.into(),
            participant_ids: Vec::new(),
            status: ProjectStatus::Draft.as_db_str().to_string(),
            hack_type: HackType::Regular.as_db_str().to_string(),
            created_at,
            details: HashMap::new(),
            tech_tags: Vec::new(),
            domain_tags: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status.as_db_str().to_string();
        self
    }

    /// Stores a status string verbatim, including values no report knows.
    pub fn with_raw_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_hack_type(mut self, hack_type: HackType) -> Self {
        self.hack_type = hack_type.as_db_str().to_string();
        self
    }

    pub fn with_participant(mut self, hacker_id: impl Into<String>) -> Self {
        self.participant_ids.push(hacker_id.into());
        self
    }

    pub fn with_field(mut self, field: ProjectField, value: impl Into<String>) -> Self {
        self.details.insert(field, value.into());
        self
    }

    pub fn with_tag(mut self, vocabulary: TagVocabulary, name: impl Into<String>) -> Self {
        match vocabulary {
            TagVocabulary::Tech => self.tech_tags.push(name.into()),
            TagVocabulary::Domain => self.domain_tags.push(name.into()),
        }
        self
    }

    fn matches(&self, filter: &ProjectFilter) -> bool {
        filter
            .status
            .map_or(true, |status| self.status == status.as_db_str())
            && filter
                .hack_type
                .map_or(true, |kind| self.hack_type == kind.as_db_str())
            && filter
                .present
                .map_or(true, |field| is_present(self.details.get(&field).map(String::as_str)))
    }

    fn tags(&self, vocabulary: TagVocabulary) -> &[String] {
        match vocabulary {
            TagVocabulary::Tech => &self.tech_tags,
            TagVocabulary::Domain => &self.domain_tags,
        }
    }
}

#[derive(Debug, Default)]
struct Dataset {
    hackers: Vec<HackerRecord>,
    projects: Vec<ProjectRecord>,
    tech_tags: Vec<String>,
    domain_tags: Vec<String>,
}

/// In-memory implementation of the HackathonReader port.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryHackathonStore::new();
/// store.add_hacker(HackerRecord::new("h1", "Ada", created_at));
/// store.add_project(ProjectRecord::new("p1", "h1", created_at));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryHackathonStore {
    data: RwLock<Dataset>,
}

impl InMemoryHackathonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hacker(&self, hacker: HackerRecord) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .hackers
            .push(hacker);
    }

    pub fn add_project(&self, project: ProjectRecord) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .projects
            .push(project);
    }

    /// Registers a tag in a vocabulary's catalogue. Tags used by projects
    /// but never registered are not reported.
    pub fn add_tag(&self, vocabulary: TagVocabulary, name: impl Into<String>) {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        let name = name.into();
        let catalogue = match vocabulary {
            TagVocabulary::Tech => &mut data.tech_tags,
            TagVocabulary::Domain => &mut data.domain_tags,
        };
        if !catalogue.contains(&name) {
            catalogue.push(name);
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Dataset) -> T) -> T {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        f(&data)
    }
}

fn to_hacker_id(raw: &str) -> Result<HackerId, AnalyticsError> {
    HackerId::new(raw).map_err(|e| AnalyticsError::InvalidData(format!("Invalid hacker id: {}", e)))
}

/// Counts ids in first-appearance order.
fn group_ids<'a>(ids: impl Iterator<Item = &'a String>) -> Result<Vec<HackerGroup>, AnalyticsError> {
    let mut groups: Vec<HackerGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for id in ids {
        match index.get(id.as_str()) {
            Some(&at) => groups[at].count += 1,
            None => {
                index.insert(id.as_str(), groups.len());
                groups.push(HackerGroup {
                    hacker_id: to_hacker_id(id)?,
                    count: 1,
                });
            }
        }
    }
    Ok(groups)
}

#[async_trait]
impl HackathonReader for InMemoryHackathonStore {
    async fn count_hackers(&self, filter: HackerFilter) -> Result<u64, AnalyticsError> {
        Ok(self.read(|data| {
            data.hackers
                .iter()
                .filter(|h| {
                    filter
                        .present
                        .map_or(true, |field| is_present(h.profile.get(&field).map(String::as_str)))
                })
                .count() as u64
        }))
    }

    async fn count_projects(&self, filter: ProjectFilter) -> Result<u64, AnalyticsError> {
        Ok(self.read(|data| data.projects.iter().filter(|p| p.matches(&filter)).count() as u64))
    }

    async fn creation_times(
        &self,
        subject: GrowthSubject,
    ) -> Result<Vec<DateTime<Utc>>, AnalyticsError> {
        let mut times: Vec<DateTime<Utc>> = self.read(|data| match subject {
            GrowthSubject::Hackers => data.hackers.iter().map(|h| h.created_at).collect(),
            GrowthSubject::Projects => data.projects.iter().map(|p| p.created_at).collect(),
        });
        times.sort();
        Ok(times)
    }

    async fn participant_counts(&self) -> Result<Vec<u64>, AnalyticsError> {
        Ok(self.read(|data| {
            data.projects
                .iter()
                .map(|p| p.participant_ids.len() as u64)
                .collect()
        }))
    }

    async fn tag_usage(&self, vocabulary: TagVocabulary) -> Result<Vec<TagUsage>, AnalyticsError> {
        Ok(self.read(|data| {
            let catalogue = match vocabulary {
                TagVocabulary::Tech => &data.tech_tags,
                TagVocabulary::Domain => &data.domain_tags,
            };
            catalogue
                .iter()
                .map(|name| TagUsage {
                    name: name.clone(),
                    projects: data
                        .projects
                        .iter()
                        .filter(|p| p.tags(vocabulary).contains(name))
                        .count() as u64,
                })
                .collect()
        }))
    }

    async fn group_by_hacker(
        &self,
        relation: HackerRelation,
    ) -> Result<Vec<HackerGroup>, AnalyticsError> {
        self.read(|data| match relation {
            HackerRelation::Lead => group_ids(data.projects.iter().map(|p| &p.lead_id)),
            HackerRelation::Participant => {
                group_ids(data.projects.iter().flat_map(|p| p.participant_ids.iter()))
            }
        })
    }

    async fn find_hackers(&self, ids: &[HackerId]) -> Result<Vec<HackerIdentity>, AnalyticsError> {
        self.read(|data| {
            data.hackers
                .iter()
                .filter(|h| ids.iter().any(|id| id.as_str() == h.id))
                .map(|h| {
                    Ok(HackerIdentity {
                        id: to_hacker_id(&h.id)?,
                        name: h.name.clone(),
                        username: h.username.clone(),
                    })
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, 1, 12, 0, 0).unwrap()
    }

    fn seeded() -> InMemoryHackathonStore {
        let store = InMemoryHackathonStore::new();
        store.add_hacker(
            HackerRecord::new("a", "Ada", at(2024, 2))
                .with_username("ada")
                .with_field(HackerField::Bio, "hi")
                .with_field(HackerField::Email, ""),
        );
        store.add_hacker(HackerRecord::new("b", "Bo", at(2024, 1)));
        store.add_tag(TagVocabulary::Tech, "rust");
        store.add_tag(TagVocabulary::Tech, "go");
        store.add_project(
            ProjectRecord::new("p1", "a", at(2024, 3))
                .with_status(ProjectStatus::Approved)
                .with_participant("b")
                .with_field(ProjectField::DemoUrl, "https://demo")
                .with_tag(TagVocabulary::Tech, "rust"),
        );
        store.add_project(
            ProjectRecord::new("p2", "b", at(2024, 3))
                .with_raw_status("ARCHIVED")
                .with_hack_type(HackType::Research),
        );
        store
    }

    #[tokio::test]
    async fn empty_string_is_not_present() {
        let store = seeded();
        assert_eq!(store.count_hackers(HackerFilter::all()).await.unwrap(), 2);
        assert_eq!(
            store.count_hackers(HackerFilter::with_present(HackerField::Bio)).await.unwrap(),
            1
        );
        assert_eq!(
            store.count_hackers(HackerFilter::with_present(HackerField::Email)).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn unknown_status_counts_only_in_total() {
        let store = seeded();
        assert_eq!(store.count_projects(ProjectFilter::all()).await.unwrap(), 2);
        let mut bucketed = 0;
        for status in ProjectStatus::ALL {
            bucketed += store
                .count_projects(ProjectFilter::with_status(status))
                .await
                .unwrap();
        }
        assert_eq!(bucketed, 1);
    }

    #[tokio::test]
    async fn combines_status_and_presence() {
        let store = seeded();
        let filter =
            ProjectFilter::with_status(ProjectStatus::Approved).and_present(ProjectField::DemoUrl);
        assert_eq!(store.count_projects(filter).await.unwrap(), 1);
        assert_eq!(
            store
                .count_projects(ProjectFilter::with_hack_type(HackType::Research))
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn creation_times_are_ascending() {
        let store = seeded();
        let times = store.creation_times(GrowthSubject::Hackers).await.unwrap();
        assert_eq!(times, vec![at(2024, 1), at(2024, 2)]);
    }

    #[tokio::test]
    async fn tag_usage_includes_unused_tags() {
        let store = seeded();
        let usage = store.tag_usage(TagVocabulary::Tech).await.unwrap();
        let pairs: Vec<_> = usage.iter().map(|t| (t.name.as_str(), t.projects)).collect();
        assert_eq!(pairs, vec![("rust", 1), ("go", 0)]);
        assert!(store.tag_usage(TagVocabulary::Domain).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn groups_by_relation() {
        let store = seeded();
        let leads = store.group_by_hacker(HackerRelation::Lead).await.unwrap();
        assert_eq!(leads.len(), 2);
        let participants = store.group_by_hacker(HackerRelation::Participant).await.unwrap();
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].hacker_id.as_str(), "b");
        assert_eq!(store.participant_counts().await.unwrap(), vec![1, 0]);
    }

    #[tokio::test]
    async fn find_hackers_omits_unknown_ids() {
        let store = seeded();
        let ids = vec![HackerId::new("a").unwrap(), HackerId::new("zz").unwrap()];
        let found = store.find_hackers(&ids).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username.as_deref(), Some("ada"));
    }
}

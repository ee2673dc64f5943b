//! PostgreSQL implementation of HackathonReader.
//!
//! Queries the Prisma-managed community schema. Table and column names are
//! quoted because Prisma keeps model casing (`"Hacker"`, `"githubUrl"`).
//! Tag relations use Prisma's implicit join tables, whose `"A"` and `"B"`
//! columns follow the alphabetical order of the two model names.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::analytics::{
    GrowthSubject, HackerGroup, HackerIdentity, HackerRelation, OptionalField, TagUsage,
    TagVocabulary,
};
use crate::domain::foundation::HackerId;
use crate::ports::{AnalyticsError, HackathonReader, HackerFilter, ProjectFilter};

/// PostgreSQL implementation of the HackathonReader port.
#[derive(Clone)]
pub struct PostgresHackathonReader {
    pool: PgPool,
}

impl PostgresHackathonReader {
    /// Creates a new PostgresHackathonReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TagUsageRow {
    name: String,
    projects: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct HackerGroupRow {
    hacker_id: String,
    count: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct HackerIdentityRow {
    id: String,
    name: String,
    username: Option<String>,
}

fn to_count(value: i64) -> Result<u64, AnalyticsError> {
    u64::try_from(value)
        .map_err(|_| AnalyticsError::InvalidData(format!("Negative count: {}", value)))
}

/// Appends a non-null, non-empty condition on a field column. Field keys
/// match the Prisma column names.
fn push_present<F: OptionalField>(builder: &mut QueryBuilder<'_, Postgres>, field: F) {
    let column = field.key();
    builder.push(format!(
        r#" AND "{column}" IS NOT NULL AND "{column}" <> ''"#
    ));
}

impl TryFrom<HackerGroupRow> for HackerGroup {
    type Error = AnalyticsError;

    fn try_from(row: HackerGroupRow) -> Result<Self, Self::Error> {
        Ok(HackerGroup {
            hacker_id: HackerId::new(row.hacker_id)
                .map_err(|e| AnalyticsError::InvalidData(format!("Invalid hacker id: {}", e)))?,
            count: to_count(row.count)?,
        })
    }
}

impl TryFrom<HackerIdentityRow> for HackerIdentity {
    type Error = AnalyticsError;

    fn try_from(row: HackerIdentityRow) -> Result<Self, Self::Error> {
        Ok(HackerIdentity {
            id: HackerId::new(row.id)
                .map_err(|e| AnalyticsError::InvalidData(format!("Invalid hacker id: {}", e)))?,
            name: row.name,
            username: row.username,
        })
    }
}

#[async_trait]
impl HackathonReader for PostgresHackathonReader {
    async fn count_hackers(&self, filter: HackerFilter) -> Result<u64, AnalyticsError> {
        tracing::debug!(present = ?filter.present, "Counting hackers");

        let mut builder = QueryBuilder::<Postgres>::new(r#"SELECT COUNT(*) FROM "Hacker" WHERE TRUE"#);
        if let Some(field) = filter.present {
            push_present(&mut builder, field);
        }

        let count: i64 = builder.build_query_scalar().fetch_one(&self.pool).await?;
        to_count(count)
    }

    async fn count_projects(&self, filter: ProjectFilter) -> Result<u64, AnalyticsError> {
        tracing::debug!(
            status = ?filter.status,
            hack_type = ?filter.hack_type,
            present = ?filter.present,
            "Counting projects"
        );

        let mut builder =
            QueryBuilder::<Postgres>::new(r#"SELECT COUNT(*) FROM "Project" WHERE TRUE"#);
        // Enum columns are compared as text so the bound parameter type matches.
        if let Some(status) = filter.status {
            builder.push(" AND status::text = ").push_bind(status.as_db_str());
        }
        if let Some(hack_type) = filter.hack_type {
            builder.push(" AND hack_type::text = ").push_bind(hack_type.as_db_str());
        }
        if let Some(field) = filter.present {
            push_present(&mut builder, field);
        }

        let count: i64 = builder.build_query_scalar().fetch_one(&self.pool).await?;
        to_count(count)
    }

    async fn creation_times(
        &self,
        subject: GrowthSubject,
    ) -> Result<Vec<DateTime<Utc>>, AnalyticsError> {
        tracing::debug!(%subject, "Loading creation times");

        // Prisma stores DateTime as timestamp without time zone, in UTC.
        let sql = match subject {
            GrowthSubject::Hackers => {
                r#"
                SELECT "createdAt" AT TIME ZONE 'UTC'
                FROM "Hacker"
                ORDER BY "createdAt" ASC
                "#
            }
            GrowthSubject::Projects => {
                r#"
                SELECT "createdAt" AT TIME ZONE 'UTC'
                FROM "Project"
                ORDER BY "createdAt" ASC
                "#
            }
        };

        let times: Vec<DateTime<Utc>> = sqlx::query_scalar(sql).fetch_all(&self.pool).await?;
        Ok(times)
    }

    async fn participant_counts(&self) -> Result<Vec<u64>, AnalyticsError> {
        tracing::debug!("Loading participant counts");

        let counts: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT COUNT(pp."hackerId")
            FROM "Project" p
            LEFT JOIN "ProjectToParticipant" pp ON pp."projectId" = p.id
            GROUP BY p.id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        counts.into_iter().map(to_count).collect()
    }

    async fn tag_usage(&self, vocabulary: TagVocabulary) -> Result<Vec<TagUsage>, AnalyticsError> {
        tracing::debug!(%vocabulary, "Loading tag usage");

        let sql = match vocabulary {
            TagVocabulary::Tech => {
                r#"
                SELECT t.name, COUNT(j."A") AS projects
                FROM "TechTag" t
                LEFT JOIN "_ProjectToTechTag" j ON j."B" = t.id
                GROUP BY t.id, t.name
                ORDER BY t.id
                "#
            }
            TagVocabulary::Domain => {
                r#"
                SELECT t.name, COUNT(j."B") AS projects
                FROM "DomainTag" t
                LEFT JOIN "_DomainTagToProject" j ON j."A" = t.id
                GROUP BY t.id, t.name
                ORDER BY t.id
                "#
            }
        };

        let rows: Vec<TagUsageRow> = sqlx::query_as(sql).fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(|row| {
                Ok(TagUsage {
                    name: row.name,
                    projects: to_count(row.projects)?,
                })
            })
            .collect()
    }

    async fn group_by_hacker(
        &self,
        relation: HackerRelation,
    ) -> Result<Vec<HackerGroup>, AnalyticsError> {
        tracing::debug!(%relation, "Grouping projects by hacker");

        let sql = match relation {
            HackerRelation::Lead => {
                r#"
                SELECT "launchLeadId" AS hacker_id, COUNT(*) AS count
                FROM "Project"
                GROUP BY "launchLeadId"
                ORDER BY "launchLeadId"
                "#
            }
            HackerRelation::Participant => {
                r#"
                SELECT "hackerId" AS hacker_id, COUNT(*) AS count
                FROM "ProjectToParticipant"
                GROUP BY "hackerId"
                ORDER BY "hackerId"
                "#
            }
        };

        let rows: Vec<HackerGroupRow> = sqlx::query_as(sql).fetch_all(&self.pool).await?;
        rows.into_iter().map(HackerGroup::try_from).collect()
    }

    async fn find_hackers(&self, ids: &[HackerId]) -> Result<Vec<HackerIdentity>, AnalyticsError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(count = ids.len(), "Resolving hacker identities");

        let ids: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();
        let rows: Vec<HackerIdentityRow> = sqlx::query_as(
            r#"
            SELECT id, name, username
            FROM "Hacker"
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(HackerIdentity::try_from).collect()
    }
}

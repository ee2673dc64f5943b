//! Profile completeness: share of a population with each optional field filled.
//!
//! A field counts as present only when it is non-null and not the empty string.

use serde::Serialize;

use crate::domain::foundation::Percentage;

/// An optional attribute tracked by a completeness report.
pub trait OptionalField: Copy + Send + Sync + 'static {
    /// Stable key, also the column name in the store.
    fn key(&self) -> &'static str;

    /// Human readable label.
    fn label(&self) -> &'static str;
}

/// Optional profile fields of a hacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HackerField {
    Bio,
    GithubUrl,
    DiscordName,
    TwitterUrl,
    LinkedinUrl,
    WebsiteUrl,
    Email,
    PhoneNumber,
}

impl HackerField {
    /// All fields in report order.
    pub const ALL: [HackerField; 8] = [
        HackerField::Bio,
        HackerField::GithubUrl,
        HackerField::DiscordName,
        HackerField::TwitterUrl,
        HackerField::LinkedinUrl,
        HackerField::WebsiteUrl,
        HackerField::Email,
        HackerField::PhoneNumber,
    ];
}

impl OptionalField for HackerField {
    fn key(&self) -> &'static str {
        match self {
            HackerField::Bio => "bio",
            HackerField::GithubUrl => "githubUrl",
            HackerField::DiscordName => "discordName",
            HackerField::TwitterUrl => "twitterUrl",
            HackerField::LinkedinUrl => "linkedinUrl",
            HackerField::WebsiteUrl => "websiteUrl",
            HackerField::Email => "email",
            HackerField::PhoneNumber => "phoneNumber",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            HackerField::Bio => "Bio",
            HackerField::GithubUrl => "GitHub URL",
            HackerField::DiscordName => "Discord Name",
            HackerField::TwitterUrl => "Twitter URL",
            HackerField::LinkedinUrl => "LinkedIn URL",
            HackerField::WebsiteUrl => "Website URL",
            HackerField::Email => "Email",
            HackerField::PhoneNumber => "Phone Number",
        }
    }
}

/// Optional descriptive fields of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
    Description,
    GithubUrl,
    DemoUrl,
    BlogUrl,
    ThumbnailId,
}

impl ProjectField {
    /// All fields in report order.
    pub const ALL: [ProjectField; 5] = [
        ProjectField::Description,
        ProjectField::GithubUrl,
        ProjectField::DemoUrl,
        ProjectField::BlogUrl,
        ProjectField::ThumbnailId,
    ];
}

impl OptionalField for ProjectField {
    fn key(&self) -> &'static str {
        match self {
            ProjectField::Description => "description",
            ProjectField::GithubUrl => "githubUrl",
            ProjectField::DemoUrl => "demoUrl",
            ProjectField::BlogUrl => "blogUrl",
            ProjectField::ThumbnailId => "thumbnailId",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProjectField::Description => "Description",
            ProjectField::GithubUrl => "GitHub URL",
            ProjectField::DemoUrl => "Demo URL",
            ProjectField::BlogUrl => "Blog URL",
            ProjectField::ThumbnailId => "Thumbnail",
        }
    }
}

/// Presence rule shared by every store adapter.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCompleteness {
    pub key: String,
    pub label: String,
    pub percent_complete: Percentage,
}

/// Completeness of one population across a fixed list of fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    /// Size of the population (the denominator).
    pub total: u64,
    pub fields: Vec<FieldCompleteness>,
}

impl CompletenessReport {
    /// Builds the report from per-field present counts, keeping input order.
    pub fn from_counts<F, I>(total: u64, counts: I) -> Self
    where
        F: OptionalField,
        I: IntoIterator<Item = (F, u64)>,
    {
        let fields = counts
            .into_iter()
            .map(|(field, present)| FieldCompleteness {
                key: field.key().to_string(),
                label: field.label().to_string(),
                percent_complete: Percentage::of(present, total),
            })
            .collect();

        Self { total, fields }
    }

    /// Looks up a field by key.
    pub fn field(&self, key: &str) -> Option<&FieldCompleteness> {
        self.fields.iter().find(|f| f.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_rule_rejects_null_and_empty() {
        assert!(!is_present(None));
        assert!(!is_present(Some("")));
        assert!(is_present(Some(" ")));
        assert!(is_present(Some("hello")));
    }

    #[test]
    fn half_the_hackers_have_a_bio() {
        let report = CompletenessReport::from_counts(4, [(HackerField::Bio, 2)]);
        let bio = report.field("bio").unwrap();
        assert!((bio.percent_complete.value() - 50.0).abs() < f64::EPSILON);
        assert_eq!(bio.label, "Bio");
    }

    #[test]
    fn empty_population_is_zero_for_every_field() {
        let report = CompletenessReport::from_counts(
            0,
            ProjectField::ALL.into_iter().map(|f| (f, 0)),
        );
        assert_eq!(report.total, 0);
        assert_eq!(report.fields.len(), 5);
        assert!(report
            .fields
            .iter()
            .all(|f| f.percent_complete == Percentage::ZERO));
    }

    #[test]
    fn keeps_catalogue_order() {
        let report =
            CompletenessReport::from_counts(1, HackerField::ALL.into_iter().map(|f| (f, 1)));
        let keys: Vec<_> = report.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "bio",
                "githubUrl",
                "discordName",
                "twitterUrl",
                "linkedinUrl",
                "websiteUrl",
                "email",
                "phoneNumber"
            ]
        );
    }

    #[test]
    fn thumbnail_label() {
        assert_eq!(ProjectField::ThumbnailId.key(), "thumbnailId");
        assert_eq!(ProjectField::ThumbnailId.label(), "Thumbnail");
    }

    #[test]
    fn serializes_camel_case() {
        let report = CompletenessReport::from_counts(2, [(ProjectField::DemoUrl, 1)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["fields"][0]["percentComplete"], 50.0);
        assert_eq!(json["fields"][0]["label"], "Demo URL");
    }
}

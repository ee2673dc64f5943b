//! Tag usage frequencies for the technology and domain vocabularies.

use serde::Serialize;
use std::fmt;

/// One of the two independent tag vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagVocabulary {
    Tech,
    Domain,
}

impl fmt::Display for TagVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagVocabulary::Tech => write!(f, "tech"),
            TagVocabulary::Domain => write!(f, "domain"),
        }
    }
}

/// A tag as read from the store with its associated-project count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUsage {
    pub name: String,
    pub projects: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagFrequency {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTags {
    pub tech: Vec<TagFrequency>,
    pub domain: Vec<TagFrequency>,
}

/// Drops unused tags and sorts by descending count. The sort is stable,
/// so ties keep the store's enumeration order.
pub fn tag_frequencies(usage: Vec<TagUsage>) -> Vec<TagFrequency> {
    let mut frequencies: Vec<TagFrequency> = usage
        .into_iter()
        .filter(|tag| tag.projects > 0)
        .map(|tag| TagFrequency {
            name: tag.name,
            count: tag.projects,
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(name: &str, projects: u64) -> TagUsage {
        TagUsage {
            name: name.to_string(),
            projects,
        }
    }

    #[test]
    fn drops_unused_tags() {
        let out = tag_frequencies(vec![usage("rust", 3), usage("cobol", 0)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "rust");
    }

    #[test]
    fn sorts_descending_and_keeps_tie_order() {
        let out = tag_frequencies(vec![
            usage("go", 2),
            usage("rust", 5),
            usage("zig", 2),
            usage("c", 1),
        ]);
        let names: Vec<_> = out.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["rust", "go", "zig", "c"]);
    }

    #[test]
    fn empty_vocabulary() {
        assert!(tag_frequencies(Vec::new()).is_empty());
    }
}

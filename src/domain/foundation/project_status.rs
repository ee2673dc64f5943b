//! ProjectStatus enum for the submission lifecycle of a project.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Lifecycle status of a project submission.
///
/// Declaration order is the display order of every status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Draft,
    Pending,
    Approved,
}

impl ProjectStatus {
    /// All statuses in display order.
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Draft,
        ProjectStatus::Pending,
        ProjectStatus::Approved,
    ];

    /// Value stored in the database enum column.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "DRAFT",
            ProjectStatus::Pending => "PENDING",
            ProjectStatus::Approved => "APPROVED",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Pending => "Pending",
            ProjectStatus::Approved => "Approved",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = ValidationError;

    /// Parses the stored enum value. Matching is exact: the column is a
    /// closed database enum, so anything else is foreign data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_db_str() == s)
            .ok_or_else(|| ValidationError::unknown_variant("project status", s))
    }
}

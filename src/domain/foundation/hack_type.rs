//! HackType enum distinguishing regular builds from research projects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Kind of hack a project is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HackType {
    Regular,
    Research,
}

impl HackType {
    /// All types in display order.
    pub const ALL: [HackType; 2] = [HackType::Regular, HackType::Research];

    /// Value stored in the database enum column.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            HackType::Regular => "REGULAR",
            HackType::Research => "RESEARCH",
        }
    }

    /// Human readable label, used as the distribution bucket name.
    pub fn label(&self) -> &'static str {
        match self {
            HackType::Regular => "Regular",
            HackType::Research => "Research",
        }
    }
}

impl fmt::Display for HackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for HackType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HackType::ALL
            .into_iter()
            .find(|kind| kind.as_db_str() == s)
            .ok_or_else(|| ValidationError::unknown_variant("hack type", s))
    }
}

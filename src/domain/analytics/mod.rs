//! Analytics Module - Pure report computations over community data.
//!
//! Every function here is deterministic and free of I/O. Handlers in the
//! application layer fetch raw counts and rows through the store port and
//! hand them to these builders.
//!
//! # Components
//!
//! - `distribution` - Shared bucket builder with numeric-then-text ordering
//! - `completeness` - Share of a population with each optional field filled
//! - `growth` - Cumulative monthly creation curves
//! - `status` - Project status breakdown in fixed order
//! - `statistics` - Team size and hack type distributions
//! - `tags` - Tag usage frequencies
//! - `leaderboard` - Top hackers by relation count plus count histogram
//! - `view` - Named views a caller can request

mod completeness;
mod distribution;
mod growth;
mod leaderboard;
mod statistics;
mod status;
mod tags;
mod view;

pub use completeness::{
    is_present, CompletenessReport, FieldCompleteness, HackerField, OptionalField, ProjectField,
};
pub use distribution::{build_distribution, compare_bucket_keys, DistributionSlice};
pub use growth::{cumulative_growth, GrowthPoint, GrowthSubject};
pub use leaderboard::{
    count_histogram, effective_limit, resolve_entries, top_groups, CountBin, HackerGroup,
    HackerIdentity, HackerRelation, Leaderboard, LeaderboardEntry, DEFAULT_LEADERBOARD_LIMIT,
    UNKNOWN_HACKER_NAME,
};
pub use statistics::{hack_type_distribution, team_size_distribution, ProjectStatistics};
pub use status::{StatusDistribution, StatusSlice};
pub use tags::{tag_frequencies, ProjectTags, TagFrequency, TagUsage, TagVocabulary};
pub use view::{ProjectOverview, ReportPayload, ReportView};

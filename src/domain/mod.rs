//! Domain layer containing aggregation logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, closed enums, percentages, errors)
//! - `analytics` - Report computations (completeness, growth, distributions,
//!   tags, leaderboards) and the named report views

pub mod analytics;
pub mod foundation;

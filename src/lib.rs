//! Hackathon Analytics - Reporting over a hackathon community dataset
//!
//! This crate turns hacker, project, team and tag rows into compact,
//! presentation-ready summaries: completeness scores, growth curves,
//! categorical distributions, tag frequencies and leaderboards.
//!
//! # Layers
//!
//! - `domain` - Pure aggregation over counts and timestamps
//! - `ports` - The read-only store contract
//! - `application` - One query handler per report view
//! - `adapters` - PostgreSQL, in-memory and HTTP implementations
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

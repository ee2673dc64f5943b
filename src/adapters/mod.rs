//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the analytics core to external systems:
//! - `postgres` - sqlx reader over the community database
//! - `memory` - In-memory store for tests and demos
//! - `unconfigured` - Reader used when no database is set
//! - `http` - Axum JSON endpoints

pub mod http;
pub mod memory;
pub mod postgres;
mod unconfigured;

pub use http::{analytics_routes, AnalyticsAppState};
pub use memory::{HackerRecord, InMemoryHackathonStore, ProjectRecord};
pub use postgres::PostgresHackathonReader;
pub use unconfigured::UnconfiguredReader;

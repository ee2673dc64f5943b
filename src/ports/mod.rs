//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HackathonReader` - Read-only queries against the community store

mod hackathon_reader;

pub use hackathon_reader::{AnalyticsError, HackathonReader, HackerFilter, ProjectFilter};

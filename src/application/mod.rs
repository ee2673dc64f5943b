//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain aggregation and coordinates reads
//! through the `HackathonReader` port. Everything here is read-only.

pub mod handlers;

pub use handlers::{GetReportViewHandler, GetReportViewQuery, GetReportViewResult};

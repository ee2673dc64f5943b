//! HTTP adapters - REST API implementations.

pub mod analytics;

pub use analytics::analytics_routes;
pub use analytics::AnalyticsAppState;

//! Analytics HTTP adapter module.
//!
//! Provides read-only JSON endpoints, one report view per request.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::AnalyticsAppState;
pub use routes::analytics_routes;

//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, closed enumerations, and error types
//! that form the vocabulary of the hackathon community store.

mod errors;
mod hack_type;
mod ids;
mod percentage;
mod project_status;

pub use errors::ValidationError;
pub use hack_type::HackType;
pub use ids::HackerId;
pub use percentage::Percentage;
pub use project_status::ProjectStatus;

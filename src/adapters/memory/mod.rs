//! In-memory adapters - Deterministic store for tests and demos.

mod in_memory_store;

pub use in_memory_store::{HackerRecord, InMemoryHackathonStore, ProjectRecord};

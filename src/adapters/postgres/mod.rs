//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresHackathonReader` - Read-only analytics queries over the
//!   community schema

mod hackathon_reader;

pub use hackathon_reader::PostgresHackathonReader;

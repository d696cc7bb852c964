//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPreferenceRepository` - Per-user preference records

mod preference_repository;

pub use preference_repository::PostgresPreferenceRepository;

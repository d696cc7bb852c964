//! In-memory adapters for tests and local development.

mod preference_repository;

pub use preference_repository::InMemoryPreferenceRepository;

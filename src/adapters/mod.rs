//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Session validators (JWT, mock)
//! - `http` - axum routes, middleware and DTOs
//! - `memory` - In-memory preference store
//! - `postgres` - PostgreSQL preference store

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtConfig, JwtSessionValidator, MockSessionValidator};
pub use memory::InMemoryPreferenceRepository;
pub use postgres::PostgresPreferenceRepository;

//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PreferenceRepository` - per-user preference record store
//! - `SessionValidator` - bearer token validation

mod preference_repository;
mod session_validator;

pub use preference_repository::PreferenceRepository;
pub use session_validator::SessionValidator;

//! Foundation module - Shared domain primitives.
//!
//! Identifiers, authentication types, and error types used across the
//! preference and command modules.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;

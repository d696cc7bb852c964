//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, auth types, errors)
//! - `preferences` - The per-user preference record and direct updates
//! - `command` - Keyword-driven command interpreter over preferences

pub mod command;
pub mod foundation;
pub mod preferences;

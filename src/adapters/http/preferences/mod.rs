//! HTTP adapter for preference endpoints.
//!
//! - `POST /api/command` - Interpret a free-text command (alias `POST /api/claude`)
//! - `GET /api/preferences` - Current preferences
//! - `POST /api/preferences` - Partial update
//! - `POST /api/account` - Provision default preferences for the caller
//! - `GET /api/user` - Caller identity plus preferences

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{PreferenceApiError, PreferencesAppState};
pub use routes::preferences_routes;

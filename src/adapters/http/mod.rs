//! HTTP adapters - REST API implementations.

pub mod error;
pub mod middleware;
pub mod preferences;
pub mod router;

pub use error::ErrorResponse;
pub use preferences::{preferences_routes, PreferencesAppState};
pub use router::{build_router, HttpSettings};

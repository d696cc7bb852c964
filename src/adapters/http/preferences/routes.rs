//! Axum router configuration for preference endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_preferences, get_user, interpret_command, provision_account, update_preferences,
    PreferencesAppState,
};

/// Routes mounted under `/api`. Every route requires a bearer token.
///
/// `/claude` is the route name older clients still call; it behaves exactly
/// like `/command`.
pub fn preferences_routes() -> Router<PreferencesAppState> {
    Router::new()
        .route("/command", post(interpret_command))
        .route("/claude", post(interpret_command))
        .route("/preferences", get(get_preferences).post(update_preferences))
        .route("/account", post(provision_account))
        .route("/user", get(get_user))
}

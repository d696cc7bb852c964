//! HTTP handlers for preference endpoints.
//!
//! These handlers connect axum routes to the application layer handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{
    GetPreferencesHandler, GetPreferencesQuery, InterpretCommandCommand, InterpretCommandHandler,
    ProvisionPreferencesCommand, ProvisionPreferencesHandler, UpdatePreferencesCommand,
    UpdatePreferencesHandler, UserLocks,
};
use crate::domain::preferences::PreferenceError;
use crate::ports::PreferenceRepository;

use super::dto::{
    CommandRequest, CommandResponse, PreferencesResponse, UpdatePreferencesRequest, UserResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for preference endpoints.
#[derive(Clone)]
pub struct PreferencesAppState {
    pub repository: Arc<dyn PreferenceRepository>,
    pub locks: Arc<UserLocks>,
}

impl PreferencesAppState {
    pub fn new(repository: Arc<dyn PreferenceRepository>, locks: Arc<UserLocks>) -> Self {
        Self { repository, locks }
    }

    pub fn get_preferences_handler(&self) -> GetPreferencesHandler {
        GetPreferencesHandler::new(self.repository.clone())
    }

    pub fn update_preferences_handler(&self) -> UpdatePreferencesHandler {
        UpdatePreferencesHandler::new(self.repository.clone(), self.locks.clone())
    }

    pub fn provision_preferences_handler(&self) -> ProvisionPreferencesHandler {
        ProvisionPreferencesHandler::new(self.repository.clone())
    }

    pub fn interpret_command_handler(&self) -> InterpretCommandHandler {
        InterpretCommandHandler::new(self.repository.clone(), self.locks.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/command - Interpret a free-text preference command
pub async fn interpret_command(
    State(state): State<PreferencesAppState>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PreferenceApiError> {
    let Json(request) = body?;
    let cmd = InterpretCommandCommand {
        user_id: user.id,
        message: request.message,
    };

    let result = state.interpret_command_handler().handle(cmd).await?;

    Ok(Json(CommandResponse::from(result)))
}

/// GET /api/preferences - Current preferences
pub async fn get_preferences(
    State(state): State<PreferencesAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, PreferenceApiError> {
    let query = GetPreferencesQuery { user_id: user.id };

    let record = state.get_preferences_handler().handle(query).await?;

    Ok(Json(PreferencesResponse::from(record)))
}

/// POST /api/preferences - Partial update
pub async fn update_preferences(
    State(state): State<PreferencesAppState>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<UpdatePreferencesRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PreferenceApiError> {
    let Json(request) = body?;
    let cmd = UpdatePreferencesCommand {
        user_id: user.id,
        patch: request.into(),
    };

    let record = state.update_preferences_handler().handle(cmd).await?;

    Ok(Json(PreferencesResponse::from(record)))
}

/// POST /api/account - Provision default preferences for the caller
pub async fn provision_account(
    State(state): State<PreferencesAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, PreferenceApiError> {
    let cmd = ProvisionPreferencesCommand { user_id: user.id };

    let record = state.provision_preferences_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(PreferencesResponse::from(record))))
}

/// GET /api/user - Caller identity plus preferences
pub async fn get_user(
    State(state): State<PreferencesAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, PreferenceApiError> {
    let query = GetPreferencesQuery {
        user_id: user.id.clone(),
    };

    let preferences = match state.get_preferences_handler().handle(query).await {
        Ok(record) => Some(record),
        Err(PreferenceError::NotFound(_)) => None,
        Err(e) => return Err(e.into()),
    };

    Ok(Json(UserResponse::new(user, preferences)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts preference errors to HTTP responses.
#[derive(Debug)]
pub enum PreferenceApiError {
    /// Request body could not be read or was missing required data.
    InvalidBody(String),
    Preference(PreferenceError),
}

impl From<PreferenceError> for PreferenceApiError {
    fn from(err: PreferenceError) -> Self {
        Self::Preference(err)
    }
}

impl From<JsonRejection> for PreferenceApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for PreferenceApiError {
    fn into_response(self) -> Response {
        let err = match self {
            PreferenceApiError::InvalidBody(message) => {
                tracing::debug!(%message, "Rejected request body");
                let body = ErrorResponse::new("INVALID_REQUEST", message);
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            PreferenceApiError::Preference(err) => err,
        };

        let (status, error_code) = match &err {
            PreferenceError::NotFound(_) => (StatusCode::NOT_FOUND, "PREFERENCES_NOT_FOUND"),
            PreferenceError::AlreadyExists(_) => (StatusCode::CONFLICT, "PREFERENCES_EXIST"),
            PreferenceError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            PreferenceError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = match &err {
            PreferenceError::ValidationFailed { field, .. } => ErrorResponse::with_details(
                error_code,
                err.message(),
                serde_json::json!({ "field": field }),
            ),
            // Store internals stay in the logs
            PreferenceError::Infrastructure(detail) => {
                tracing::error!(error = %detail, "Preference request failed");
                ErrorResponse::new(error_code, "Failed to process request")
            }
            _ => ErrorResponse::new(error_code, err.message()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn user_id() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn status_of(err: PreferenceError) -> StatusCode {
        PreferenceApiError::from(err).into_response().status()
    }

    #[test]
    fn api_error_maps_not_found_to_404() {
        assert_eq!(status_of(PreferenceError::not_found(user_id())), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_maps_already_exists_to_409() {
        assert_eq!(
            status_of(PreferenceError::already_exists(user_id())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn api_error_maps_validation_to_400() {
        assert_eq!(
            status_of(PreferenceError::validation("theme", "bad")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn api_error_maps_infrastructure_to_500() {
        assert_eq!(
            status_of(PreferenceError::infrastructure("db down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn infrastructure_error_hides_details() {
        let response = PreferenceApiError::from(PreferenceError::infrastructure(
            "connection refused at 10.0.0.5",
        ))
        .into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error_code, "INTERNAL_ERROR");
        assert!(!error.message.contains("10.0.0.5"));
    }

    #[test]
    fn invalid_body_maps_to_400() {
        let response = PreferenceApiError::InvalidBody("bad json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn app_state_is_clone_send_sync() {
        fn assert_traits<T: Clone + Send + Sync>() {}
        assert_traits::<PreferencesAppState>();
    }
}

//! Preference-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | AlreadyExists | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// Errors raised by preference operations.
///
/// The command interpreter itself never fails; these come from the store
/// and from direct updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// No preference record exists for this user.
    NotFound(UserId),

    /// The user already has a preference record.
    AlreadyExists(UserId),

    /// A supplied field value was rejected.
    ValidationFailed { field: String, message: String },

    /// Store or other infrastructure failure.
    Infrastructure(String),
}

impl PreferenceError {
    pub fn not_found(user_id: UserId) -> Self {
        PreferenceError::NotFound(user_id)
    }

    pub fn already_exists(user_id: UserId) -> Self {
        PreferenceError::AlreadyExists(user_id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PreferenceError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PreferenceError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PreferenceError::NotFound(_) => ErrorCode::PreferencesNotFound,
            PreferenceError::AlreadyExists(_) => ErrorCode::PreferencesExist,
            PreferenceError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PreferenceError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            PreferenceError::NotFound(user_id) => {
                format!("No preferences found for user: {}", user_id)
            }
            PreferenceError::AlreadyExists(user_id) => {
                format!("User {} already has preferences", user_id)
            }
            PreferenceError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PreferenceError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PreferenceError {}

impl From<ValidationError> for PreferenceError {
    fn from(err: ValidationError) -> Self {
        PreferenceError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for PreferenceError {
    fn from(err: DomainError) -> Self {
        let user_id = err
            .details
            .get("user_id")
            .and_then(|id| UserId::new(id.as_str()).ok());

        match (err.code, user_id) {
            (ErrorCode::PreferencesNotFound, Some(user_id)) => PreferenceError::NotFound(user_id),
            (ErrorCode::PreferencesExist, Some(user_id)) => {
                PreferenceError::AlreadyExists(user_id)
            }
            (ErrorCode::ValidationFailed, _) => PreferenceError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PreferenceError::Infrastructure(err.to_string()),
        }
    }
}

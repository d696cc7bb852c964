//! Request and response bodies for preference endpoints.

use serde::{Deserialize, Serialize};

use crate::application::InterpretCommandResult;
use crate::domain::command::CommandAction;
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::preferences::{PreferencePatch, PreferenceRecord};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/command`. A missing `message` reads as empty text.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub message: String,
}

/// Body of `POST /api/preferences`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePreferencesRequest {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub notifications: Option<bool>,
}

impl From<UpdatePreferencesRequest> for PreferencePatch {
    fn from(req: UpdatePreferencesRequest) -> Self {
        PreferencePatch {
            theme: req.theme,
            language: req.language,
            notifications: req.notifications,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Preference record as exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreferencesView {
    pub theme: String,
    pub language: String,
    pub notifications: bool,
}

impl From<PreferenceRecord> for PreferencesView {
    fn from(record: PreferenceRecord) -> Self {
        Self {
            theme: record.theme.as_str().to_string(),
            language: record.language.as_str().to_string(),
            notifications: record.notifications,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreferencesResponse {
    pub preferences: PreferencesView,
}

impl From<PreferenceRecord> for PreferencesResponse {
    fn from(record: PreferenceRecord) -> Self {
        Self {
            preferences: record.into(),
        }
    }
}

/// Reply to a command: assistant text, resulting record and action tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandResponse {
    pub message: String,
    pub preferences: PreferencesView,
    pub action: CommandAction,
}

impl From<InterpretCommandResult> for CommandResponse {
    fn from(result: InterpretCommandResult) -> Self {
        Self {
            message: result.outcome.reply,
            preferences: result.preferences.into(),
            action: result.outcome.action,
        }
    }
}

/// Caller identity with preferences (`null` before provisioning).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub preferences: Option<PreferencesView>,
}

impl UserResponse {
    pub fn new(user: AuthenticatedUser, preferences: Option<PreferenceRecord>) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            display_name: user.display_name,
            preferences: preferences.map(PreferencesView::from),
        }
    }
}

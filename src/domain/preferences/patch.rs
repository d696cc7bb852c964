//! Direct (non-interpreted) partial update of a preference record.

use crate::domain::foundation::ValidationError;

use super::record::{Language, PreferenceRecord, Theme};

/// Partial update carrying any subset of the three fields.
///
/// Values are validated before anything is applied: an invalid theme or
/// language rejects the whole patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencePatch {
    pub theme: Option<String>,
    pub language: Option<String>,
    pub notifications: Option<bool>,
}

impl PreferencePatch {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.language.is_none() && self.notifications.is_none()
    }

    /// Returns `current` with every supplied field replaced.
    pub fn apply(&self, current: &PreferenceRecord) -> Result<PreferenceRecord, ValidationError> {
        let theme = match &self.theme {
            Some(raw) => raw.parse::<Theme>()?,
            None => current.theme,
        };
        let language = match &self.language {
            Some(raw) => Language::new(raw)?,
            None => current.language.clone(),
        };
        let notifications = self.notifications.unwrap_or(current.notifications);

        Ok(PreferenceRecord::new(theme, language, notifications))
    }
}

//! UpdatePreferencesHandler - Command handler for direct partial updates.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::UserLocks;
use crate::domain::foundation::UserId;
use crate::domain::preferences::{PreferenceError, PreferencePatch, PreferenceRecord};
use crate::ports::PreferenceRepository;

/// Command to update some or all preference fields.
#[derive(Debug, Clone)]
pub struct UpdatePreferencesCommand {
    pub user_id: UserId,
    pub patch: PreferencePatch,
}

/// Handler for direct preference updates.
pub struct UpdatePreferencesHandler {
    repository: Arc<dyn PreferenceRepository>,
    locks: Arc<UserLocks>,
}

impl UpdatePreferencesHandler {
    pub fn new(repository: Arc<dyn PreferenceRepository>, locks: Arc<UserLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePreferencesCommand,
    ) -> Result<PreferenceRecord, PreferenceError> {
        let _guard = self.locks.acquire(&cmd.user_id).await;

        // 1. Load current record
        let current = self
            .repository
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| PreferenceError::not_found(cmd.user_id.clone()))?;

        if cmd.patch.is_empty() {
            debug!(user_id = %cmd.user_id, "Empty preference patch, nothing to save");
            return Ok(current);
        }

        // 2. Validate and apply supplied fields
        let updated = cmd.patch.apply(&current)?;

        // 3. Persist
        self.repository.save(&cmd.user_id, &updated).await?;

        info!(
            user_id = %cmd.user_id,
            theme = %updated.theme,
            language = %updated.language,
            notifications = updated.notifications,
            "Preferences updated"
        );

        Ok(updated)
    }
}

//! ProvisionPreferencesHandler - Command handler that creates the default
//! preference record for a newly registered user.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::preferences::{PreferenceError, PreferenceRecord};
use crate::ports::PreferenceRepository;

/// Command to provision preferences for a user.
#[derive(Debug, Clone)]
pub struct ProvisionPreferencesCommand {
    pub user_id: UserId,
}

/// Handler for provisioning default preferences.
pub struct ProvisionPreferencesHandler {
    repository: Arc<dyn PreferenceRepository>,
}

impl ProvisionPreferencesHandler {
    pub fn new(repository: Arc<dyn PreferenceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ProvisionPreferencesCommand,
    ) -> Result<PreferenceRecord, PreferenceError> {
        if self.repository.find_by_user(&cmd.user_id).await?.is_some() {
            return Err(PreferenceError::already_exists(cmd.user_id));
        }

        let record = PreferenceRecord::default();
        // A concurrent provision that wins the race surfaces as AlreadyExists
        self.repository.create(&cmd.user_id, &record).await?;

        info!(user_id = %cmd.user_id, "Default preferences provisioned");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::preferences::test_support::{
        test_user_id, MockPreferenceRepository,
    };
    use crate::domain::preferences::{Language, Theme};

    #[tokio::test]
    async fn creates_default_record() {
        let repo = Arc::new(MockPreferenceRepository::new());
        let handler = ProvisionPreferencesHandler::new(repo.clone());

        let result = handler
            .handle(ProvisionPreferencesCommand {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert_eq!(result.theme, Theme::Light);
        assert_eq!(result.language, Language::english());
        assert!(result.notifications);
        assert_eq!(repo.stored(&test_user_id()), Some(result));
    }

    #[tokio::test]
    async fn fails_when_record_already_exists() {
        let existing = PreferenceRecord::new(Theme::Dark, Language::spanish(), false);
        let repo = Arc::new(MockPreferenceRepository::new().with_record(&test_user_id(), existing.clone()));
        let handler = ProvisionPreferencesHandler::new(repo.clone());

        let result = handler
            .handle(ProvisionPreferencesCommand {
                user_id: test_user_id(),
            })
            .await;

        assert_eq!(result.unwrap_err(), PreferenceError::already_exists(test_user_id()));
        assert_eq!(repo.stored(&test_user_id()), Some(existing));
    }

    #[tokio::test]
    async fn fails_when_store_unavailable() {
        let repo = Arc::new(MockPreferenceRepository::new().failing_writes());
        let handler = ProvisionPreferencesHandler::new(repo);

        let result = handler
            .handle(ProvisionPreferencesCommand {
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result, Err(PreferenceError::Infrastructure(_))));
    }
}

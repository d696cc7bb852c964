//! InterpretCommandHandler - Runs a free-text command against the caller's
//! preferences and persists the result when the command changed something.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::UserLocks;
use crate::domain::command::{interpret, CommandResult};
use crate::domain::foundation::UserId;
use crate::domain::preferences::{PreferenceError, PreferenceRecord};
use crate::ports::PreferenceRepository;

/// Command carrying the user's free-text message.
#[derive(Debug, Clone)]
pub struct InterpretCommandCommand {
    pub user_id: UserId,
    pub message: String,
}

/// Result of an interpreted command.
#[derive(Debug, Clone)]
pub struct InterpretCommandResult {
    /// Record after the command (unchanged for queries and unknown input).
    pub preferences: PreferenceRecord,
    pub outcome: CommandResult,
}

/// Handler for natural-language preference commands.
pub struct InterpretCommandHandler {
    repository: Arc<dyn PreferenceRepository>,
    locks: Arc<UserLocks>,
}

impl InterpretCommandHandler {
    pub fn new(repository: Arc<dyn PreferenceRepository>, locks: Arc<UserLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(
        &self,
        cmd: InterpretCommandCommand,
    ) -> Result<InterpretCommandResult, PreferenceError> {
        let _guard = self.locks.acquire(&cmd.user_id).await;

        // 1. Load current record
        let current = self
            .repository
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| PreferenceError::not_found(cmd.user_id.clone()))?;

        // 2. Interpret (pure)
        let (updated, outcome) = interpret(&cmd.message, &current);

        debug!(
            user_id = %cmd.user_id,
            action = %outcome.action,
            mutated = outcome.mutated,
            "Command interpreted"
        );

        // 3. Persist only when something changed; a failed save discards the reply
        if outcome.mutated {
            if let Err(e) = self.repository.save(&cmd.user_id, &updated).await {
                error!(user_id = %cmd.user_id, error = %e, "Failed to persist interpreted command");
                return Err(e.into());
            }
            info!(user_id = %cmd.user_id, action = %outcome.action, "Preferences updated by command");
        }

        Ok(InterpretCommandResult {
            preferences: updated,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::preferences::test_support::{
        test_user_id, MockPreferenceRepository,
    };
    use crate::domain::command::{CommandAction, HELP_REPLY};
    use crate::domain::preferences::{Language, Theme};

    fn handler(repo: Arc<MockPreferenceRepository>) -> InterpretCommandHandler {
        InterpretCommandHandler::new(repo, Arc::new(UserLocks::new()))
    }

    fn command(message: &str) -> InterpretCommandCommand {
        InterpretCommandCommand {
            user_id: test_user_id(),
            message: message.to_string(),
        }
    }

    fn repo_with_defaults() -> Arc<MockPreferenceRepository> {
        Arc::new(MockPreferenceRepository::new().with_record(&test_user_id(), PreferenceRecord::default()))
    }

    #[tokio::test]
    async fn mutation_is_persisted() {
        let repo = repo_with_defaults();

        let result = handler(repo.clone())
            .handle(command("Please set my theme to dark"))
            .await
            .unwrap();

        assert_eq!(result.outcome.action, CommandAction::ThemeUpdated);
        assert_eq!(result.outcome.reply, "I've updated your theme to dark mode.");
        assert_eq!(result.preferences.theme, Theme::Dark);
        assert_eq!(repo.stored(&test_user_id()).unwrap().theme, Theme::Dark);
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn combined_command_is_persisted_once() {
        let repo = repo_with_defaults();

        let result = handler(repo.clone())
            .handle(command("turn off notifications and change language to spanish"))
            .await
            .unwrap();

        assert_eq!(result.outcome.action, CommandAction::NotificationsUpdated);
        assert_eq!(
            repo.stored(&test_user_id()),
            Some(PreferenceRecord::new(Theme::Light, Language::spanish(), false))
        );
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn query_does_not_save() {
        let repo = Arc::new(MockPreferenceRepository::new().with_record(
            &test_user_id(),
            PreferenceRecord::new(Theme::Dark, Language::english(), true),
        ));

        let result = handler(repo.clone())
            .handle(command("what theme am I using?"))
            .await
            .unwrap();

        assert_eq!(result.outcome.action, CommandAction::ThemeInfo);
        assert_eq!(result.outcome.reply, "Your current theme is set to dark mode.");
        assert!(!result.outcome.mutated);
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn unknown_command_returns_help_without_saving() {
        let repo = repo_with_defaults();

        let result = handler(repo.clone()).handle(command("hello")).await.unwrap();

        assert_eq!(result.outcome.action, CommandAction::UnknownCommand);
        assert_eq!(result.outcome.reply, HELP_REPLY);
        assert_eq!(result.preferences, PreferenceRecord::default());
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn fails_with_not_found_when_no_record() {
        let repo = Arc::new(MockPreferenceRepository::new());

        let result = handler(repo).handle(command("theme dark")).await;

        assert_eq!(result.unwrap_err(), PreferenceError::not_found(test_user_id()));
    }

    #[tokio::test]
    async fn save_failure_discards_the_result() {
        let repo = Arc::new(
            MockPreferenceRepository::new()
                .with_record(&test_user_id(), PreferenceRecord::default())
                .failing_writes(),
        );

        let result = handler(repo.clone()).handle(command("theme dark")).await;

        assert!(matches!(result, Err(PreferenceError::Infrastructure(_))));
        assert_eq!(repo.stored(&test_user_id()), Some(PreferenceRecord::default()));
    }

    #[tokio::test]
    async fn query_succeeds_even_when_writes_fail() {
        let repo = Arc::new(
            MockPreferenceRepository::new()
                .with_record(&test_user_id(), PreferenceRecord::default())
                .failing_writes(),
        );

        let result = handler(repo).handle(command("notification status")).await.unwrap();

        assert_eq!(result.outcome.action, CommandAction::NotificationsInfo);
        assert_eq!(result.outcome.reply, "Your notifications are currently enabled.");
    }

    #[tokio::test]
    async fn concurrent_commands_for_same_user_both_land() {
        let repo = repo_with_defaults();
        let handler = Arc::new(handler(repo.clone()));

        let theme = {
            let handler = handler.clone();
            tokio::spawn(async move { handler.handle(command("theme dark")).await })
        };
        let language = {
            let handler = handler.clone();
            tokio::spawn(async move { handler.handle(command("bahasa indonesia")).await })
        };

        theme.await.unwrap().unwrap();
        language.await.unwrap().unwrap();

        let stored = repo.stored(&test_user_id()).unwrap();
        assert_eq!(stored.theme, Theme::Dark);
        assert_eq!(stored.language, Language::indonesia());
        assert_eq!(repo.save_count(), 2);
    }
}

//! Action tags and the interpreter's result type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which branch of the interpreter produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    ThemeUpdated,
    LanguageUpdated,
    NotificationsUpdated,
    ThemeInfo,
    LanguageInfo,
    NotificationsInfo,
    UnknownCommand,
}

impl CommandAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandAction::ThemeUpdated => "theme_updated",
            CommandAction::LanguageUpdated => "language_updated",
            CommandAction::NotificationsUpdated => "notifications_updated",
            CommandAction::ThemeInfo => "theme_info",
            CommandAction::LanguageInfo => "language_info",
            CommandAction::NotificationsInfo => "notifications_info",
            CommandAction::UnknownCommand => "unknown_command",
        }
    }

    /// True for the three `*_updated` tags.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            CommandAction::ThemeUpdated
                | CommandAction::LanguageUpdated
                | CommandAction::NotificationsUpdated
        )
    }
}

impl fmt::Display for CommandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of interpreting one message. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Human-readable answer for the caller.
    pub reply: String,
    /// Branch that produced the answer.
    pub action: CommandAction,
    /// Whether the caller must persist the updated record.
    pub mutated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_snake_case_tag() {
        assert_eq!(
            serde_json::to_string(&CommandAction::NotificationsUpdated).unwrap(),
            "\"notifications_updated\""
        );
        assert_eq!(CommandAction::UnknownCommand.to_string(), "unknown_command");
    }

    #[test]
    fn only_updated_tags_are_mutations() {
        assert!(CommandAction::ThemeUpdated.is_mutation());
        assert!(CommandAction::LanguageUpdated.is_mutation());
        assert!(CommandAction::NotificationsUpdated.is_mutation());
        assert!(!CommandAction::ThemeInfo.is_mutation());
        assert!(!CommandAction::UnknownCommand.is_mutation());
    }
}

//! Keyword-driven interpretation of free-text preference commands.
//!
//! The interpreter is a pure function over `(text, current record)`. It runs
//! two ordered tables:
//!
//! 1. `MUTATION_RULES` - theme, language, notifications. Every rule is
//!    checked; each one whose category word and a value word both match sets
//!    its field. The action tag of the last rule that fired wins.
//! 2. `QUERY_RULES` - only consulted when no mutation fired. The first rule
//!    whose trigger sets all match decides the action.
//!
//! Anything else falls back to `unknown_command`.

use crate::domain::preferences::{Language, PreferenceRecord, Theme};

use super::action::{CommandAction, CommandResult};
use super::triggers::{
    any_matches, Trigger, DARK_WORDS, ENGLISH_WORDS, INDONESIA_WORDS, LANGUAGE_WORDS,
    LIGHT_WORDS, NOTIFICATION_WORDS, OFF_WORDS, ON_WORDS, SPANISH_WORDS, STATUS_OR_WHAT_WORDS,
    THEME_WORDS, WHAT_WORDS,
};

/// Help text returned for unrecognized input.
pub const HELP_REPLY: &str = "I'm sorry, I don't understand that command. You can ask me to change your theme, language, or notification settings.";

/// Field setter of a mutation choice.
#[derive(Debug, Clone, Copy)]
enum Setting {
    Theme(Theme),
    Language(fn() -> Language),
    Notifications(bool),
}

impl Setting {
    fn apply(&self, record: &mut PreferenceRecord) {
        match self {
            Setting::Theme(theme) => record.theme = *theme,
            Setting::Language(language) => record.language = language(),
            Setting::Notifications(enabled) => record.notifications = *enabled,
        }
    }
}

/// A value trigger and the field value it selects.
struct Choice {
    triggers: &'static [Trigger],
    setting: Setting,
}

/// One mutation category: checked in table order, choices first-match.
struct MutationRule {
    category: &'static [Trigger],
    choices: &'static [Choice],
    action: CommandAction,
}

const MUTATION_RULES: &[MutationRule] = &[
    MutationRule {
        category: THEME_WORDS,
        choices: &[
            Choice {
                triggers: DARK_WORDS,
                setting: Setting::Theme(Theme::Dark),
            },
            Choice {
                triggers: LIGHT_WORDS,
                setting: Setting::Theme(Theme::Light),
            },
        ],
        action: CommandAction::ThemeUpdated,
    },
    MutationRule {
        category: LANGUAGE_WORDS,
        choices: &[
            Choice {
                triggers: ENGLISH_WORDS,
                setting: Setting::Language(Language::english),
            },
            Choice {
                triggers: INDONESIA_WORDS,
                setting: Setting::Language(Language::indonesia),
            },
            Choice {
                triggers: SPANISH_WORDS,
                setting: Setting::Language(Language::spanish),
            },
        ],
        action: CommandAction::LanguageUpdated,
    },
    MutationRule {
        category: NOTIFICATION_WORDS,
        choices: &[
            Choice {
                triggers: ON_WORDS,
                setting: Setting::Notifications(true),
            },
            Choice {
                triggers: OFF_WORDS,
                setting: Setting::Notifications(false),
            },
        ],
        action: CommandAction::NotificationsUpdated,
    },
];

/// A read-only intent: every trigger set must match.
struct QueryRule {
    requires: &'static [&'static [Trigger]],
    action: CommandAction,
}

const QUERY_RULES: &[QueryRule] = &[
    QueryRule {
        requires: &[WHAT_WORDS, THEME_WORDS],
        action: CommandAction::ThemeInfo,
    },
    QueryRule {
        requires: &[WHAT_WORDS, LANGUAGE_WORDS],
        action: CommandAction::LanguageInfo,
    },
    QueryRule {
        requires: &[NOTIFICATION_WORDS, STATUS_OR_WHAT_WORDS],
        action: CommandAction::NotificationsInfo,
    },
];

/// Interprets `text` against the caller's current preferences.
///
/// Returns the (possibly) updated record and the result describing what
/// happened. `updated` equals `current` unless `result.mutated` is true.
/// Never fails: any input, including empty text, yields a result.
pub fn interpret(text: &str, current: &PreferenceRecord) -> (PreferenceRecord, CommandResult) {
    let message = text.to_lowercase();
    let mut updated = current.clone();
    let mut fired: Option<CommandAction> = None;

    for rule in MUTATION_RULES {
        if !any_matches(rule.category, &message) {
            continue;
        }
        if let Some(choice) = rule
            .choices
            .iter()
            .find(|choice| any_matches(choice.triggers, &message))
        {
            choice.setting.apply(&mut updated);
            fired = Some(rule.action);
        }
    }

    let (action, mutated) = match fired {
        Some(action) => (action, true),
        None => (detect_query(&message), false),
    };

    let reply = reply_for(action, &updated);
    (
        updated,
        CommandResult {
            reply,
            action,
            mutated,
        },
    )
}

fn detect_query(message: &str) -> CommandAction {
    QUERY_RULES
        .iter()
        .find(|rule| {
            rule.requires
                .iter()
                .all(|triggers| any_matches(triggers, message))
        })
        .map(|rule| rule.action)
        .unwrap_or(CommandAction::UnknownCommand)
}

/// Renders the reply for an action from the resulting record.
pub fn reply_for(action: CommandAction, record: &PreferenceRecord) -> String {
    match action {
        CommandAction::ThemeUpdated => {
            format!("I've updated your theme to {} mode.", record.theme)
        }
        CommandAction::LanguageUpdated => {
            format!("I've changed your language preference to {}.", record.language)
        }
        CommandAction::NotificationsUpdated => format!(
            "I've turned notifications {} for you.",
            if record.notifications { "on" } else { "off" }
        ),
        CommandAction::ThemeInfo => {
            format!("Your current theme is set to {} mode.", record.theme)
        }
        CommandAction::LanguageInfo => {
            format!("Your current language is set to {}.", record.language)
        }
        CommandAction::NotificationsInfo => format!(
            "Your notifications are currently {}.",
            if record.notifications { "enabled" } else { "disabled" }
        ),
        CommandAction::UnknownCommand => HELP_REPLY.to_string(),
    }
}

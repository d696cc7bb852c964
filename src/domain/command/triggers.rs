//! Keyword triggers and the trigger vocabulary of the command assistant.
//!
//! All matching happens on lowercased input. Most triggers are plain
//! substrings; the short ones that occur inside other trigger words
//! ("on" in "notification", "aktif" in "nonaktif") only match whole words.

/// A single keyword test against lowercased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Matches anywhere in the text.
    Substring(&'static str),
    /// Matches a complete word; words are runs of alphanumeric characters.
    Word(&'static str),
}

impl Trigger {
    /// Tests the trigger against text that is already lowercased.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Trigger::Substring(needle) => text.contains(needle),
            Trigger::Word(word) => text
                .split(|c: char| !c.is_alphanumeric())
                .any(|candidate| candidate == *word),
        }
    }
}

/// True if any trigger of the set matches.
pub fn any_matches(triggers: &[Trigger], text: &str) -> bool {
    triggers.iter().any(|trigger| trigger.matches(text))
}

// Category words (English + Indonesian).

pub const THEME_WORDS: &[Trigger] = &[Trigger::Substring("theme"), Trigger::Substring("tema")];

pub const LANGUAGE_WORDS: &[Trigger] = &[
    Trigger::Substring("language"),
    Trigger::Substring("bahasa"),
];

pub const NOTIFICATION_WORDS: &[Trigger] = &[
    Trigger::Substring("notification"),
    Trigger::Substring("notifikasi"),
];

// Theme values.

pub const DARK_WORDS: &[Trigger] = &[Trigger::Substring("dark"), Trigger::Substring("gelap")];

pub const LIGHT_WORDS: &[Trigger] = &[Trigger::Substring("light"), Trigger::Substring("terang")];

// Language values. "indonesia" also covers "indonesian".

pub const ENGLISH_WORDS: &[Trigger] = &[
    Trigger::Substring("english"),
    Trigger::Substring("inggris"),
];

pub const INDONESIA_WORDS: &[Trigger] = &[Trigger::Substring("indonesia")];

pub const SPANISH_WORDS: &[Trigger] = &[
    Trigger::Substring("spanish"),
    Trigger::Substring("spanyol"),
];

// Notification values.

pub const ON_WORDS: &[Trigger] = &[
    Trigger::Word("on"),
    Trigger::Substring("enable"),
    Trigger::Word("aktif"),
];

pub const OFF_WORDS: &[Trigger] = &[
    Trigger::Substring("off"),
    Trigger::Substring("disable"),
    Trigger::Substring("nonaktif"),
];

// Query words.

pub const WHAT_WORDS: &[Trigger] = &[Trigger::Substring("what")];

pub const STATUS_OR_WHAT_WORDS: &[Trigger] = &[
    Trigger::Substring("status"),
    Trigger::Substring("what"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_matches_inside_words() {
        assert!(Trigger::Substring("theme").matches("themes please"));
        assert!(Trigger::Substring("indonesia").matches("indonesian"));
    }

    #[test]
    fn word_requires_whole_word() {
        assert!(Trigger::Word("on").matches("turn notifications on"));
        assert!(Trigger::Word("on").matches("on, please"));
        assert!(!Trigger::Word("on").matches("notification"));
        assert!(!Trigger::Word("on").matches("turn off notifications"));
    }

    #[test]
    fn aktif_does_not_match_nonaktif() {
        assert!(!any_matches(ON_WORDS, "notifikasi nonaktif"));
        assert!(any_matches(OFF_WORDS, "notifikasi nonaktif"));
        assert!(any_matches(ON_WORDS, "notifikasi aktif"));
    }

    #[test]
    fn enable_is_not_part_of_disable() {
        assert!(!any_matches(ON_WORDS, "disable notifications"));
        assert!(any_matches(OFF_WORDS, "disable notifications"));
    }

    #[test]
    fn any_matches_on_empty_text_is_false() {
        assert!(!any_matches(THEME_WORDS, ""));
        assert!(!any_matches(ON_WORDS, ""));
    }
}

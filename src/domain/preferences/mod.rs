//! Preferences module - the per-user settings record.
//!
//! - `record` - `PreferenceRecord` and its `Theme` / `Language` fields
//! - `patch` - direct partial updates with domain validation
//! - `errors` - `PreferenceError`

mod errors;
mod patch;
mod record;

pub use errors::PreferenceError;
pub use patch::PreferencePatch;
pub use record::{Language, PreferenceRecord, Theme, MAX_LANGUAGE_LEN};

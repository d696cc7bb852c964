//! Preference handlers.
//!
//! - `GetPreferencesHandler` - read the caller's record
//! - `UpdatePreferencesHandler` - direct partial update
//! - `ProvisionPreferencesHandler` - create the default record for a new user
//! - `InterpretCommandHandler` - natural-language command over the record

mod get_preferences;
mod interpret_command;
mod provision_preferences;
mod update_preferences;

#[cfg(test)]
pub(crate) mod test_support;

pub use get_preferences::{GetPreferencesHandler, GetPreferencesQuery};
pub use interpret_command::{
    InterpretCommandCommand, InterpretCommandHandler, InterpretCommandResult,
};
pub use provision_preferences::{ProvisionPreferencesCommand, ProvisionPreferencesHandler};
pub use update_preferences::{UpdatePreferencesCommand, UpdatePreferencesHandler};

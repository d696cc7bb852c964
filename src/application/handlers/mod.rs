//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod preferences;

pub use preferences::{
    GetPreferencesHandler, GetPreferencesQuery, InterpretCommandCommand,
    InterpretCommandHandler, InterpretCommandResult, ProvisionPreferencesCommand,
    ProvisionPreferencesHandler, UpdatePreferencesCommand, UpdatePreferencesHandler,
};

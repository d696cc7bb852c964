//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
mod user_locks;

pub use handlers::{
    GetPreferencesHandler, GetPreferencesQuery, InterpretCommandCommand,
    InterpretCommandHandler, InterpretCommandResult, ProvisionPreferencesCommand,
    ProvisionPreferencesHandler, UpdatePreferencesCommand, UpdatePreferencesHandler,
};
pub use user_locks::UserLocks;

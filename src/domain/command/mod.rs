//! Command module - the natural-language preference assistant.
//!
//! Maps keyword patterns in free text to preference mutations and queries.
//! See `interpreter` for the evaluation order.

mod action;
mod interpreter;
mod triggers;

pub use action::{CommandAction, CommandResult};
pub use interpreter::{interpret, reply_for, HELP_REPLY};
pub use triggers::Trigger;

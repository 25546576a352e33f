//! Application services (use cases).
//!
//! Command lookup, reply rendering, and the per-event handler that ties a
//! rate source to a chat transport.

pub mod command;
pub mod message;
pub mod router;

pub use command::{bot_commands, Command, COMMAND_TABLE};
pub use router::{process_event, MessageRouter};

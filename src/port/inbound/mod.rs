//! Inbound ports (driving side): what chat transports hand to the application.

pub mod chat;

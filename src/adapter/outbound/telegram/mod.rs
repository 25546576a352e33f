//! Telegram chat transport.
//!
//! [`connect`] builds the long-lived bot client once at startup, [`run`]
//! feeds long-polled updates through the router, and [`TelegramTransport`]
//! delivers the replies.
//!
//! Requires the `telegram` feature to be enabled.

mod listener;
mod transport;

pub use listener::{connect, run};
pub use transport::TelegramTransport;

//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌───────────────┐     ┌──────────────────┐     ┌──────────────┐
//!   │ ChatTransport │ ──▶ │  MessageRouter   │ ──▶ │  RateSource  │
//!   │   (inbound)   │ ◀── │  (application)   │     │  (outbound)  │
//!   └───────────────┘     └──────────────────┘     └──────────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::chat::InboundEvent;
pub use outbound::rate::RateSource;
pub use outbound::transport::{ChatTransport, OutboundMessage, ReplyMenu};

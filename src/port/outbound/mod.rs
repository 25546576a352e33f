//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the upstream rate endpoint and reply delivery.

pub mod rate;
pub mod transport;

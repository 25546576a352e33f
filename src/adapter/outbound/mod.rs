//! Outbound adapters (driven side).

pub mod grinex;

#[cfg(feature = "telegram")]
pub mod telegram;

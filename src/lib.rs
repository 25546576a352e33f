//! kursbot - USDT/RUB rate bot for an exchange office.
//!
//! The bot polls the Grinex rate table, derives four buy and four sell price
//! tiers from the USDT/RUB (A7A5) quote with fixed margins, and answers a
//! handful of chat commands with the price table or static office details.
//!
//! # Architecture
//!
//! - **`domain`** - Raw quotes, snapshots, tier offsets, and price tables
//! - **`port`** - `RateSource` and `ChatTransport` traits plus chat message types
//! - **`application`** - Command table, reply texts, and the stateless router
//! - **`adapter`** - Grinex HTTP rate source and Telegram transport
//! - **`infrastructure`** - Configuration, logging, and runtime wiring
//! - **`cli`** - `run`, `rate`, and `check` subcommands
//!
//! # Features
//!
//! - `telegram` (default) - Telegram transport via teloxide
//!
//! # Example
//!
//! ```
//! use kursbot::domain::{derive, RateSnapshot};
//! use rust_decimal_macros::dec;
//!
//! let table = derive(&RateSnapshot::new(dec!(80.00), dec!(81.00)));
//! assert_eq!(table.buy()[0], dec!(79.35));
//! assert_eq!(table.sell()[0], dec!(81.93));
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

//! Exchange-office domain: raw upstream quotes and the tiered prices derived
//! from them. Nothing here performs I/O.

mod quote;
mod rate;

pub use quote::{checked_derive, derive, display_price, PriceTable, Tier, BUY_OFFSETS, SELL_OFFSETS, TIER_COUNT};
pub use rate::{RateSnapshot, RawQuote, RawRateTable, PAIR_OF_INTEREST};

//! Raw upstream quotes and the snapshot extracted from them.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::quote::checked_derive;
use crate::error::RateError;

/// Symbol of the USDT/RUB (A7A5) pair in the upstream rate table.
pub const PAIR_OF_INTEREST: &str = "usdta7a5";

/// One entry of the upstream rate table.
///
/// Both sides arrive as string-encoded decimals. A missing field decodes to an
/// empty string, which [`RateSnapshot::from_table`] treats as unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawQuote {
    #[serde(default)]
    pub sell: String,
    #[serde(default)]
    pub buy: String,
}

/// Upstream rate table keyed by trading-pair symbol.
pub type RawRateTable = HashMap<String, RawQuote>;

/// Bid and ask for the pair of interest at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSnapshot {
    bid: Decimal,
    ask: Decimal,
}

impl RateSnapshot {
    #[must_use]
    pub const fn new(bid: Decimal, ask: Decimal) -> Self {
        Self { bid, ask }
    }

    /// Price at which the upstream market buys USDT.
    #[must_use]
    pub const fn bid(&self) -> Decimal {
        self.bid
    }

    /// Price at which the upstream market sells USDT.
    #[must_use]
    pub const fn ask(&self) -> Decimal {
        self.ask
    }

    /// Extract the pair of interest from an upstream table.
    ///
    /// The upstream `buy` field becomes the bid and `sell` becomes the ask.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::Unavailable`] if the pair is missing or either side
    /// is blank, and [`RateError::Parse`] if either side is not a decimal or
    /// is so large that a price tier would leave the `Decimal` range.
    pub fn from_table(table: &RawRateTable) -> Result<Self, RateError> {
        let quote = table.get(PAIR_OF_INTEREST).ok_or(RateError::Unavailable)?;
        if quote.buy.is_empty() || quote.sell.is_empty() {
            return Err(RateError::Unavailable);
        }

        let bid = parse_side("buy", &quote.buy)?;
        let ask = parse_side("sell", &quote.sell)?;
        let snapshot = Self { bid, ask };

        if checked_derive(&snapshot).is_none() {
            return Err(RateError::Parse(format!(
                "buy = \"{}\", sell = \"{}\" out of range",
                quote.buy, quote.sell
            )));
        }
        Ok(snapshot)
    }
}

fn parse_side(side: &'static str, raw: &str) -> Result<Decimal, RateError> {
    Decimal::from_str(raw).map_err(|_| RateError::Parse(format!("{side} = \"{raw}\"")))
}

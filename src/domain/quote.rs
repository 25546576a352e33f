//! Tiered office prices derived from a rate snapshot.
//!
//! The office buys USDT below the upstream bid and sells above the upstream
//! ask. Each volume tier carries its own margin, shrinking as volume grows.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::rate::RateSnapshot;

/// Number of volume tiers on each side of the table.
pub const TIER_COUNT: usize = 4;

/// Subtracted from the bid, smallest volume tier first.
pub const BUY_OFFSETS: [Decimal; TIER_COUNT] = [dec!(0.65), dec!(0.55), dec!(0.45), dec!(0.35)];

/// Added to the ask, smallest volume tier first.
pub const SELL_OFFSETS: [Decimal; TIER_COUNT] = [dec!(0.93), dec!(0.83), dec!(0.67), dec!(0.57)];

/// Declared deal volume band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Under1000,
    From1000To5000,
    From5000To10000,
    From10000,
}

impl Tier {
    /// All tiers in table order.
    pub const ALL: [Self; TIER_COUNT] = [
        Self::Under1000,
        Self::From1000To5000,
        Self::From5000To10000,
        Self::From10000,
    ];

    /// Label shown in the rate message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under1000 => "до 1000 USDT",
            Self::From1000To5000 => "1000–5000 USDT",
            Self::From5000To10000 => "5000–10000 USDT",
            Self::From10000 => "10000 USDT и выше",
        }
    }
}

/// Office prices for every tier, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    buy: [Decimal; TIER_COUNT],
    sell: [Decimal; TIER_COUNT],
}

impl PriceTable {
    /// Prices at which the office buys USDT from the customer.
    #[must_use]
    pub const fn buy(&self) -> &[Decimal; TIER_COUNT] {
        &self.buy
    }

    /// Prices at which the office sells USDT to the customer.
    #[must_use]
    pub const fn sell(&self) -> &[Decimal; TIER_COUNT] {
        &self.sell
    }

    /// Buy prices paired with their tier.
    pub fn buy_tiers(&self) -> impl Iterator<Item = (Tier, Decimal)> + '_ {
        Tier::ALL.into_iter().zip(self.buy.iter().copied())
    }

    /// Sell prices paired with their tier.
    pub fn sell_tiers(&self) -> impl Iterator<Item = (Tier, Decimal)> + '_ {
        Tier::ALL.into_iter().zip(self.sell.iter().copied())
    }
}

/// Apply the fixed tier offsets to a snapshot.
///
/// Snapshots built by [`RateSnapshot::from_table`] never leave the `Decimal`
/// range here; for hand-built ones at the very edge of the range the
/// affected tiers saturate instead of panicking.
#[must_use]
pub fn derive(snapshot: &RateSnapshot) -> PriceTable {
    let bid = snapshot.bid();
    let ask = snapshot.ask();

    PriceTable {
        buy: BUY_OFFSETS.map(|offset| bid.saturating_sub(offset)),
        sell: SELL_OFFSETS.map(|offset| ask.saturating_add(offset)),
    }
}

/// Apply the fixed tier offsets, or `None` if any tier leaves the `Decimal`
/// range.
#[must_use]
pub fn checked_derive(snapshot: &RateSnapshot) -> Option<PriceTable> {
    let bid = snapshot.bid();
    let ask = snapshot.ask();
    let mut table = PriceTable {
        buy: [Decimal::ZERO; TIER_COUNT],
        sell: [Decimal::ZERO; TIER_COUNT],
    };

    for i in 0..TIER_COUNT {
        table.buy[i] = bid.checked_sub(BUY_OFFSETS[i])?;
        table.sell[i] = ask.checked_add(SELL_OFFSETS[i])?;
    }
    Some(table)
}

/// Round a tier price to kopecks for display.
#[must_use]
pub fn display_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use crate::adapter::outbound::grinex::GrinexRates;
use crate::application::MessageRouter;
use crate::port::RateSource;

/// Rate source used in production.
#[must_use]
pub fn build_rate_source() -> Arc<dyn RateSource> {
    Arc::new(GrinexRates::new())
}

/// Router wired to the production rate source.
#[must_use]
pub fn build_router() -> MessageRouter {
    MessageRouter::new(build_rate_source())
}

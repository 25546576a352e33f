//! Rate source port.

use async_trait::async_trait;

use crate::domain::RateSnapshot;
use crate::error::RateError;

/// Source of bid/ask quotes for the pair of interest.
///
/// Every call re-fetches; implementations must not cache.
///
/// # Errors
///
/// [`fetch`](Self::fetch) fails with [`RateError::Network`] when the request
/// cannot be completed, [`RateError::Parse`] when the payload or a quote is
/// malformed, and [`RateError::Unavailable`] when the pair is missing or blank.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Source name for logging.
    fn name(&self) -> &'static str;

    /// Fetch a fresh snapshot.
    async fn fetch(&self) -> Result<RateSnapshot, RateError>;
}

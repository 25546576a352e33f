//! Grinex public rate table.
//!
//! Provides an implementation of the [`RateSource`] trait backed by the
//! exchange's unauthenticated JSON rate endpoint.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::{RateSnapshot, RawRateTable};
use crate::error::RateError;
use crate::port::RateSource;

/// Rate table endpoint, first page.
pub const DEFAULT_ENDPOINT: &str = "https://grinex.io/rates?offset=0";

/// Rate source reading the Grinex rate table.
///
/// Each [`fetch`](RateSource::fetch) issues exactly one `GET`; there is no
/// retry and no caching.
#[derive(Debug, Clone)]
pub struct GrinexRates {
    /// HTTP client for rate requests.
    client: Client,
    /// Full URL of the rate table.
    endpoint: String,
}

impl GrinexRates {
    /// Create a source pointed at [`DEFAULT_ENDPOINT`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a source pointed at another endpoint serving the same format.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for GrinexRates {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a rate table body and extract the pair of interest.
///
/// # Errors
///
/// Returns [`RateError::Parse`] for malformed JSON, otherwise the errors of
/// [`RateSnapshot::from_table`].
pub fn snapshot_from_body(body: &str) -> Result<RateSnapshot, RateError> {
    let table: RawRateTable =
        serde_json::from_str(body).map_err(|e| RateError::Parse(e.to_string()))?;
    RateSnapshot::from_table(&table)
}

/// Render an error with every distinct message of its `source()` chain.
///
/// `reqwest` keeps the useful part (refused connection, DNS failure, TLS
/// failure) in nested sources while its own message only names the URL.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn network_error(err: &reqwest::Error) -> RateError {
    RateError::Network(error_chain(err))
}

#[async_trait]
impl RateSource for GrinexRates {
    fn name(&self) -> &'static str {
        "grinex"
    }

    async fn fetch(&self) -> Result<RateSnapshot, RateError> {
        debug!(url = %self.endpoint, "Fetching rate table");

        let body = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| network_error(&e))?
            .text()
            .await
            .map_err(|e| network_error(&e))?;

        let snapshot = snapshot_from_body(&body)?;
        debug!(bid = %snapshot.bid(), ask = %snapshot.ask(), "Fetched rate snapshot");
        Ok(snapshot)
    }
}

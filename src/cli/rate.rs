//! Handler for the `rate` command.

use chrono::Local;

use crate::application::message::rate_text;
use crate::cli::output;
use crate::domain::{derive, display_price};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_rate_source;

/// Fetch one snapshot and print the upstream quotes and the customer message.
pub async fn execute() -> Result<()> {
    let source = build_rate_source();
    let snapshot = source.fetch().await?;
    let table = derive(&snapshot);

    output::section("Upstream quote");
    output::key_value("Source", source.name());
    output::key_value("Fetched at", Local::now().format("%Y-%m-%d %H:%M:%S"));
    output::key_value("Bid", display_price(snapshot.bid()));
    output::key_value("Ask", display_price(snapshot.ask()));

    output::section("Customer message");
    println!("{}", rate_text(&table));
    Ok(())
}

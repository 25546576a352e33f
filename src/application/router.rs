//! Stateless dispatch of inbound chat text to replies.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::derive;
use crate::port::{ChatTransport, InboundEvent, OutboundMessage, RateSource};

use super::command::{Command, COMMAND_TABLE};
use super::message::{main_menu, rate_error_text, rate_text, ABOUT_TEXT, WELCOME_TEXT};

/// Maps inbound text to a reply.
///
/// Holds no per-chat state, so one router can serve every chat concurrently.
#[derive(Clone)]
pub struct MessageRouter {
    rates: Arc<dyn RateSource>,
    commands: HashMap<&'static str, Command>,
}

impl MessageRouter {
    /// Create a router answering [`COMMAND_TABLE`].
    #[must_use]
    pub fn new(rates: Arc<dyn RateSource>) -> Self {
        Self {
            rates,
            commands: COMMAND_TABLE.iter().copied().collect(),
        }
    }

    /// Look up the command for an exact message text.
    #[must_use]
    pub fn route(&self, text: &str) -> Option<Command> {
        self.commands.get(text).copied()
    }

    /// Build the reply for one event, or `None` if the event is ignored.
    ///
    /// Events without text and texts outside the command table are dropped
    /// silently. Only [`Command::CurrentRate`] touches the rate source.
    pub async fn handle(&self, event: &InboundEvent) -> Option<OutboundMessage> {
        let text = event.text.as_deref()?;
        let Some(command) = self.route(text) else {
            debug!(chat_id = event.chat_id, "Ignoring unrecognized message");
            return None;
        };

        info!(chat_id = event.chat_id, command = ?command, "Handling command");
        Some(self.execute(event.chat_id, command).await)
    }

    /// Execute one command and return the reply.
    pub async fn execute(&self, chat_id: i64, command: Command) -> OutboundMessage {
        match command {
            Command::Start => OutboundMessage::new(chat_id, WELCOME_TEXT).with_menu(main_menu()),
            Command::CurrentRate => OutboundMessage::new(chat_id, self.rate_reply().await),
            Command::About => OutboundMessage::new(chat_id, ABOUT_TEXT),
        }
    }

    async fn rate_reply(&self) -> String {
        match self.rates.fetch().await {
            Ok(snapshot) => rate_text(&derive(&snapshot)),
            Err(e) => {
                warn!(source = self.rates.name(), error = %e, "Rate fetch failed");
                rate_error_text(&e)
            }
        }
    }
}

/// Handle one inbound event and deliver the reply, if any, through `transport`.
///
/// Delivery failures are logged and never propagated, so one bad event cannot
/// stop the update loop.
pub async fn process_event(
    router: &MessageRouter,
    transport: &dyn ChatTransport,
    event: InboundEvent,
) {
    let Some(reply) = router.handle(&event).await else {
        return;
    };

    if let Err(e) = transport.send(reply).await {
        error!(chat_id = event.chat_id, error = %e, "Failed to send reply");
    }
}

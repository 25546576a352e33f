use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use teloxide::update_listeners::Polling;
use tracing::{info, warn};

use crate::application::{bot_commands, process_event, MessageRouter};
use crate::error::{Error, Result};
use crate::infrastructure::config::TelegramSettings;
use crate::port::InboundEvent;

use super::transport::TelegramTransport;

/// Build the bot client and verify the token with `getMe`.
///
/// The HTTP client timeout is derived from the long-polling timeout so an
/// idle `getUpdates` returns before the client gives up on it.
///
/// # Errors
///
/// Returns [`Error::Telegram`] if the HTTP client cannot be built, or if
/// Telegram rejects the token or cannot be reached.
pub async fn connect(token: &str, settings: &TelegramSettings) -> Result<Bot> {
    let client = teloxide::net::default_reqwest_settings()
        .timeout(settings.client_timeout())
        .build()
        .map_err(|e| Error::Telegram(format!("failed to build HTTP client: {e}")))?;
    let bot = Bot::with_client(token, client);
    let me = bot
        .get_me()
        .await
        .map_err(|e| Error::Telegram(format!("failed to authorize bot: {e}")))?;

    info!(
        username = me.user.username.as_deref().unwrap_or("unknown"),
        "Authorized on Telegram"
    );
    Ok(bot)
}

/// Long-poll updates and answer them until the process is interrupted.
pub async fn run(bot: Bot, router: MessageRouter, settings: &TelegramSettings) {
    if settings.register_commands {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    let router = Arc::new(router);
    let transport = Arc::new(TelegramTransport::new(bot.clone()));
    let listener = Polling::builder(bot.clone())
        .timeout(settings.poll_timeout())
        .build();

    info!(
        poll_timeout_secs = settings.poll_timeout_secs,
        "Telegram update listener started"
    );

    teloxide::repl_with_listener(
        bot,
        move |msg: Message| {
            let router = Arc::clone(&router);
            let transport = Arc::clone(&transport);
            async move {
                process_event(&router, transport.as_ref(), inbound_event(&msg)).await;
                respond(())
            }
        },
        listener,
    )
    .await;

    info!("Telegram update listener stopped");
}

fn inbound_event(msg: &Message) -> InboundEvent {
    InboundEvent {
        chat_id: msg.chat.id.0,
        text: msg.text().map(str::to_owned),
    }
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> std::result::Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}

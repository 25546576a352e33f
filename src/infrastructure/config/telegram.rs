//! Telegram bot configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Environment variable holding the bot token from BotFather.
pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";

/// Largest long-polling timeout accepted in the config file, in seconds.
pub const MAX_POLL_TIMEOUT_SECS: u64 = 600;

/// Extra time the HTTP client allows a `getUpdates` call beyond the
/// long-polling timeout.
pub const CLIENT_TIMEOUT_MARGIN_SECS: u64 = 10;

const fn default_true() -> bool {
    true
}

/// Telegram update listener settings.
///
/// The bot token is never read from the config file; see [`bot_token_from_env`].
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramSettings {
    /// Long-polling timeout in seconds (default: 60).
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
    /// Register the "/" command menu at startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

const fn default_poll_timeout_secs() -> u64 {
    60
}

impl TelegramSettings {
    /// Long-polling timeout passed to `getUpdates`.
    #[must_use]
    pub const fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs)
    }

    /// Request timeout of the bot's HTTP client.
    ///
    /// Always longer than [`poll_timeout`](Self::poll_timeout); an idle long
    /// poll must end on Telegram's side, not as a client timeout.
    #[must_use]
    pub const fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs.saturating_add(CLIENT_TIMEOUT_MARGIN_SECS))
    }
}

impl Default for TelegramSettings {
    fn default() -> Self {
        Self {
            poll_timeout_secs: default_poll_timeout_secs(),
            register_commands: default_true(),
        }
    }
}

/// Read the bot token from [`BOT_TOKEN_VAR`].
///
/// # Errors
///
/// Returns [`ConfigError::MissingField`] if the variable is unset or empty.
pub fn bot_token_from_env() -> Result<String> {
    match std::env::var(BOT_TOKEN_VAR) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(ConfigError::MissingField {
            field: BOT_TOKEN_VAR,
        }
        .into()),
    }
}

//! Infrastructure configuration modules.

pub mod logging;
pub mod settings;
pub mod telegram;

pub use logging::LoggingConfig;
pub use settings::{Config, DEFAULT_CONFIG_PATH};
pub use telegram::{bot_token_from_env, TelegramSettings, BOT_TOKEN_VAR};

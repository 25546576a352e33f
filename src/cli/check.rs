//! Handler for `check` subcommands.

use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::config::{bot_token_from_env, Config, BOT_TOKEN_VAR, DEFAULT_CONFIG_PATH};

/// Validate configuration and token presence without contacting Telegram.
#[allow(clippy::result_large_err)]
pub fn execute_config(config_path: Option<&Path>) -> Result<()> {
    let source = match config_path {
        Some(path) => path.display().to_string(),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH.to_string(),
        None => "built-in defaults".to_string(),
    };

    output::section("Configuration Check");
    output::key_value("Source", &source);

    let config = Config::resolve(config_path)?;
    output::ok("Configuration is valid");
    output::key_value("Log level", &config.logging.level);
    output::key_value("Log format", &config.logging.format);
    output::key_value("Poll timeout", format!("{}s", config.telegram.poll_timeout_secs));
    output::key_value("Menu register", config.telegram.register_commands);

    match bot_token_from_env() {
        Ok(token) => {
            output::ok(&format!("{BOT_TOKEN_VAR} found"));
            output::key_value("Bot token", output::mask_secret(&token));
            Ok(())
        }
        Err(e) => {
            output::warn(&format!("{BOT_TOKEN_VAR} is not set (environment or .env)"));
            Err(e)
        }
    }
}

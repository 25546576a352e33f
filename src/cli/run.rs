//! Handler for the `run` command.

use tracing::{error, info};

use crate::cli::RunArgs;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute the run command.
///
/// `dotenv_loaded` reports whether a `.env` file was read before the CLI
/// started, so it can be logged once the subscriber exists.
pub async fn execute(args: &RunArgs, dotenv_loaded: bool) -> Result<()> {
    let mut config = Config::resolve(args.config.as_deref())?;

    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();
    if !dotenv_loaded {
        info!("No .env file loaded, using process environment");
    }
    info!("kursbot starting");

    let result = start(&config).await;
    if let Err(ref e) = result {
        error!(error = %e, "Fatal error");
    }
    result
}

#[cfg(feature = "telegram")]
async fn start(config: &Config) -> Result<()> {
    use crate::adapter::outbound::telegram;
    use crate::infrastructure::bootstrap::build_router;
    use crate::infrastructure::config::bot_token_from_env;

    let token = bot_token_from_env()?;
    let bot = telegram::connect(&token, &config.telegram).await?;

    telegram::run(bot, build_router(), &config.telegram).await;
    info!("kursbot stopped");
    Ok(())
}

#[cfg(not(feature = "telegram"))]
async fn start(_config: &Config) -> Result<()> {
    Err(crate::error::ConfigError::InvalidValue {
        field: "features",
        reason: "running the bot requires the telegram feature".to_string(),
    }
    .into())
}

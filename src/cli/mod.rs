//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod rate;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kursbot - USDT/RUB rate bot for an exchange office.
#[derive(Parser, Debug)]
#[command(name = "kursbot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (foreground)
    Run(RunArgs),

    /// Fetch the current rate once and print the price table
    Rate,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `kursbot check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file and bot token presence
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file (default: config.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file (default: config.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

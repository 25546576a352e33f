use clap::Parser;

use kursbot::cli::{check, rate, run, CheckCommand, Cli, Commands};
use kursbot::error::Result;

#[tokio::main]
async fn main() {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let cli = Cli::parse();

    let result: Result<()> = match &cli.command {
        Commands::Run(args) => run::execute(args, dotenv_loaded).await,
        Commands::Rate => rate::execute().await,
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(arg.config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

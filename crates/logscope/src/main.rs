//! LogScope CLI - browse, download and compare per-server daily logs

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set JSON output mode if requested
    output::set_json_mode(cli.json);

    let log_level = match (cli.verbose, &cli.command) {
        (0, Commands::Serve(_)) => "info",
        (0, _) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "logscope={0},logscope_core={0},logscope_logs={0},logscope_web={0},tower_http={0}",
                    log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match load_settings(&cli) {
        Ok(settings) => match cli.command {
            Commands::Serve(args) => serve::execute(settings, args).await,
            Commands::Servers => servers::execute(&settings),
            Commands::Logs(args) => logs::execute(&settings, args),
            Commands::Compare(args) => compare::execute(&settings, args),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

//! Syllo CLI - Command-line frontend for the ASP logic-reasoning backend.

use clap::Parser;
use syllo_cli::commands;
use syllo_cli::repl;
use syllo_cli::{Cli, Command, Config, Formatter};
use syllo_history::HistoryStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> syllo_cli::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Command-line endpoint wins over the config file
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // History lives in a single local slot; load failures fall back to empty
    let mut store = HistoryStore::new(Config::history_path()?);
    store.load();

    let client = commands::build_client(&config);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &client, &mut store, &formatter).await?;
        }
        Some(Command::Ask(args)) => {
            commands::execute_ask(args, &client, &mut store, &formatter).await?;
        }
        Some(Command::History(args)) => {
            commands::execute_history(args.action, &mut store, &formatter).await?;
        }
        Some(Command::Export(args)) => {
            commands::execute_export(args, &store, &formatter).await?;
        }
        Some(Command::Health) => {
            commands::execute_health(&client, &formatter).await?;
        }
    }

    Ok(())
}

//! MCP demos - CLI entry point
//!
//! Runs one demo server on stdin/stdout. Logs go to a file because stdout
//! carries the protocol.

use std::fs;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use mcpdemos::cli::{Cli, Command, get_log_path};
use mcpdemos::config::Config;
use mcpdemos::demos;

fn setup_logging(verbose: bool) -> Result<()> {
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Setup tracing subscriber - write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let server = match cli.command {
        Command::Hello => demos::hello_server(),
        Command::Resource => demos::resource_server(config.settings.clone()),
        Command::Prompt { prompts_dir } => {
            if let Some(dir) = prompts_dir {
                config.prompts.dir = dir;
            }
            demos::prompt_server(&config.prompts).await
        }
        Command::LogPath => {
            println!("{}", get_log_path().display());
            return Ok(());
        }
    };

    server.serve_stdio().await.context("Error running server")?;
    Ok(())
}

//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MCP demos - minimal Model Context Protocol servers over stdio
#[derive(Parser)]
#[command(
    name = "ms",
    about = "Minimal MCP servers exposing tools, resources and prompts over stdio",
    version,
    after_help = "Logs are written to: ~/.local/share/mcpdemos/logs/mcpdemos.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Demo server to run
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Serve the `add` tool
    Hello,

    /// Serve the app settings resource and the `get-config` tool
    Resource,

    /// Serve a prompt catalog through tools and prompt templates
    Prompt {
        /// Directory of *.txt prompt files (overrides config)
        #[arg(short, long)]
        prompts_dir: Option<PathBuf>,
    },

    /// Print the log file location
    LogPath,
}

/// Path of the log file the servers write to
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mcpdemos")
        .join("logs")
        .join("mcpdemos.log")
}

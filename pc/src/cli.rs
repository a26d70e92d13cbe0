//! CLI argument parsing for promptcatalog

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pc")]
#[command(author, version, about = "Inspect a directory of prompt files", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Prompt directory (overrides config)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every loaded prompt
    List,

    /// Print one prompt's content
    Show {
        /// Prompt name
        #[arg(required = true)]
        name: String,
    },

    /// List prompts supporting a language
    Language {
        /// Language identifier (case-insensitive)
        #[arg(required = true)]
        language: String,
    },

    /// List prompts in a category
    Category {
        /// Category name (exact match)
        #[arg(required = true)]
        category: String,

        /// Only prompts supporting this language
        #[arg(short, long)]
        language: Option<String>,
    },

    /// List all supported languages
    Languages,
}

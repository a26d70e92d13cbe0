use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use promptcatalog::cli::{Cli, Command};
use promptcatalog::config::Config;
use promptcatalog::{LoadedPrompt, PromptCatalog};

fn setup_logging(verbose: bool) -> Result<()> {
    // stdout carries command output, logs go to stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let dir = cli.dir.clone().unwrap_or(config.prompts.dir);

    info!(?dir, "promptcatalog starting");
    let mut catalog = PromptCatalog::new(&dir);
    let report = catalog.load_all().await;
    for err in &report.errors {
        eprintln!("{} {}", "warning:".yellow(), err);
    }

    match cli.command {
        Command::List => {
            let listing = catalog.list_all();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else if listing.is_empty() {
                println!("No prompts found in {}", dir.display());
            } else {
                for entry in listing {
                    println!(
                        "{} {} {} [{}]",
                        entry.name.cyan(),
                        format!("({})", entry.metadata.category.as_deref().unwrap_or("uncategorized")).dimmed(),
                        entry.metadata.description,
                        entry.metadata.languages.join(", ")
                    );
                }
            }
        }
        Command::Show { name } => {
            let prompt = catalog
                .get_by_name(&name)
                .ok_or_else(|| eyre::eyre!("Prompt not found: {}", name))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(prompt)?);
            } else {
                println!("{}", prompt.content);
            }
        }
        Command::Language { language } => {
            let prompts = catalog.get_by_language(&language.to_lowercase());
            print_prompts(&prompts, cli.json)?;
        }
        Command::Category { category, language } => {
            let mut prompts = catalog.get_by_category(&category);
            if let Some(language) = language {
                let language = language.to_lowercase();
                prompts.retain(|p| p.metadata.supports(&language));
            }
            print_prompts(&prompts, cli.json)?;
        }
        Command::Languages => {
            let languages = catalog.supported_languages();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&languages)?);
            } else {
                for language in languages {
                    println!("{}", language);
                }
            }
        }
    }

    Ok(())
}

fn print_prompts(prompts: &[&LoadedPrompt], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(prompts)?);
        return Ok(());
    }

    if prompts.is_empty() {
        println!("No matching prompts");
    }
    for prompt in prompts {
        println!("{} {}", prompt.name().cyan(), prompt.metadata.description);
    }
    Ok(())
}

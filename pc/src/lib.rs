//! PromptCatalog - directory-backed prompt index
//!
//! Loads prompt files (YAML header fenced by `---` lines, then free text)
//! from one directory and answers lookups by name, language and category.
//!
//! # Example
//!
//! ```ignore
//! use promptcatalog::PromptCatalog;
//!
//! let mut catalog = PromptCatalog::new("prompts");
//! let report = catalog.load_all().await;
//! let review = catalog.get_by_name("code-review");
//! let languages = catalog.supported_languages();
//! ```

mod catalog;
pub mod cli;
pub mod config;
mod error;
mod prompt;

pub use catalog::{LoadReport, PROMPT_EXTENSION, PromptCatalog, PromptListing};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use prompt::{FRONT_MATTER_DELIMITER, LoadedPrompt, PromptArgument, PromptMetadata, parse_prompt};

/// Default prompt directory, relative to the working directory
pub const DEFAULT_PROMPTS_DIR: &str = "prompts";

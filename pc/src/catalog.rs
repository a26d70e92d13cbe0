//! Prompt catalog
//!
//! Indexes every prompt file in a directory by name. The catalog is built by a
//! single `load_all` pass and is read-only afterwards, so it can be shared
//! between readers behind an `Arc` without locking.
//!
//! Loading is best effort:
//! - an unreadable directory leaves the catalog empty
//! - files without the `---` header convention are skipped silently
//! - files with a malformed header are reported and skipped
//!
//! A later file with the same `name` replaces an earlier one. Files are
//! visited in file-name order so the winner is deterministic.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::prompt::{LoadedPrompt, PromptMetadata, parse_prompt};

/// File extension of prompt files
pub const PROMPT_EXTENSION: &str = "txt";

/// Name and metadata of one catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct PromptListing<'a> {
    pub name: &'a str,
    pub metadata: &'a PromptMetadata,
}

/// Outcome of a `load_all` pass
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Files parsed into catalog entries
    pub loaded: usize,

    /// Files ignored for not following the header convention
    pub skipped: Vec<PathBuf>,

    /// Directory or file failures; none of them aborted the load
    pub errors: Vec<CatalogError>,
}

impl LoadReport {
    /// True when no file failed
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// In-memory index of prompts keyed by name
#[derive(Debug)]
pub struct PromptCatalog {
    /// Directory scanned by `load_all`
    dir: PathBuf,

    prompts: BTreeMap<String, LoadedPrompt>,
}

impl PromptCatalog {
    /// Create an empty catalog over a directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        debug!(?dir, "PromptCatalog::new: called");
        Self {
            dir,
            prompts: BTreeMap::new(),
        }
    }

    /// Create an empty catalog over the configured directory
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.dir.clone())
    }

    /// Create a catalog and load it to completion
    pub async fn load(dir: impl Into<PathBuf>) -> Self {
        let mut catalog = Self::new(dir);
        catalog.load_all().await;
        catalog
    }

    /// Scan the directory and index every prompt file
    ///
    /// Replaces anything loaded before. Never fails as a whole; failures are
    /// logged and returned in the report.
    pub async fn load_all(&mut self) -> LoadReport {
        debug!(dir = ?self.dir, "load_all: called");
        self.prompts.clear();
        let mut report = LoadReport::default();

        let paths = match prompt_files(&self.dir).await {
            Ok(paths) => paths,
            Err(e) => {
                error!(dir = ?self.dir, error = %e, "Failed to read prompt directory");
                report.errors.push(e);
                return report;
            }
        };

        let mut outcomes = Vec::with_capacity(paths.len());
        for path in paths {
            let outcome = load_file(&path).await;
            outcomes.push((path, outcome));
        }

        for (path, outcome) in outcomes {
            match outcome {
                Ok(Some(prompt)) => {
                    let name = prompt.metadata.name.clone();
                    if let Some(previous) = self.prompts.insert(name.clone(), prompt) {
                        warn!(%name, replaced = ?previous.path, by = ?path, "Duplicate prompt name, keeping later file");
                    }
                    report.loaded += 1;
                }
                Ok(None) => {
                    debug!(?path, "load_all: skipped file without header");
                    report.skipped.push(path);
                }
                Err(e) => {
                    warn!(?path, error = %e, "Failed to load prompt file");
                    report.errors.push(e);
                }
            }
        }

        info!(
            dir = ?self.dir,
            prompts = self.prompts.len(),
            skipped = report.skipped.len(),
            failed = report.errors.len(),
            "Loaded prompt catalog"
        );
        report
    }

    /// Every entry as `{name, metadata}`, ordered by name
    pub fn list_all(&self) -> Vec<PromptListing<'_>> {
        self.prompts
            .iter()
            .map(|(name, prompt)| PromptListing {
                name: name.as_str(),
                metadata: &prompt.metadata,
            })
            .collect()
    }

    /// Exact-match lookup
    pub fn get_by_name(&self, name: &str) -> Option<&LoadedPrompt> {
        debug!(%name, "PromptCatalog::get_by_name: called");
        self.prompts.get(name)
    }

    /// Entries listing the language, compared as stored (lowercase)
    pub fn get_by_language(&self, language: &str) -> Vec<&LoadedPrompt> {
        self.prompts
            .values()
            .filter(|p| p.metadata.supports(language))
            .collect()
    }

    /// Entries whose category equals the value; uncategorized entries never match
    pub fn get_by_category(&self, category: &str) -> Vec<&LoadedPrompt> {
        self.prompts
            .values()
            .filter(|p| p.metadata.category.as_deref() == Some(category))
            .collect()
    }

    /// Distinct languages across all entries, sorted ascending
    pub fn supported_languages(&self) -> Vec<String> {
        let languages: BTreeSet<&str> = self
            .prompts
            .values()
            .flat_map(|p| p.metadata.languages.iter().map(String::as_str))
            .collect();
        languages.into_iter().map(str::to_string).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadedPrompt> {
        self.prompts.values()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// List `.txt` files directly inside `dir`, sorted by file name
async fn prompt_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    debug!(?dir, "prompt_files: called");
    let io_err = |source| CatalogError::LoadIo {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err)?;
    let mut paths = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
        let path = entry.path();
        if path.extension().map(|e| e == PROMPT_EXTENSION).unwrap_or(false) {
            // Subdirectories are never recursed into, even if named like a prompt
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => paths.push(path),
                Ok(_) => debug!(?path, "prompt_files: not a regular file, skipping"),
                Err(e) => debug!(?path, error = %e, "prompt_files: could not stat, skipping"),
            }
        } else {
            debug!(?path, "prompt_files: skipping non-prompt file");
        }
    }

    paths.sort();
    debug!(?dir, count = paths.len(), "prompt_files: complete");
    Ok(paths)
}

/// Read and parse a single prompt file
async fn load_file(path: &Path) -> Result<Option<LoadedPrompt>, CatalogError> {
    debug!(?path, "load_file: called");
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::LoadIo {
            path: path.to_path_buf(),
            source,
        })?;
    parse_prompt(path, &text)
}

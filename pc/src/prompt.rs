//! Prompt file format
//!
//! A prompt file is a YAML header fenced by `---` lines followed by free text:
//!
//! ```text
//! ---
//! name: code-review
//! languages: [python, javascript]
//! description: Review code for bugs and style
//! version: "1.0"
//! category: review
//! ---
//! You are a meticulous reviewer...
//! ```
//!
//! The body is everything after the second delimiter, trimmed.

use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;

/// Delimiter line fencing the header block
pub const FRONT_MATTER_DELIMITER: &str = "---\n";

/// Metadata parsed from a prompt file header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMetadata {
    /// Unique key within a catalog
    pub name: String,

    /// Languages the prompt applies to (lowercase)
    pub languages: Vec<String>,

    #[serde(default, deserialize_with = "scalar_string")]
    pub description: String,

    #[serde(default, deserialize_with = "scalar_string")]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Placeholders the body expects when rendered as a template
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<PromptArgument>,
}

/// A named placeholder declared in a prompt header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptArgument {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub required: bool,
}

impl PromptMetadata {
    /// Parse and validate a header block
    pub fn from_header(header: &str) -> Result<Self, String> {
        let mut metadata: PromptMetadata = serde_yaml::from_str(header).map_err(|e| e.to_string())?;

        if metadata.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if metadata.languages.is_empty() {
            return Err("languages must list at least one language".to_string());
        }

        for language in metadata.languages.iter_mut() {
            *language = language.trim().to_lowercase();
        }

        Ok(metadata)
    }

    /// Check whether the prompt applies to a language (exact match)
    pub fn supports(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

/// A prompt held by the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedPrompt {
    pub metadata: PromptMetadata,

    /// Body text, trimmed
    pub content: String,

    /// File the prompt was loaded from
    pub path: PathBuf,
}

impl LoadedPrompt {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

/// Parse one prompt file
///
/// Returns `Ok(None)` for files that do not follow the header convention;
/// those are skipped without being reported.
pub fn parse_prompt(path: &Path, text: &str) -> Result<Option<LoadedPrompt>, CatalogError> {
    debug!(?path, len = text.len(), "parse_prompt: called");

    if !text.starts_with(FRONT_MATTER_DELIMITER) {
        debug!(?path, "parse_prompt: no leading delimiter, skipping");
        return Ok(None);
    }

    let segments: Vec<&str> = text.split(FRONT_MATTER_DELIMITER).collect();
    if segments.len() < 3 {
        debug!(?path, segments = segments.len(), "parse_prompt: header not closed, skipping");
        return Ok(None);
    }

    let metadata = PromptMetadata::from_header(segments[1]).map_err(|reason| CatalogError::HeaderParse {
        path: path.to_path_buf(),
        reason,
    })?;

    // Later delimiters belong to the body
    let content = segments[2..].join(FRONT_MATTER_DELIMITER).trim().to_string();

    debug!(?path, name = %metadata.name, "parse_prompt: parsed");
    Ok(Some(LoadedPrompt {
        metadata,
        content,
        path: path.to_path_buf(),
    }))
}

/// Accept any YAML scalar as text so `version: 1.0` survives
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!("expected a scalar, found {:?}", other))),
    }
}

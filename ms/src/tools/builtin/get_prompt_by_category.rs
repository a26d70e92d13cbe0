//! get-prompt-by-category tool - pick a prompt by category and language

use std::sync::Arc;

use async_trait::async_trait;
use promptcatalog::PromptCatalog;
use serde_json::Value;
use tracing::debug;

use crate::tools::{Tool, ToolResult};

/// Language assumed when the caller gives none
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Return the first prompt (by name) in a category that supports a language
pub struct GetPromptByCategoryTool {
    catalog: Arc<PromptCatalog>,
}

impl GetPromptByCategoryTool {
    pub fn new(catalog: Arc<PromptCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for GetPromptByCategoryTool {
    fn name(&self) -> &'static str {
        "get-prompt-by-category"
    }

    fn description(&self) -> &'static str {
        "Get a prompt by category for a programming language"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "Prompt category, e.g. algorithms"
                },
                "language": {
                    "type": "string",
                    "description": "Programming language (default: javascript)",
                    "default": DEFAULT_LANGUAGE
                }
            },
            "required": ["category"]
        })
    }

    async fn execute(&self, input: Value) -> ToolResult {
        let category = match input["category"].as_str() {
            Some(c) => c,
            None => return ToolResult::error("category is required"),
        };
        let language = input["language"].as_str().unwrap_or(DEFAULT_LANGUAGE);
        let normalized = language.to_lowercase();
        debug!(%category, %normalized, "get-prompt-by-category: called");

        let found = self
            .catalog
            .get_by_category(category)
            .into_iter()
            .find(|p| p.metadata.supports(&normalized));

        match found {
            Some(prompt) => ToolResult::success(prompt.content.clone()),
            None => ToolResult::success(format!(
                "No {} prompts found for {}. Use \"list-prompts\" to see what's available.",
                category, language
            )),
        }
    }
}

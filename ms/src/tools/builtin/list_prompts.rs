//! list-prompts tool - discovery of everything in the catalog

use std::sync::Arc;

use async_trait::async_trait;
use promptcatalog::PromptCatalog;
use serde_json::Value;

use crate::tools::{Tool, ToolResult};

/// Summarize every prompt in the catalog, one per line
pub struct ListPromptsTool {
    catalog: Arc<PromptCatalog>,
}

impl ListPromptsTool {
    pub fn new(catalog: Arc<PromptCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for ListPromptsTool {
    fn name(&self) -> &'static str {
        "list-prompts"
    }

    fn description(&self) -> &'static str {
        "List all available prompts with their category, description and languages"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, _input: Value) -> ToolResult {
        let summary: Vec<String> = self
            .catalog
            .list_all()
            .iter()
            .map(|p| {
                format!(
                    "{} ({}): {} - Languages: {}",
                    p.name,
                    p.metadata.category.as_deref().unwrap_or("uncategorized"),
                    p.metadata.description,
                    p.metadata.languages.join(", ")
                )
            })
            .collect();

        ToolResult::success(format!("Available prompts:\n{}", summary.join("\n")))
    }
}

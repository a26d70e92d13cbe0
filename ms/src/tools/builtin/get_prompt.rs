//! get-prompt tool - direct access by exact name

use std::sync::Arc;

use async_trait::async_trait;
use promptcatalog::PromptCatalog;
use serde_json::Value;

use crate::tools::{Tool, ToolResult};

/// Return the content of a prompt by name
pub struct GetPromptTool {
    catalog: Arc<PromptCatalog>,
}

impl GetPromptTool {
    pub fn new(catalog: Arc<PromptCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for GetPromptTool {
    fn name(&self) -> &'static str {
        "get-prompt"
    }

    fn description(&self) -> &'static str {
        "Get a prompt by its exact name"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Prompt name as shown by list-prompts"
                }
            },
            "required": ["name"]
        })
    }

    async fn execute(&self, input: Value) -> ToolResult {
        let name = match input["name"].as_str() {
            Some(n) => n,
            None => return ToolResult::error("name is required"),
        };

        // A missing prompt is an answer, not a failure
        match self.catalog.get_by_name(name) {
            Some(prompt) => ToolResult::success(prompt.content.clone()),
            None => ToolResult::success(format!(
                "Prompt \"{}\" not found. Use \"list-prompts\" to see available options.",
                name
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[tokio::test]
    async fn test_get_prompt_found() {
        let (_temp, catalog) = sample_catalog().await;
        let tool = GetPromptTool::new(catalog);

        let result = tool.execute(serde_json::json!({"name": "code-review"})).await;
        assert!(!result.is_error);
        assert_eq!(result.content, "Review this {{language}} code for bugs.");
    }

    #[tokio::test]
    async fn test_get_prompt_not_found() {
        let (_temp, catalog) = sample_catalog().await;
        let tool = GetPromptTool::new(catalog);

        let result = tool.execute(serde_json::json!({"name": "nope"})).await;
        assert!(!result.is_error);
        assert_eq!(
            result.content,
            "Prompt \"nope\" not found. Use \"list-prompts\" to see available options."
        );
    }

    #[tokio::test]
    async fn test_get_prompt_requires_name() {
        let (_temp, catalog) = sample_catalog().await;
        let tool = GetPromptTool::new(catalog);

        let result = tool.execute(serde_json::json!({})).await;
        assert!(result.is_error);
    }
}

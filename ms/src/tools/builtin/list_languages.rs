//! list-languages tool - languages covered by the catalog

use std::sync::Arc;

use async_trait::async_trait;
use promptcatalog::PromptCatalog;
use serde_json::Value;

use crate::tools::{Tool, ToolResult};

/// List every language at least one prompt supports
pub struct ListLanguagesTool {
    catalog: Arc<PromptCatalog>,
}

impl ListLanguagesTool {
    pub fn new(catalog: Arc<PromptCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for ListLanguagesTool {
    fn name(&self) -> &'static str {
        "list-languages"
    }

    fn description(&self) -> &'static str {
        "List the programming languages supported by the available prompts"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, _input: Value) -> ToolResult {
        let languages = self.catalog.supported_languages();
        if languages.is_empty() {
            return ToolResult::success("No languages available");
        }
        ToolResult::success(format!("Supported languages: {}", languages.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[tokio::test]
    async fn test_list_languages() {
        let (_temp, catalog) = sample_catalog().await;
        let tool = ListLanguagesTool::new(catalog);

        let result = tool.execute(serde_json::json!({})).await;
        assert_eq!(result.content, "Supported languages: go, javascript, python, rust");
    }

    #[tokio::test]
    async fn test_list_languages_empty() {
        let tool = ListLanguagesTool::new(Arc::new(PromptCatalog::new("missing")));

        let result = tool.execute(serde_json::json!({})).await;
        assert_eq!(result.content, "No languages available");
    }
}

//! add tool - sum two numbers

use async_trait::async_trait;
use serde_json::Value;

use crate::tools::{Tool, ToolResult};

/// Add two numbers
pub struct AddTool;

#[async_trait]
impl Tool for AddTool {
    fn name(&self) -> &'static str {
        "add"
    }

    fn description(&self) -> &'static str {
        "Add two numbers"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "a": { "type": "number" },
                "b": { "type": "number" }
            },
            "required": ["a", "b"]
        })
    }

    async fn execute(&self, input: Value) -> ToolResult {
        let a = match input["a"].as_f64() {
            Some(a) => a,
            None => return ToolResult::error("a must be a number"),
        };
        let b = match input["b"].as_f64() {
            Some(b) => b,
            None => return ToolResult::error("b must be a number"),
        };

        ToolResult::success(format!("{}", a + b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_integers() {
        let result = AddTool.execute(json!({"a": 1, "b": 2})).await;
        assert!(!result.is_error);
        assert_eq!(result.content, "3");
    }

    #[tokio::test]
    async fn test_add_fractions() {
        let result = AddTool.execute(json!({"a": 1.25, "b": 0.25})).await;
        assert_eq!(result.content, "1.5");
    }

    #[tokio::test]
    async fn test_add_negative() {
        let result = AddTool.execute(json!({"a": -4, "b": 1})).await;
        assert_eq!(result.content, "-3");
    }

    #[tokio::test]
    async fn test_add_rejects_strings() {
        let result = AddTool.execute(json!({"a": "1", "b": 2})).await;
        assert!(result.is_error);
        assert!(result.content.contains("a must be a number"));
    }

    #[tokio::test]
    async fn test_add_missing_argument() {
        let result = AddTool.execute(json!({"a": 1})).await;
        assert!(result.is_error);
        assert!(result.content.contains("b"));
    }
}

//! Tool trait definition

use async_trait::async_trait;
use serde_json::Value;

use crate::protocol::{CallToolResult, TextContent};

/// A tool that can be called by the client
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (matches the `name` of tools/call)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool
    async fn execute(&self, input: Value) -> ToolResult;
}

/// Result of a tool execution
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error result
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        CallToolResult {
            content: vec![TextContent::new(result.content)],
            is_error: result.is_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("3");
        assert!(!result.is_error);
        assert_eq!(result.content, "3");
    }

    #[test]
    fn test_tool_result_error() {
        let result = ToolResult::error("a must be a number");
        assert!(result.is_error);
        assert_eq!(result.content, "a must be a number");
    }

    #[test]
    fn test_into_call_tool_result() {
        let call: CallToolResult = ToolResult::error("boom").into();
        assert!(call.is_error);
        assert_eq!(call.content.len(), 1);
        assert_eq!(call.content[0].text, "boom");
    }
}

//! ToolRegistry - holds the tools a server exposes

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::protocol::ToolDefinition;

use super::{Tool, ToolResult};

/// Tools registered on a server, keyed by name
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: HashMap::new() }
    }

    /// Add a tool, replacing any tool with the same name
    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        debug!(name = tool.name(), "ToolRegistry::add_tool: called");
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Tool definitions for tools/list, ordered by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool by name
    pub async fn execute(&self, name: &str, input: Value) -> ToolResult {
        match self.tools.get(name) {
            Some(tool) => tool.execute(input).await,
            None => ToolResult::error(format!("Unknown tool: {}", name)),
        }
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::AddTool;

    #[test]
    fn test_definitions_sorted_with_schema() {
        let mut registry = ToolRegistry::new();
        registry.add_tool(Box::new(AddTool));

        let defs = registry.definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "add");
        assert_eq!(defs[0].input_schema["type"], "object");
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let registry = ToolRegistry::new();

        let result = registry.execute("unknown_tool", serde_json::json!({})).await;
        assert!(result.is_error);
        assert!(result.content.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_execute_registered_tool() {
        let mut registry = ToolRegistry::new();
        registry.add_tool(Box::new(AddTool));

        assert!(registry.has_tool("add"));
        let result = registry.execute("add", serde_json::json!({"a": 1, "b": 2})).await;
        assert!(!result.is_error);
        assert_eq!(result.content, "3");
    }
}

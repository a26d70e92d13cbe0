//! get-config tool - return the application settings document

use async_trait::async_trait;
use serde_json::Value;

use crate::config::AppSettings;
use crate::tools::{Tool, ToolResult};

/// Return the same JSON the `config://app/settings` resource serves
pub struct GetConfigTool {
    settings: AppSettings,
}

impl GetConfigTool {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Tool for GetConfigTool {
    fn name(&self) -> &'static str {
        "get-config"
    }

    fn description(&self) -> &'static str {
        "Get the application configuration"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, _input: Value) -> ToolResult {
        match self.settings.to_json() {
            Ok(json) => ToolResult::success(json),
            Err(e) => ToolResult::error(format!("Failed to serialize settings: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_config_default_settings() {
        let tool = GetConfigTool::new(AppSettings::default());

        let result = tool.execute(serde_json::json!({})).await;
        assert!(!result.is_error);
        assert_eq!(result.content, r#"{"theme":"dark","version":"1.2.3"}"#);
    }

    #[tokio::test]
    async fn test_get_config_custom_settings() {
        let tool = GetConfigTool::new(AppSettings {
            theme: "light".to_string(),
            version: "2.0.0".to_string(),
        });

        let result = tool.execute(Value::Null).await;
        assert_eq!(result.content, r#"{"theme":"light","version":"2.0.0"}"#);
    }
}

//! The three demo servers
//!
//! 1. `hello`    - a single `add` tool
//! 2. `resource` - the `config://app/settings` resource and a `get-config` tool
//! 3. `prompt`   - a prompt catalog surfaced as tools and prompt templates

use std::sync::Arc;

use promptcatalog::{CatalogConfig, PromptCatalog};
use tracing::{info, warn};

use crate::config::AppSettings;
use crate::prompts::CatalogPrompt;
use crate::protocol::McpServer;
use crate::resources::AppSettingsResource;
use crate::tools::builtin::{
    AddTool, GetConfigTool, GetPromptByCategoryTool, GetPromptTool, ListLanguagesTool, ListPromptsTool,
};

/// Version every demo server reports
pub const DEMO_VERSION: &str = "1.0.0";

/// Server exposing the `add` tool
pub fn hello_server() -> McpServer {
    let mut server = McpServer::new("hello-mcp-server", DEMO_VERSION);
    server.add_tool(Box::new(AddTool));
    server
}

/// Server exposing the settings resource and the tool that mirrors it
pub fn resource_server(settings: AppSettings) -> McpServer {
    let mut server = McpServer::new("resource-via-tool-server", DEMO_VERSION);
    server.add_resource(Box::new(AppSettingsResource::new(settings.clone())));
    server.add_tool(Box::new(GetConfigTool::new(settings)));
    server
}

/// Load the catalog to completion, then build the prompt server over it
pub async fn prompt_server(config: &CatalogConfig) -> McpServer {
    let mut catalog = PromptCatalog::from_config(config);
    let report = catalog.load_all().await;
    if !report.is_clean() {
        warn!(failed = report.errors.len(), "Some prompt files could not be loaded");
    }
    prompt_server_with(Arc::new(catalog))
}

/// Build the prompt server over an already loaded catalog
pub fn prompt_server_with(catalog: Arc<PromptCatalog>) -> McpServer {
    let mut server = McpServer::new("prompt-via-tool-server", DEMO_VERSION);

    // Discovery, then lookup by category+language, then direct access by name
    server.add_tool(Box::new(ListPromptsTool::new(catalog.clone())));
    server.add_tool(Box::new(GetPromptByCategoryTool::new(catalog.clone())));
    server.add_tool(Box::new(GetPromptTool::new(catalog.clone())));
    server.add_tool(Box::new(ListLanguagesTool::new(catalog.clone())));

    for prompt in catalog.iter() {
        server.add_prompt(Box::new(CatalogPrompt::new(prompt.clone())));
    }

    info!(prompts = catalog.len(), dir = ?catalog.dir(), "Prompt server ready");
    server
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_hello_server() {
        let server = hello_server();
        assert_eq!(server.info().name, "hello-mcp-server");
        assert_eq!(server.tools().tool_names(), vec!["add"]);
        assert!(server.resources().is_empty());
    }

    #[test]
    fn test_resource_server() {
        let server = resource_server(AppSettings::default());
        assert_eq!(server.tools().tool_names(), vec!["get-config"]);
        assert_eq!(server.resources().len(), 1);
    }

    #[tokio::test]
    async fn test_prompt_server_registers_tools_and_prompts() {
        let (_temp, catalog) = sample_catalog().await;
        let server = prompt_server_with(catalog);

        assert_eq!(
            server.tools().tool_names(),
            vec!["get-prompt", "get-prompt-by-category", "list-languages", "list-prompts"]
        );
        assert_eq!(server.prompts().len(), 3);
    }

    #[tokio::test]
    async fn test_prompt_server_missing_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = CatalogConfig {
            dir: temp.path().join("missing"),
        };

        let server = prompt_server(&config).await;
        assert_eq!(server.tools().len(), 4);
        assert!(server.prompts().is_empty());
    }
}

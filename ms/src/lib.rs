//! MCP demos - minimal Model Context Protocol servers
//!
//! A tutorial sequence of stdio servers, each exposing a little more of the
//! protocol: a callable tool, a readable resource, and a catalog of prompt
//! templates loaded from disk.
//!
//! # Modules
//!
//! - [`protocol`] - JSON-RPC framing, MCP types and the server loop
//! - [`tools`] - Tool trait, registry and built-in tools
//! - [`resources`] - Resource trait, registry and the settings resource
//! - [`prompts`] - Prompt template trait, registry and catalog-backed prompts
//! - [`demos`] - The three demo servers
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod demos;
pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod tools;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::{AppSettings, Config};
pub use demos::{hello_server, prompt_server, prompt_server_with, resource_server};
pub use prompts::{CatalogPrompt, PromptRegistry, PromptTemplate};
pub use protocol::{JsonRpcRequest, JsonRpcResponse, McpServer, ServerError};
pub use resources::{Resource, ResourceRegistry};
pub use tools::{Tool, ToolRegistry, ToolResult};

//! MCP stdio server
//!
//! Reads JSON-RPC requests one per line, dispatches them to the tool,
//! resource and prompt registries, and writes one response line per request.
//! Requests are handled in order; notifications get no response.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::prompts::{PromptRegistry, PromptTemplate};
use crate::resources::{Resource, ResourceRegistry};
use crate::tools::{Tool, ToolRegistry};

use super::error::ServerError;
use super::types::{
    CallToolResult, GetPromptParams, JSONRPC_VERSION, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION,
    ReadResourceParams, ServerInfo, ToolCallParams,
};

/// A server exposing tools, resources and prompts
pub struct McpServer {
    info: ServerInfo,
    tools: ToolRegistry,
    resources: ResourceRegistry,
    prompts: PromptRegistry,
}

impl McpServer {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            info: ServerInfo {
                name: name.into(),
                version: version.into(),
            },
            tools: ToolRegistry::new(),
            resources: ResourceRegistry::new(),
            prompts: PromptRegistry::new(),
        }
    }

    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.add_tool(tool);
    }

    pub fn add_resource(&mut self, resource: Box<dyn Resource>) {
        self.resources.add_resource(resource);
    }

    pub fn add_prompt(&mut self, prompt: Box<dyn PromptTemplate>) {
        self.prompts.add_prompt(prompt);
    }

    pub fn info(&self) -> &ServerInfo {
        &self.info
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    pub fn prompts(&self) -> &PromptRegistry {
        &self.prompts
    }

    /// Serve on process stdin/stdout until stdin closes
    pub async fn serve_stdio(&self) -> Result<(), ServerError> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve newline-delimited JSON-RPC until the reader reaches EOF
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(name = %self.info.name, version = %self.info.version, "MCP server listening");
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line).await,
                Err(e) => {
                    warn!(error = %e, "Message is not valid UTF-8");
                    let err = ServerError::Encoding(e);
                    Some(JsonRpcResponse::error(Value::Null, err.code(), err.to_string()))
                }
            };

            if let Some(response) = response {
                write_response(&mut writer, &response).await?;
            }
        }

        info!(name = %self.info.name, "Input closed, MCP server stopping");
        Ok(())
    }

    /// Handle one raw message line
    ///
    /// Text that is not JSON is a parse error with a `null` id; JSON that is
    /// not a request is an invalid request echoing whatever id it carried.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value = match serde_json::from_str::<Value>(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparsable message");
                let err = ServerError::Parse(e);
                return Some(JsonRpcResponse::error(Value::Null, err.code(), err.to_string()));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!(error = %e, "Message is not a request");
                let err = ServerError::InvalidRequest(e.to_string());
                Some(JsonRpcResponse::error(id, err.code(), err.to_string()))
            }
        }
    }

    /// Handle one request; `None` for notifications
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            self.handle_notification(&request);
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        debug!(method = %request.method, ?id, "handle_request: called");
        let result = if request.jsonrpc != JSONRPC_VERSION {
            Err(ServerError::InvalidRequest(format!(
                "jsonrpc must be \"{}\", got \"{}\"",
                JSONRPC_VERSION, request.jsonrpc
            )))
        } else {
            self.dispatch(&request.method, request.params).await
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => {
                debug!(method = %request.method, error = %e, "handle_request: failed");
                JsonRpcResponse::error(id, e.code(), e.to_string())
            }
        })
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => info!("Client initialized"),
            "notifications/cancelled" => debug!(params = %request.params, "Client cancelled a request"),
            other => debug!(method = %other, "Ignoring notification"),
        }
    }

    async fn dispatch(&self, method: &str, params: Value) -> Result<Value, ServerError> {
        match method {
            "initialize" => Ok(self.initialize_result()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.tools.definitions() })),
            "tools/call" => self.call_tool(params).await,
            "resources/list" => Ok(json!({ "resources": self.resources.descriptors() })),
            "resources/read" => {
                let params: ReadResourceParams = parse_params(params)?;
                let contents = self.resources.read(&params.uri).await?;
                Ok(json!({ "contents": [contents] }))
            }
            "prompts/list" => Ok(json!({ "prompts": self.prompts.descriptors() })),
            "prompts/get" => {
                let params: GetPromptParams = parse_params(params)?;
                let result = self.prompts.get(&params.name, &params.arguments)?;
                to_value(result)
            }
            other => Err(ServerError::MethodNotFound(other.to_string())),
        }
    }

    fn initialize_result(&self) -> Value {
        let mut capabilities = Map::new();
        if !self.tools.is_empty() {
            capabilities.insert("tools".to_string(), json!({}));
        }
        if !self.resources.is_empty() {
            capabilities.insert("resources".to_string(), json!({}));
        }
        if !self.prompts.is_empty() {
            capabilities.insert("prompts".to_string(), json!({}));
        }

        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": capabilities,
            "serverInfo": self.info,
        })
    }

    async fn call_tool(&self, params: Value) -> Result<Value, ServerError> {
        let params: ToolCallParams = parse_params(params)?;
        if !self.tools.has_tool(&params.name) {
            return Err(ServerError::UnknownTool(params.name));
        }

        info!(tool = %params.name, "Calling tool");
        let result: CallToolResult = self.tools.execute(&params.name, params.arguments).await.into();
        if result.is_error {
            warn!(tool = %params.name, "Tool returned an error result");
        }
        to_value(result)
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value, ServerError> {
    serde_json::to_value(value).map_err(|e| ServerError::Internal(e.to_string()))
}

fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, ServerError> {
    serde_json::from_value(params).map_err(|e| ServerError::InvalidParams(e.to_string()))
}

async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> Result<(), ServerError>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_vec(response).map_err(|e| ServerError::Internal(e.to_string()))?;
    line.push(b'\n');
    writer.write_all(&line).await?;
    writer.flush().await?;
    Ok(())
}

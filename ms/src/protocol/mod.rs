//! Model Context Protocol plumbing
//!
//! JSON-RPC 2.0 messages exchanged one per line over stdio. The server owns
//! the tool, resource and prompt registries and answers the list/call/read/get
//! methods for each.

mod error;
mod server;
mod types;

pub use error::ServerError;
pub use server::McpServer;
pub use types::*;

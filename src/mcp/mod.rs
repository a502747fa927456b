//! MCP tool server
//!
//! Exposes the dispatcher as a set of notification tools over
//! line-delimited JSON-RPC on stdio.

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
pub use tools::ToolRouter;

use crate::notify::Dispatcher;

/// Build a server around a dispatcher
pub fn create_server(dispatcher: Dispatcher) -> McpServer {
    McpServer::new(ToolRouter::new(dispatcher))
}

//! Line-delimited JSON-RPC server on stdio
//!
//! stdout carries protocol messages only; all diagnostics go through
//! `tracing`, which writes to stderr or the debug log file.

use super::protocol::{
    json_rpc_error, json_rpc_response, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
    PROTOCOL_VERSION, SERVER_NAME,
};
use super::tools::{tool_definitions, ToolRouter};
use crate::errors::{AppResult, IoResultExt};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

pub struct McpServer {
    tools: ToolRouter,
}

impl McpServer {
    pub fn new(tools: ToolRouter) -> Self {
        Self { tools }
    }

    /// Serve stdin/stdout until EOF or Ctrl-C
    pub async fn run(&self) -> AppResult<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();

        info!("Claude Code Notification MCP server running on stdio");

        tokio::select! {
            result = self.serve(reader, writer) => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Received interrupt, shutting down MCP server");
                Ok(())
            }
        }
    }

    /// Serve one request per line until the reader is exhausted
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines
            .next_line()
            .await
            .in_file_operation("<stdin>", "read request")?
        {
            let Some(response) = self.handle_line(&line).await else {
                continue;
            };

            let mut payload = serde_json::to_string(&response)?;
            payload.push('\n');
            writer
                .write_all(payload.as_bytes())
                .await
                .in_file_operation("<stdout>", "write response")?;
            writer
                .flush()
                .await
                .in_file_operation("<stdout>", "flush response")?;
        }

        debug!("stdin closed, MCP server exiting");
        Ok(())
    }

    /// Handle one line; `None` when no reply is due
    pub async fn handle_line(&self, line: &str) -> Option<Value> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let request: Value = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!("Unparseable JSON-RPC message: {}", e);
                return Some(json_rpc_error(None, PARSE_ERROR, "Parse error"));
            }
        };

        let id = request.get("id").cloned().filter(|id| !id.is_null());
        let Some(method) = request.get("method").and_then(Value::as_str) else {
            return id.map(|id| json_rpc_error(Some(id), INVALID_REQUEST, "Invalid Request"));
        };

        debug!("MCP request: {}", method);

        let result = match method {
            "initialize" => Some(initialize_result()),
            "ping" => Some(json!({})),
            "tools/list" => Some(json!({ "tools": tool_definitions() })),
            "tools/call" => {
                let params = request.get("params").cloned().unwrap_or(Value::Null);
                let name = params.get("name").and_then(Value::as_str).unwrap_or("");
                let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
                Some(self.tools.call(name, arguments).await.to_value())
            }
            m if m.starts_with("notifications/") => None,
            _ => {
                return id.map(|id| json_rpc_error(Some(id), METHOD_NOT_FOUND, "Method not found"));
            }
        };

        // Messages without an id are notifications and never answered
        match (id, result) {
            (Some(id), Some(result)) => Some(json_rpc_response(Some(id), result)),
            _ => None,
        }
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        },
        "capabilities": {
            "tools": {}
        }
    })
}

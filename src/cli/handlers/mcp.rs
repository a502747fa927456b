//! MCP server handler

use super::super::CliContext;
use crate::mcp;
use anyhow::{Context, Result};
use tracing::info;

pub struct McpHandler<'a> {
    context: &'a CliContext,
}

impl<'a> McpHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    /// Serve tools on stdio until the client disconnects
    pub async fn handle_mcp(&self) -> Result<()> {
        let dispatcher = self.context.dispatcher();
        info!("Starting MCP server with {} backend", dispatcher.backend());

        mcp::create_server(dispatcher)
            .run()
            .await
            .context("MCP server stopped with an error")
    }
}

super::traits::context_handler!(McpHandler);

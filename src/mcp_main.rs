//! Standalone MCP server binary
//!
//! Equivalent to `ccnotify mcp`, for MCP clients that want a single
//! executable without arguments.

use ccnotify::cli::CliContext;
use ccnotify::mcp;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ccnotify-mcp")]
#[command(about = "MCP server exposing desktop notification tools over stdio")]
#[command(version)]
struct Args {
    /// Write debug logs to the cat-ccnotify data directory
    #[arg(long, env = "CAT_CCNOTIFY_DEBUG", value_parser = clap::builder::FalseyValueParser::new())]
    debug: bool,

    /// Claude configuration directory (default: ~/.claude)
    #[arg(long, env = "CLAUDE_CONFIG_DIR", value_name = "DIR")]
    claude_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let context = match CliContext::new(args.claude_dir, args.debug, false) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("ccnotify-mcp: {e:#}");
            std::process::exit(1);
        }
    };
    let guard = context.init_logging("mcp-server");

    let code = match mcp::create_server(context.dispatcher()).run().await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            1
        }
    };

    drop(guard);
    std::process::exit(code);
}

//! Command-line front end: parsing, context setup, exit codes

pub mod commands;
pub mod context;
pub mod handlers;

use crate::errors::AppError;
use clap::Parser;

pub use commands::{Cli, Commands, HookCommand};
pub use context::CliContext;
pub use handlers::CommandHandler;

/// Entry point shared by `main`
pub struct CliApp;

impl CliApp {
    /// Parse command line arguments, execute the command and return the exit code
    ///
    /// Hooks always exit 0 so a broken notification never blocks the host;
    /// other commands exit 1 on failure after printing the error.
    pub async fn run() -> i32 {
        let cli = Cli::parse();
        let is_hook = cli.command.is_hook();

        let context = match CliContext::new(cli.claude_dir.clone(), cli.debug, cli.verbose) {
            Ok(context) => context,
            Err(e) if is_hook => {
                eprintln!("ccnotify: {e:#}");
                return 0;
            }
            Err(e) => {
                eprintln!("❌ {e:#}");
                return 1;
            }
        };

        // Held until the command completes so the file writer flushes
        let _log_guard = context.init_logging(cli.command.log_component());

        let handler = CommandHandler::new(context);
        match handler.handle_command(cli.command).await {
            Ok(()) => 0,
            Err(e) if is_hook => {
                tracing::error!("Hook failed: {:#}", e);
                0
            }
            Err(e) => {
                let category = e
                    .downcast_ref::<AppError>()
                    .map_or("command", AppError::category);
                tracing::debug!(category, "Command failed: {:?}", e);
                eprintln!("❌ {e:#}");
                1
            }
        }
    }
}

//! clap definitions for `ccnotify` and its subcommands

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level arguments
#[derive(Parser)]
#[command(name = "ccnotify")]
#[command(about = "Desktop notifications with cat sounds for Claude Code hooks")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Write debug logs to the cat-ccnotify data directory
    #[arg(long, global = true, env = "CAT_CCNOTIFY_DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// Enable verbose output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Claude configuration directory (default: ~/.claude)
    #[arg(long, global = true, env = "CLAUDE_CONFIG_DIR", value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a hook (invoked by Claude Code through the installed scripts)
    Hook {
        #[command(subcommand)]
        event: HookCommand,
    },

    /// Register the notification and stop hooks in hooks.json
    Install,

    /// Remove the notification and stop hooks from hooks.json
    Uninstall,

    /// Register the MCP server and a Notification hook in Claude Code's settings.json
    Setup {
        /// Remove the entries added by a previous setup instead
        #[arg(long)]
        remove: bool,
    },

    /// Fire a sample notification and stop event through the installed hooks
    Test,

    /// Serve the notification tools over MCP on stdio
    Mcp,

    /// List available notification sounds
    Sounds,
}

/// Hook events
#[derive(Subcommand)]
pub enum HookCommand {
    /// Notification event; reads {"title","message"} JSON from stdin
    Notification {
        /// Fallback title when stdin has no JSON payload
        title: Option<String>,

        /// Fallback message when stdin has no JSON payload
        message: Option<String>,

        /// Fallback level (informational only)
        level: Option<String>,

        /// Print the processed notification instead of showing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Session stop event
    Stop {
        /// Fallback title when stdin has no JSON payload
        title: Option<String>,

        /// Fallback message when stdin has no JSON payload
        message: Option<String>,

        /// Print the processed notification instead of showing it
        #[arg(long)]
        dry_run: bool,
    },
}

impl Commands {
    /// Component name used for this command's debug log file
    pub fn log_component(&self) -> &'static str {
        match self {
            Commands::Hook {
                event: HookCommand::Notification { .. },
            } => "notification-hook",
            Commands::Hook {
                event: HookCommand::Stop { .. },
            } => "stop-hook",
            Commands::Mcp => "mcp-server",
            _ => "ccnotify",
        }
    }

    pub fn is_hook(&self) -> bool {
        matches!(self, Commands::Hook { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_hook_with_fallback_args() {
        let cli = Cli::try_parse_from([
            "ccnotify",
            "hook",
            "notification",
            "Build",
            "Done",
            "warning",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Hook {
                event:
                    HookCommand::Notification {
                        title,
                        message,
                        level,
                        dry_run,
                    },
            } => {
                assert_eq!(title.as_deref(), Some("Build"));
                assert_eq!(message.as_deref(), Some("Done"));
                assert_eq!(level.as_deref(), Some("warning"));
                assert!(dry_run);
            }
            _ => panic!("expected hook notification"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ccnotify",
            "hook",
            "stop",
            "--debug",
            "--claude-dir",
            "/tmp/c",
        ])
            .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.claude_dir, Some(PathBuf::from("/tmp/c")));
        assert_eq!(cli.command.log_component(), "stop-hook");
        assert!(cli.command.is_hook());
    }

    #[test]
    fn test_log_components() {
        let cli = Cli::try_parse_from(["ccnotify", "mcp"]).unwrap();
        assert_eq!(cli.command.log_component(), "mcp-server");
        let cli = Cli::try_parse_from(["ccnotify", "install"]).unwrap();
        assert_eq!(cli.command.log_component(), "ccnotify");
    }
}

//! Routes each parsed command to the handler that owns it

mod hook;
mod install;
mod mcp;
pub(crate) mod traits;

use super::commands::HookCommand;
use super::{CliContext, Commands};
use crate::hooks::{HookArgs, HookEvent};
use crate::notify::Sound;
use anyhow::Result;
use traits::Handlers;

pub use hook::HookHandler;
pub use install::InstallHandler;
pub use mcp::McpHandler;
pub use test::TestHandler;

/// Owns the context and dispatches commands to handlers
pub struct CommandHandler {
    context: CliContext,
}

impl CommandHandler {
    pub fn new(context: CliContext) -> Self {
        Self { context }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        let handlers = Handlers::new(&self.context);

        match command {
            Commands::Hook { event } => {
                let (event, args, dry_run) = split_hook_command(event);
                handlers
                    .get::<HookHandler>()
                    .handle_hook(event, args, dry_run)
                    .await
            }
            Commands::Install => handlers.get::<InstallHandler>().handle_install(),
            Commands::Uninstall => handlers.get::<InstallHandler>().handle_uninstall(),
            Commands::Setup { remove } => handlers.get::<InstallHandler>().handle_setup(remove),
            Commands::Test => handlers.get::<TestHandler>().handle_test().await,
            Commands::Mcp => handlers.get::<McpHandler>().handle_mcp().await,
            Commands::Sounds => {
                println!("{}", Sound::catalog());
                Ok(())
            }
        }
    }
}

fn split_hook_command(command: HookCommand) -> (HookEvent, HookArgs, bool) {
    match command {
        HookCommand::Notification {
            title,
            message,
            level,
            dry_run,
        } => (
            HookEvent::Notification,
            HookArgs {
                title,
                message,
                level,
            },
            dry_run,
        ),
        HookCommand::Stop {
            title,
            message,
            dry_run,
        } => (
            HookEvent::Stop,
            HookArgs {
                title,
                message,
                level: None,
            },
            dry_run,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_stop_command_has_no_level() {
        let (event, args, dry_run) = split_hook_command(HookCommand::Stop {
            title: Some("Done".into()),
            message: None,
            dry_run: true,
        });

        assert_eq!(event, HookEvent::Stop);
        assert_eq!(args.title.as_deref(), Some("Done"));
        assert!(args.level.is_none());
        assert!(dry_run);
    }

    #[test]
    fn test_split_notification_command() {
        let (event, args, dry_run) = split_hook_command(HookCommand::Notification {
            title: None,
            message: Some("Tests passed".into()),
            level: Some("info".into()),
            dry_run: false,
        });

        assert_eq!(event, HookEvent::Notification);
        assert_eq!(args.message.as_deref(), Some("Tests passed"));
        assert_eq!(args.level.as_deref(), Some("info"));
        assert!(!dry_run);
    }
}

//! cat-ccnotify
//!
//! Desktop notifications for Claude Code: hook runners for notification and
//! session stop events, an MCP tool server, and an installer that registers
//! the hooks in the host's `hooks.json`.

pub mod cli;
pub mod config;
pub mod errors;
pub mod hooks;
pub mod installer;
pub mod logging;
pub mod mcp;
pub mod notify;

// Re-export commonly used types for convenience
pub use config::{AppPaths, ConfigManager, Settings};
pub use errors::{AppError, AppResult};
pub use hooks::{create_default_processor, DefaultHookProcessor, HookEvent, HookProcessor};
pub use notify::{Dispatcher, NotificationRequest, Notifier, Sound};

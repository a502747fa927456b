//! State shared by every command handler
//!
//! Resolves paths and settings once and hands them to every handler.

use crate::config::{AppPaths, ConfigManager};
use crate::logging::{self, LogOptions};
use crate::notify::{create_platform_notifier, Dispatcher};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

/// Paths, flags and settings resolved once per invocation
#[derive(Clone)]
pub struct CliContext {
    pub paths: AppPaths,
    pub debug: bool,
    pub verbose: bool,
    pub config_manager: Arc<ConfigManager>,
}

impl CliContext {
    /// Resolve paths (from `--claude-dir` or the home directory) and load settings
    pub fn new(claude_dir: Option<PathBuf>, debug: bool, verbose: bool) -> Result<Self> {
        let paths = AppPaths::resolve(claude_dir)?;
        let config_manager = Arc::new(ConfigManager::load(paths.clone()));

        Ok(Self {
            paths,
            debug,
            verbose,
            config_manager,
        })
    }

    /// Initialize logging; `component` names the debug log file
    ///
    /// Keep the returned guard alive until the command finishes.
    pub fn init_logging(&self, component: &str) -> Option<WorkerGuard> {
        let options = LogOptions {
            verbose: self.verbose,
            file: self.debug.then(|| self.paths.log_file(component)),
            file_level: self.config_manager.settings().logging.level.clone(),
        };
        let guard = logging::init(&options);

        if let Some(warning) = self.config_manager.load_warning() {
            tracing::warn!("{}", warning);
        }

        if self.verbose {
            tracing::debug!("Verbose logging enabled");
            tracing::debug!("Claude config dir: {:?}", self.paths.claude_dir);
            tracing::debug!("Settings: {:?}", self.config_manager.settings());
        }

        guard
    }

    /// Dispatcher for the host platform, configured from settings
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(
            create_platform_notifier(),
            self.config_manager.settings().notifications.clone(),
        )
    }
}

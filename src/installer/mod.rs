//! Hook installation
//!
//! Registers the hook wrapper scripts in the host's hooks.json and removes
//! them again. `setup` registers the MCP server and a `Notification` hook in
//! the host's settings.json. Pre-flight checks live in [`preflight`] and are
//! run by the CLI before installing.

pub mod config_editor;
pub mod host_settings;
pub mod preflight;
pub mod scripts;

pub use config_editor::{JsonConfig, JsonConfigEditor};
pub use scripts::HookScripts;

use crate::config::AppPaths;
use crate::errors::AppResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// What `install` did
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub hooks_config: PathBuf,
    pub scripts: HookScripts,
    /// The Claude config directory did not exist and was created
    pub created_claude_dir: bool,
    /// Existing hooks.json could not be parsed and was replaced
    pub parse_warning: Option<String>,
}

/// What `uninstall` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// No hooks.json present
    NothingToUninstall,
    /// Keys removed (or already absent) and the file rewritten
    Removed { hooks_config: PathBuf, had_hooks: bool },
}

/// What `setup` did to settings.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub settings_file: PathBuf,
    /// settings.json did not exist before
    pub created: bool,
    /// false when a `ccnotify` MCP server was already configured
    pub mcp_server_added: bool,
    /// false when a ccnotify `Notification` hook was already configured
    pub hook_added: bool,
    /// Existing settings.json could not be parsed and was replaced
    pub parse_warning: Option<String>,
}

/// What `setup --remove` did to settings.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupRemoval {
    /// No settings.json present
    NothingToRemove,
    Removed {
        settings_file: PathBuf,
        mcp_server_removed: bool,
        hook_removed: bool,
    },
}

pub struct Installer<'a> {
    paths: &'a AppPaths,
    executable: PathBuf,
}

impl<'a> Installer<'a> {
    /// `executable` is the binary the wrapper scripts will exec
    pub fn new(paths: &'a AppPaths, executable: impl Into<PathBuf>) -> Self {
        Self {
            paths,
            executable: executable.into(),
        }
    }

    fn editor(&self) -> JsonConfigEditor {
        JsonConfigEditor::new(&self.paths.hooks_config)
    }

    fn settings_editor(&self) -> JsonConfigEditor {
        JsonConfigEditor::new(&self.paths.host_settings)
    }

    pub fn install(&self) -> AppResult<InstallReport> {
        let created_claude_dir = !self.paths.claude_dir.exists();

        let scripts = scripts::write_hook_scripts(&self.paths.hook_scripts_dir, &self.executable)?;

        let editor = self.editor();
        let mut config = editor.load()?;
        config.register(&scripts.notification, &scripts.stop);
        editor.save(&config)?;

        info!("Registered hooks in {}", editor.path().display());

        Ok(InstallReport {
            hooks_config: editor.path().to_path_buf(),
            scripts,
            created_claude_dir,
            parse_warning: config.warning,
        })
    }

    pub fn uninstall(&self) -> AppResult<UninstallOutcome> {
        let editor = self.editor();
        if !editor.exists() {
            return Ok(UninstallOutcome::NothingToUninstall);
        }

        let mut config = editor.load()?;
        let had_hooks = config.unregister();
        editor.save(&config)?;

        info!("Removed hooks from {}", editor.path().display());

        Ok(UninstallOutcome::Removed {
            hooks_config: editor.path().to_path_buf(),
            had_hooks,
        })
    }

    /// Register `mcp_server` and a `Notification` hook in settings.json
    pub fn setup(&self, mcp_server: &Path) -> AppResult<SetupReport> {
        let editor = self.settings_editor();
        let created = !editor.exists();

        let mut settings = editor.load()?;
        let mcp_server_added = host_settings::add_mcp_server(&mut settings, mcp_server);
        let hook_added = host_settings::add_notification_hook(&mut settings, &self.executable);
        editor.save(&settings)?;

        info!("Updated {}", editor.path().display());

        Ok(SetupReport {
            settings_file: editor.path().to_path_buf(),
            created,
            mcp_server_added,
            hook_added,
            parse_warning: settings.warning,
        })
    }

    /// Remove what `setup` registered; other settings are left as they were
    pub fn remove_setup(&self) -> AppResult<SetupRemoval> {
        let editor = self.settings_editor();
        if !editor.exists() {
            return Ok(SetupRemoval::NothingToRemove);
        }

        let mut settings = editor.load()?;
        let mcp_server_removed = host_settings::remove_mcp_server(&mut settings);
        let hook_removed = host_settings::remove_notification_hooks(&mut settings);
        editor.save(&settings)?;

        info!("Removed ccnotify entries from {}", editor.path().display());

        Ok(SetupRemoval::Removed {
            settings_file: editor.path().to_path_buf(),
            mcp_server_removed,
            hook_removed,
        })
    }
}
